//! Turns a column choice into a placed piece.

use crate::{MoveError, PlayerId};
use super::board::Board;
use super::types::Position;

/// Drops a piece for `player` into `column` and returns where it settled.
/// Exactly one cell changes on success; nothing changes on failure.
pub fn drop_piece(board: &mut Board, column: isize, player: PlayerId) -> Result<Position, MoveError> {
    let width = board.width();
    let column = usize::try_from(column)
        .ok()
        .filter(|&c| c < width)
        .ok_or(MoveError::InvalidColumn { column, width })?;

    let y = board
        .landing_row(column)
        .ok_or(MoveError::ColumnFull { column })?;

    board.occupy(y, column, player)?;
    Ok(Position::new(y, column))
}
