//! Four-in-a-row detection.
//!
//! [`find_winning_line`] re-scans the whole board: every cell is tried as the
//! anchor of a run in each [`Direction`], rows top to bottom, columns left to
//! right, and the first complete run wins. [`check_win_at`] only looks at runs
//! passing through one coordinate. On any board reached by legal play the last
//! move is the only one that can complete a run, so both agree there.

use crate::PlayerId;
use super::board::Board;
use super::types::{Direction, Position, WIN_LENGTH, WinningLine};

pub fn find_winning_line(board: &Board, player: PlayerId) -> Option<WinningLine> {
    for y in 0..board.height() {
        for x in 0..board.width() {
            let anchor = Position::new(y, x);
            for direction in Direction::ALL {
                if let Some(line) = line_from(board, anchor, direction, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

pub fn check_win(board: &Board, player: PlayerId) -> bool {
    find_winning_line(board, player).is_some()
}

/// Runs through `position` that belong entirely to `player`.
pub fn check_win_at(board: &Board, position: Position, player: PlayerId) -> Option<WinningLine> {
    if !board.get(position)?.is_occupied_by(player) {
        return None;
    }

    for direction in Direction::ALL {
        for offset in 0..WIN_LENGTH as isize {
            let Some(anchor) = position.step(direction, -offset) else {
                break;
            };
            if let Some(line) = line_from(board, anchor, direction, player) {
                return Some(line);
            }
        }
    }
    None
}

fn line_from(
    board: &Board,
    anchor: Position,
    direction: Direction,
    player: PlayerId,
) -> Option<WinningLine> {
    let mut cells = [anchor; WIN_LENGTH];
    for (step, slot) in cells.iter_mut().enumerate() {
        let position = anchor.step(direction, step as isize)?;
        if !board.get(position)?.is_occupied_by(player) {
            return None;
        }
        *slot = position;
    }
    Some(WinningLine { direction, cells })
}
