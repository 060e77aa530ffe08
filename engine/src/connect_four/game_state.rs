use crate::{BoardError, MoveError, Player, PlayerId, log, log_debug, log_warn};
use super::board::{Board, BoardSnapshot};
use super::move_engine;
use super::settings::GameSettings;
use super::types::{GameStatus, Position};
use super::win_detector::find_winning_line;

/// What an accepted drop did: where the piece landed, who dropped it, and the
/// status after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub position: Position,
    pub mover: PlayerId,
    pub status: GameStatus,
}

/// Owns the board and status of one game. All moves go through
/// [`GameController::drop_piece`]; readers get shared references or snapshots.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    status: GameStatus,
    settings: GameSettings,
    players: [Player; 2],
    move_count: usize,
    last_move: Option<Position>,
}

impl GameController {
    pub fn new_game(
        settings: GameSettings,
        player1: Player,
        player2: Player,
    ) -> Result<Self, BoardError> {
        let board = Board::create(settings.height, settings.width)?;
        log!(
            "New {}x{} game: {} ({}) vs {} ({})",
            settings.height,
            settings.width,
            player1.name,
            player1.color,
            player2.name,
            player2.color
        );

        Ok(Self {
            board,
            status: GameStatus::InProgress(PlayerId::One),
            settings,
            players: [player1, player2],
            move_count: 0,
            last_move: None,
        })
    }

    pub fn drop_piece(&mut self, column: isize) -> Result<MoveOutcome, MoveError> {
        let GameStatus::InProgress(active) = self.status else {
            log_warn!("Rejected drop into column {}: game is already finished", column);
            return Err(MoveError::GameAlreadyFinished);
        };

        let position = move_engine::drop_piece(&mut self.board, column, active)
            .inspect_err(|e| log_warn!("Rejected drop by {} into column {}: {}", active, column, e))?;
        self.move_count += 1;
        self.last_move = Some(position);

        self.status = if let Some(line) = find_winning_line(&self.board, active) {
            GameStatus::Won { winner: active, line }
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress(active.other())
        };

        log_debug!(
            "Move {}: {} dropped into column {}, landed at ({}, {})",
            self.move_count,
            active,
            position.x,
            position.y,
            position.x
        );
        match self.status {
            GameStatus::Won { winner, line } => log!(
                "{} wins after {} moves, from ({}, {}) to ({}, {})",
                self.player(winner).name,
                self.move_count,
                line.start().y,
                line.start().x,
                line.end().y,
                line.end().x
            ),
            GameStatus::Tied => log!("Tie after {} moves", self.move_count),
            GameStatus::InProgress(_) => {}
        }

        Ok(MoveOutcome {
            position,
            mover: active,
            status: self.status,
        })
    }

    /// Replaces the whole game. On error the current game is kept.
    pub fn reset(
        &mut self,
        settings: GameSettings,
        player1: Player,
        player2: Player,
    ) -> Result<(), BoardError> {
        *self = Self::new_game(settings, player1, player2)?;
        Ok(())
    }

    /// Starts over with the same board size and players.
    pub fn restart(&mut self) {
        log!("Restarting {}x{} game", self.settings.height, self.settings.width);
        self.board = self.board.cleared();
        self.status = GameStatus::InProgress(PlayerId::One);
        self.move_count = 0;
        self.last_move = None;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.status.active_player()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}
