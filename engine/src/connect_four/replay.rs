use crate::{BoardError, MoveError, Player};
use super::game_state::{GameController, MoveOutcome};
use super::settings::GameSettings;
use super::types::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStep {
    Accepted(MoveOutcome),
    Rejected { column: isize, error: MoveError },
}

#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub controller: GameController,
    pub steps: Vec<ReplayStep>,
}

impl ReplayResult {
    pub fn status(&self) -> GameStatus {
        self.controller.status()
    }

    pub fn accepted_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ReplayStep::Accepted(_)))
            .count()
    }

    pub fn rejected(&self) -> impl Iterator<Item = (isize, &MoveError)> {
        self.steps.iter().filter_map(|step| match step {
            ReplayStep::Rejected { column, error } => Some((*column, error)),
            ReplayStep::Accepted(_) => None,
        })
    }
}

/// Plays `columns` in order on a fresh game. Rejected columns are recorded and
/// skipped, the same way an input collaborator ignores a click on a full column.
pub fn replay_columns(
    settings: GameSettings,
    player1: Player,
    player2: Player,
    columns: &[isize],
) -> Result<ReplayResult, BoardError> {
    let mut controller = GameController::new_game(settings, player1, player2)?;
    let steps = columns
        .iter()
        .map(|&column| match controller.drop_piece(column) {
            Ok(outcome) => ReplayStep::Accepted(outcome),
            Err(error) => ReplayStep::Rejected { column, error },
        })
        .collect();

    Ok(ReplayResult { controller, steps })
}
