mod board;
mod game_state;
pub mod move_engine;
mod replay;
mod settings;
mod types;
pub mod win_detector;

pub use board::{Board, BoardSnapshot};
pub use game_state::{GameController, MoveOutcome};
pub use replay::{ReplayResult, ReplayStep, replay_columns};
pub use settings::GameSettings;
pub use types::{
    Cell, Direction, GameStatus, MIN_DIMENSION, Position, WIN_LENGTH, WinningLine,
};
pub use win_detector::{check_win, check_win_at, find_winning_line};
