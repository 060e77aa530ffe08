use std::path::PathBuf;

use crate::connect_four::MIN_DIMENSION;

/// Errors raised by the board itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(
        "board must be at least {min}x{min}, got {height}x{width}",
        min = MIN_DIMENSION
    )]
    InvalidDimensions { height: usize, width: usize },

    #[error("cell ({y}, {x}) is outside the board")]
    OutOfBounds { y: usize, x: usize },

    #[error("cell ({y}, {x}) is already occupied")]
    CellOccupied { y: usize, x: usize },
}

/// Reasons a column drop is rejected. A rejected drop never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{width})")]
    InvalidColumn { column: isize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already finished")]
    GameAlreadyFinished,

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { height: 3, width: 7 };
        assert_eq!(
            err.to_string(),
            "board must be at least 4x4, got 3x7"
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: -1, width: 7 };
        assert_eq!(err.to_string(), "column -1 is outside the board (0..7)");
        assert_eq!(MoveError::ColumnFull { column: 2 }.to_string(), "column 2 is full");
    }

    #[test]
    fn test_move_error_from_board_error() {
        let err: MoveError = BoardError::CellOccupied { y: 5, x: 0 }.into();
        assert_eq!(err, MoveError::Board(BoardError::CellOccupied { y: 5, x: 0 }));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board height must be at least 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board height must be at least 4"
        );
    }
}
