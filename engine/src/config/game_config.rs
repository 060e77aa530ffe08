use serde::{Deserialize, Serialize};

use crate::connect_four::GameSettings;
use crate::logger::LogLevel;
use crate::{Player, PlayerColor};
use super::Validate;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "connect_four.yaml";

/// Largest board a config file may ask for. Games built in code are not capped.
pub const MAX_CONFIG_DIMENSION: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.color.clone())
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.color.as_str().trim().is_empty() {
            return Err(format!("Player {} must have a color", self.name));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: GameSettings,
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
    pub logging: LoggingConfig,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        if self.board.height > MAX_CONFIG_DIMENSION || self.board.width > MAX_CONFIG_DIMENSION {
            return Err(format!(
                "Board dimensions must not exceed {max}x{max}, got {}x{}",
                self.board.height,
                self.board.width,
                max = MAX_CONFIG_DIMENSION
            ));
        }
        self.player1.validate()?;
        self.player2.validate()?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: GameSettings::default(),
            player1: PlayerConfig {
                name: "Player 1".to_string(),
                color: PlayerColor::from("red"),
            },
            player2: PlayerConfig {
                name: "Player 2".to_string(),
                color: PlayerColor::from("yellow"),
            },
            logging: LoggingConfig::default(),
        }
    }
}
