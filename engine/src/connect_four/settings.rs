use serde::{Deserialize, Serialize};

use crate::BoardError;
use crate::config::Validate;
use super::types::MIN_DIMENSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub height: usize,
    pub width: usize,
}

impl GameSettings {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn check_dimensions(&self) -> Result<(), BoardError> {
        if self.height >= MIN_DIMENSION && self.width >= MIN_DIMENSION {
            Ok(())
        } else {
            Err(BoardError::InvalidDimensions {
                height: self.height,
                width: self.width,
            })
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { height: 6, width: 7 }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        self.check_dimensions().map_err(|e| e.to_string())
    }
}
