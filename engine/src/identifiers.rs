use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two seats a piece belongs to. This is what a board cell stores;
/// display attributes live on [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerColor(String);

impl PlayerColor {
    pub fn new(color: String) -> Self {
        Self(color)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerColor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlayerColor {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<PlayerColor> for String {
    fn from(color: PlayerColor) -> Self {
        color.0
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: PlayerColor,
}

impl Player {
    pub fn new(name: impl Into<String>, color: impl Into<PlayerColor>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::One.to_string(), "Player 1");
        assert_eq!(PlayerId::Two.to_string(), "Player 2");
    }

    #[test]
    fn test_player_color_round_trip() {
        let color = PlayerColor::from("#ff0000");
        assert_eq!(color.as_str(), "#ff0000");
        let raw: String = color.into();
        assert_eq!(raw, "#ff0000");
    }

    #[test]
    fn test_player_new() {
        let player = Player::new("Alice", "red");
        assert_eq!(player.name, "Alice");
        assert_eq!(player.color, PlayerColor::new("red".to_string()));
    }
}
