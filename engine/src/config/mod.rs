//! YAML configuration: where the text lives, how it is parsed, and the
//! settings a game session starts from.

mod content_provider;
mod game_config;
mod manager;
mod serializer;
mod validate;

pub use content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use game_config::{DEFAULT_CONFIG_FILE_NAME, GameConfig, LoggingConfig, MAX_CONFIG_DIMENSION, PlayerConfig};
pub use manager::ConfigManager;
pub use serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
