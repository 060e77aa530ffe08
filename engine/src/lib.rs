pub mod config;
pub mod connect_four;
pub mod error;
pub mod identifiers;
pub mod logger;

pub use error::{BoardError, ConfigError, MoveError};
pub use identifiers::*;
