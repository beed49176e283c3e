//! Error types for session bootstrap and configuration.
//!
//! Gameplay operations never produce errors: an invalid move, mine, place,
//! eat or craft is a silent no-op reported as `false`. Only loading and
//! validating a [`GameConfig`](crate::config::GameConfig) can fail.

use std::path::PathBuf;

/// Result alias used by the fallible bootstrap paths
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}

/// Create an invalid config error
pub fn invalid_config(message: impl std::fmt::Display) -> GameError {
    GameError::InvalidConfig {
        message: message.to_string(),
    }
}
