//! Error types for the rules engine and its configuration

use thiserror::Error;

/// Errors produced by the game library.
///
/// Collisions are not errors: reaching game over is an ordinary state
/// transition of the session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Food was queried before its first spawn
    #[error("food has not been spawned yet")]
    NotInitialized,

    /// A raw input token that does not name a known input
    #[error("unrecognised input: {0:?}")]
    InvalidDirectionInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config file")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
