//! Error types for codebox

use std::path::PathBuf;

use thiserror::Error;

use crate::buffer::Position;

/// Result type alias for codebox operations
pub type Result<T> = std::result::Result<T, CodeBoxError>;

/// Widget error types
#[derive(Error, Debug)]
pub enum CodeBoxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Style configuration file not found: '{}'", .0.display())]
    SchemeNotFound(PathBuf),

    #[error("Malformed style configuration: {0}")]
    SchemeShape(String),

    #[error("Invalid style configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid text position: {0}")]
    InvalidPosition(Position),

    #[error("Invalid tab length '{0}', please give it in characters, eg: '4ch'")]
    InvalidTabWidth(String),
}
