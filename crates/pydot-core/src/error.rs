//! Error types for PyDot

use thiserror::Error;

/// Core error type for PyDot operations
#[derive(Error, Debug)]
pub enum PydotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Process error: {0}")]
    Process(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for PyDot operations
pub type Result<T> = std::result::Result<T, PydotError>;
