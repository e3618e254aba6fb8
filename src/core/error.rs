//! Custom error types for Tandem
//!
//! The classifiers and the turn controller are total and never fail.
//! Errors only come from configuration, argument parsing and output I/O.

use thiserror::Error;

/// Main error type for Tandem operations
#[derive(Error, Debug)]
pub enum TandemError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user-supplied value (CLI flag, REPL command)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Tandem operations
pub type Result<T> = std::result::Result<T, TandemError>;

impl TandemError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
