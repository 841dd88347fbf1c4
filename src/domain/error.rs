//! Error types for sniplink.

use thiserror::Error;

/// Main error type for sniplink.
#[derive(Debug, Error)]
pub enum SnipError {
    /// The input could not be parsed as a URL
    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard helper failed or could not be started
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// History log error
    #[error("History error: {0}")]
    History(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
