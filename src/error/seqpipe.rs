/// Unified error type for seqpipe
use thiserror::Error;

use crate::error::PipelineError;

#[derive(Error, Debug)]
pub enum SeqPipeError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Input errors
    #[error("Expected {expected} input numbers, got {got}")]
    InputUnderflow { expected: usize, got: usize },

    #[error("Invalid input token '{0}': not an integer")]
    InvalidToken(String),

    // Sequence access errors
    #[error("Sequence '{0}' is empty")]
    EmptySequence(String),

    #[error("No element of '{0}' matches the search predicate")]
    NotFound(String),

    #[error("Need at least {needed} elements for selection, sequence has {len}")]
    InsufficientElements { needed: usize, len: usize },

    #[error("Unknown sequence '{0}'")]
    MissingSequence(String),

    // Pipeline errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic error for compatibility
    #[error("{0}")]
    Other(String),
}

/// Result type alias using SeqPipeError
pub type Result<T> = std::result::Result<T, SeqPipeError>;

impl SeqPipeError {
    /// Create an invalid token error
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken(token.into())
    }

    /// Create an empty sequence error
    pub fn empty_sequence(name: impl Into<String>) -> Self {
        Self::EmptySequence(name.into())
    }

    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a missing sequence error
    pub fn missing_sequence(name: impl Into<String>) -> Self {
        Self::MissingSequence(name.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

// Conversion from String for convenience
impl From<String> for SeqPipeError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

// Conversion from &str for convenience
impl From<&str> for SeqPipeError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}
