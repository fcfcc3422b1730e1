//! Error types for the Thesaurize library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ThesaurizeError`] enum. Synonym lookup failures are recovered inside the
//! rewrite pipeline and never reach callers of
//! [`PhraseRewriter::rewrite`](crate::rewrite::PhraseRewriter::rewrite); the
//! variants here surface at startup (configuration, dictionary loading) and
//! inside provider implementations.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Thesaurize operations.
#[derive(Error, Debug)]
pub enum ThesaurizeError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Synonym resolver errors (transport failures, non-success statuses,
    /// malformed response bodies)
    #[error("Resolver error: {0}")]
    Resolver(String),

    /// Configuration errors (missing credentials, unreadable dictionaries)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-surface errors (bind failures, server shutdown errors)
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ThesaurizeError.
pub type Result<T> = std::result::Result<T, ThesaurizeError>;

impl ThesaurizeError {
    /// Create a new resolver error.
    pub fn resolver<S: Into<String>>(msg: S) -> Self {
        ThesaurizeError::Resolver(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ThesaurizeError::Config(msg.into())
    }

    /// Create a new server error.
    pub fn server<S: Into<String>>(msg: S) -> Self {
        ThesaurizeError::Server(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ThesaurizeError::resolver("connection refused");
        assert_eq!(error.to_string(), "Resolver error: connection refused");

        let error = ThesaurizeError::config("API_TOKEN is not set");
        assert_eq!(error.to_string(), "Configuration error: API_TOKEN is not set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ThesaurizeError::from(io_error);

        match error {
            ThesaurizeError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
