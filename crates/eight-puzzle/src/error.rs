//! Error types for the eight-puzzle crate

use thiserror::Error;

/// Main error type for the eight-puzzle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },

    #[error("no solution found after generating {nodes_generated} nodes")]
    SearchExhausted { nodes_generated: usize },

    #[error("invalid input: expected 6 non-empty rows (3 initial, 3 goal), got {line_count}")]
    InvalidInput { line_count: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedBoard {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
