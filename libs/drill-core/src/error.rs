//! Error types for drill-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a vocabulary into a deck.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("vocabulary file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vocabulary must be a JSON object keyed by symbol")]
    NotAnObject,

    #[error("malformed entry {symbol:?}: {source}")]
    Malformed {
        symbol: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry {symbol:?} has an empty {field}")]
    EmptyField { symbol: String, field: &'static str },

    #[error("vocabulary contains no entries")]
    Empty,

    #[error("vocabulary load ended without a result")]
    Interrupted,
}
