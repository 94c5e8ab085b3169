//! Error types for loading and reshaping parsed meet results.

use thiserror::Error;

/// Errors that can occur while loading or reshaping a parsed results tree.
#[derive(Error, Debug)]
pub enum ReshapeError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was JSON but did not have the shape of a parsed results tree
    /// (e.g. `meet` is missing or `meet.events` is not an object).
    #[error("malformed input tree: {message}")]
    Shape { message: String },

    /// The reshaped document could not be rendered.
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl ReshapeError {
    pub(crate) fn shape(err: serde_json::Error) -> Self {
        ReshapeError::Shape {
            message: err.to_string(),
        }
    }
}

/// Convenience alias used throughout hy3-core.
pub type Result<T> = std::result::Result<T, ReshapeError>;
