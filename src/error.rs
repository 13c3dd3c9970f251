//! Error types for the guider.
//!
//! A stop, bus or path that does not exist is not an error: it is answered
//! with a "not found" response. These errors abort the whole batch.

/// Fatal errors raised while processing a batch.
#[derive(Debug, thiserror::Error)]
pub enum GuiderError {
    /// Routing settings are missing or unusable
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A request is structurally valid JSON but semantically unusable
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No road distance is known in either direction between adjacent stops
    #[error("no road distance between {from:?} and {to:?}")]
    MissingRoadDistance { from: String, to: String },

    /// The request document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GuiderError>;
