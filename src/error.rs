//! Error types for palace-capture.
//!
//! Extraction itself never fails. These errors cover the surrounding
//! operations: loading configuration, building requests, decoding input.

/// Error type for capture operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured CSS selector could not be parsed.
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The offending selector text.
        selector: String,
        /// Parser message.
        reason: String,
    },

    /// Configuration was structurally valid JSON but semantically unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A service base URL could not be parsed or joined.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl {
        /// The offending URL text.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The page produced no text worth saving.
    #[error("Could not extract page content")]
    EmptyContent,

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for capture operations.
pub type Result<T> = std::result::Result<T, Error>;
