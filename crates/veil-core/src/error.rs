//! Error types for the redaction core.
//!
//! The core keeps its error surface small: most operations are total by
//! design (decode never fails, classification never fails), so errors
//! come only from sealing, file loading, and parsing. Messages carry
//! enough context for the CLI to render them directly.

use thiserror::Error;

/// Result type alias for Veil operations.
pub type Result<T> = std::result::Result<T, VeilError>;

/// Core error type for Veil operations.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Encryption or random-generation error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}
