//! Error types for form state operations.

use thiserror::Error;

/// Result type for form state operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur at the edges of the form state machine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A color string could not be parsed as hex.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A pixel size outside the supported set was requested.
    #[error("Unsupported symbol size: {0}px")]
    UnsupportedSize(u32),

    /// State serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
