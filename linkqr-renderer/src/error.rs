//! Renderer error types.

use thiserror::Error;

/// Result type for rendering and export operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during symbol rendering and export.
#[derive(Debug, Error)]
pub enum RenderError {
    /// QR symbol encoding failed (e.g. input exceeds symbol capacity).
    #[error("QR encoding failed: {0}")]
    Encode(String),

    /// Encoding a surface into an artifact format failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Writing an artifact to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
