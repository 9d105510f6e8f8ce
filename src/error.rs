//! Error types for the lopdf-columns library

use thiserror::Error;

/// Result type alias using RenderError
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised by a drawing surface.
///
/// The layout engine and the footer renderer have no failure modes of their
/// own; everything here originates in the surface and is propagated as-is.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Page index outside the buffered page range
    #[error("Page index {index} out of range ({count} pages buffered)")]
    PageNotFound { index: usize, count: usize },

    /// Drawing was attempted before any page was added
    #[error("No active page to draw on")]
    NoActivePage,

    /// Text or font handling error
    #[error("Text rendering failed: {0}")]
    TextError(String),

    /// Writing the finished document failed
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
