//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around deck generation.
///
/// Segmentation and rendering themselves are total; errors only arise at
/// the edges (catalog lookups by name, writing the finished document).
#[derive(Error, Debug)]
pub enum Error {
    /// The requested theme identifier is not in the catalog.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Failed to write the rendered document.
    #[error("Failed to write document: {0}")]
    IoError(#[from] std::io::Error),
}
