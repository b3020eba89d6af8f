//! Error types for tinyraster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tinyraster operations.
///
/// Only the rectangle rasterizers fail on geometry; every other shape is
/// total over its integer input.
#[derive(Error, Debug)]
pub enum Error {
    /// Rectangle width or height was not positive. Nothing was drawn.
    #[error("Invalid rectangle dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding error.
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}
