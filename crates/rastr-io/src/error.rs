//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error (missing, corrupt, or unreadable input).
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error (output write failure).
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Buffer length does not match the declared dimensions.
    #[error("dimension mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
