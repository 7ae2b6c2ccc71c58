//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffers have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Scratch-buffer allocation failed.
    #[error("failed to allocate {requested} bytes of scratch space")]
    AllocationFailed {
        /// Bytes requested.
        requested: usize,
    },
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
