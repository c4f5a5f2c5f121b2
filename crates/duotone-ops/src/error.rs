//! Error types for duotone operations.

use thiserror::Error;

/// Error type for duotone operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffer length does not match the stated dimensions.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Error from a pixel buffer constructor.
    #[error(transparent)]
    Buffer(#[from] duotone_core::Error),
}

/// Result type for duotone operations.
pub type OpsResult<T> = Result<T, OpsError>;
