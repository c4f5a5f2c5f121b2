//! Error types for duotone-core operations.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - Buffer construction and validation
//! - `duotone-ops` - Wrapped into its operation error type

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or validating pixel buffers.
///
/// Parameter values outside their domain are deliberately *not* an error
/// (they are clamped, see [`crate::params::DuotoneParams::clamped`]), so
/// the taxonomy here is buffer-shaped only.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero, or `width * height * 4` overflows `usize`.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Buffer length does not match `width * height * 4`.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Byte length implied by the dimensions.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::InvalidDimensions { width: 0, height: 7 };
        assert!(err.to_string().contains("0x7"));

        let err = Error::SizeMismatch { expected: 16, actual: 12 };
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains("12"));
    }
}
