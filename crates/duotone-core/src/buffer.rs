//! Owned RGBA8 image buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored interleaved in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Invariants
//!
//! Every constructed [`PixelBuffer`] satisfies:
//!
//! - `width > 0` and `height > 0`
//! - `data.len() == width * height * 4`
//!
//! Both validating constructors enforce this, so operations that receive a
//! `PixelBuffer` never need to re-check buffer shape.
//!
//! # Usage
//!
//! ```rust
//! use duotone_core::PixelBuffer;
//!
//! let mut img = PixelBuffer::new(16, 9).unwrap();
//! img.set_pixel(3, 2, [255, 95, 200, 255]);
//! assert_eq!(img.pixel(3, 2), Some([255, 95, 200, 255]));
//! ```

use crate::error::{Error, Result};

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned RGBA8 image buffer with validated dimensions.
///
/// See the [module docs](self) for layout and invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixel data, interleaved RGBA, row-major.
    data: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

/// Byte length implied by the dimensions, checked against overflow.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
}

impl PixelBuffer {
    /// Create a zero-filled (transparent black) buffer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if either dimension is zero or the
    /// byte length overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::validate_dims(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Wrap an existing RGBA byte vector, validating its shape.
    ///
    /// This is the entry point for buffers produced by an external
    /// decoder. Ownership of the bytes moves into the buffer; no copy is
    /// made.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] for zero or overflowing dimensions,
    /// [`Error::SizeMismatch`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::validate_dims(width, height)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    fn validate_dims(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        byte_len(width, height).ok_or(Error::InvalidDimensions { width, height })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes per row (`width * 4`).
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// The raw interleaved RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw interleaved RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the raw byte vector.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Get the pixel at (x, y) as `[R, G, B, A]`.
    ///
    /// Returns `None` when the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Set the pixel at (x, y) to `[R, G, B, A]`.
    ///
    /// Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Iterate over rows as byte slices of length `width * 4`.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.row_stride())
    }

    /// Iterate over mutable rows as byte slices of length `width * 4`.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let stride = self.row_stride();
        self.data.chunks_exact_mut(stride)
    }
}
