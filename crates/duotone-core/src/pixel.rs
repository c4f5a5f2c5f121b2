//! Luminance helpers for 8-bit RGBA pixels.
//!
//! The duotone transform reduces each pixel to a single brightness value
//! using the ITU-R BT.601 luma weights before any tonal shaping. The
//! constants and helper here are the canonical definition of that
//! reduction for the whole workspace.
//!
//! # Used By
//!
//! - `duotone-ops` - first step of the per-pixel transform

/// BT.601 luminance coefficient for the red channel.
///
/// Used in the standard luma formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const BT601_LUMA_R: f64 = 0.299;

/// BT.601 luminance coefficient for the green channel.
pub const BT601_LUMA_G: f64 = 0.587;

/// BT.601 luminance coefficient for the blue channel.
pub const BT601_LUMA_B: f64 = 0.114;

/// BT.601 luminance coefficients as an array [R, G, B].
pub const BT601_LUMA: [f64; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Calculate BT.601 luminance from 8-bit RGB values.
///
/// The result stays in floating point (range [0, 255]); downstream
/// adjustments keep it unrounded until the final channel write.
///
/// # Example
/// ```
/// use duotone_core::pixel::luminance_bt601;
/// let luma = luminance_bt601([255, 255, 255]);
/// assert_eq!(luma, 255.0);
/// ```
#[inline]
pub fn luminance_bt601(rgb: [u8; 3]) -> f64 {
    rgb[0] as f64 * BT601_LUMA_R + rgb[1] as f64 * BT601_LUMA_G + rgb[2] as f64 * BT601_LUMA_B
}
