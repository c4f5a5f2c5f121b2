//! # duotone-core
//!
//! Core types for duotone image processing.
//!
//! This crate provides the foundational types used throughout the
//! duotone-rs workspace:
//!
//! - [`PixelBuffer`] - Owned RGBA8 image buffer with validated invariants
//! - [`DuotoneParams`] - The four adjustment dials with domains and defaults
//! - [`luminance_bt601`] - BT.601 luma reduction
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Design Philosophy
//!
//! A [`PixelBuffer`] can only be constructed through validating
//! constructors, so any buffer handed to an operation already satisfies
//! `data.len() == width * height * 4` with non-zero dimensions. Operations
//! downstream never need to re-check and never produce partial output.
//!
//! Parameter values outside their domain are not an error: they are
//! clamped silently via [`DuotoneParams::clamped`], matching the slider
//! interaction model the dials come from.
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`DuotoneParams`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod params;
pub mod pixel;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use params::DuotoneParams;
pub use pixel::{luminance_bt601, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use duotone_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::params::DuotoneParams;
    pub use crate::pixel::{luminance_bt601, BT601_LUMA};
}
