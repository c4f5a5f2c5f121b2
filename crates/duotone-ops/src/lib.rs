//! # duotone-ops
//!
//! The duotone color-remapping transform for RGBA8 pixel buffers.
//!
//! Every pixel is reduced to its BT.601 luminance, run through contrast,
//! brightness and tone-curve shaping, then recolored onto a fixed
//! green-to-pink gradient. The transform is pure and deterministic:
//! identical input bytes and parameters always yield byte-identical
//! output, regardless of processing order or parallelism.
//!
//! # Modules
//!
//! - [`duotone`] - The [`Duotone`] op and sequential entry points
//! - [`parallel`] - Rayon row-parallel entry points (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use duotone_core::{DuotoneParams, PixelBuffer};
//! use duotone_ops::duotone::transform;
//!
//! let input = PixelBuffer::new(64, 64).unwrap();
//! let output = transform(&input, &DuotoneParams::default()).unwrap();
//! assert_eq!(output.width(), input.width());
//! // Black input lands deep in the green band
//! assert_eq!(output.pixel(0, 0), Some([11, 59, 31, 0]));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod duotone;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use duotone::{apply_duotone, tone_curve, transform, Duotone, DEEP_GREEN, VIBRANT_PINK};
pub use error::{OpsError, OpsResult};
