//! Duotone color-remapping transform.
//!
//! Maps every pixel onto a two-color gradient between a fixed deep green
//! and a fixed vibrant pink, driven by the pixel's luminance.
//!
//! # Per-pixel algorithm
//!
//! ```text
//! gray  = BT.601 luma of (R, G, B)
//! gray' = (gray - 128) * contrast + 128 + brightness_shift, clamped to [0, 255]
//! ng    = s_curve(gray' / 255)
//! blend = band(ng)            // shadow / midtone / highlight, see blend_ratio
//! mix   = round(green + (pink - green) * blend)   per channel
//! out   = round(gray' + (mix - gray') * sat)      per channel, clamped
//! ```
//!
//! where `sat` is the green intensity for green-dominant pixels
//! (`blend < 0.5`) and the pink intensity otherwise, so each intensity
//! dial doubles as a per-region saturation control: at 0 the region falls
//! back to pure grayscale.
//!
//! All intermediate math is f64 and the blend bands are deliberately
//! discontinuous at their boundaries when an intensity is below 100%;
//! both are part of the transform's defined output, so the exact values
//! here are load-bearing.
//!
//! # Reference
//!
//! Alpha passes through untouched. The transform is pure: the input
//! buffer is never mutated and repeated calls are byte-identical.

use duotone_core::{luminance_bt601, DuotoneParams, PixelBuffer};
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Deep green reference color (R, G, B), the dark end of the gradient.
pub const DEEP_GREEN: [f64; 3] = [15.0, 85.0, 45.0];

/// Vibrant pink reference color (R, G, B), the bright end of the gradient.
pub const VIBRANT_PINK: [f64; 3] = [255.0, 95.0, 200.0];

/// Contrast pivots around mid-gray.
pub const CONTRAST_PIVOT: f64 = 128.0;

/// Upper edge of the shadow band (curved normalized gray below this is
/// green territory).
pub const SHADOW_MAX: f64 = 0.4;

/// Lower edge of the highlight band (curved normalized gray above this is
/// pink territory).
pub const HIGHLIGHT_MIN: f64 = 0.8;

/// Blend ratio reached at the top of the shadow band (at full green
/// intensity) and the base of the midtone ramp.
pub const SHADOW_BLEND_MAX: f64 = 0.15;

/// Blend ratio span of the midtone ramp (0.15 -> 0.5) and of the
/// highlight band (0.5 -> 0.85 at full pink intensity).
pub const BLEND_SPAN: f64 = 0.35;

/// Piecewise quadratic ease (S-curve) on normalized gray.
///
/// Enhances midtone separation; continuous and monotonic on [0, 1] with
/// fixed points at 0, 0.5 and 1.
#[inline]
pub fn tone_curve(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - 2.0 * (1.0 - x) * (1.0 - x)
    }
}

/// Duotone transform with precomputed per-pixel factors.
///
/// Built from [`DuotoneParams`]; out-of-domain dials are clamped into
/// domain at construction so every entry point applies the same policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duotone {
    /// Pink intensity fraction in [0, 1].
    pink_factor: f64,
    /// Green intensity fraction in [0, 1].
    green_factor: f64,
    /// Contrast multiplier in [0.5, 1.5].
    contrast_factor: f64,
    /// Additive brightness shift in [-64, 64] gray levels.
    brightness_shift: f64,
}

impl Default for Duotone {
    fn default() -> Self {
        Self::new(&DuotoneParams::default())
    }
}

impl Duotone {
    /// Build the op from dial values, clamping them into domain first.
    pub fn new(params: &DuotoneParams) -> Self {
        let p = params.clamped();
        Self {
            pink_factor: p.pink_factor(),
            green_factor: p.green_factor(),
            contrast_factor: p.contrast_factor(),
            brightness_shift: p.brightness_shift(),
        }
    }

    /// Contrast/brightness-adjusted luminance of an RGB triple.
    ///
    /// Steps 1-4 of the per-pixel algorithm: BT.601 luma, contrast pivot
    /// around 128, brightness shift, clamp to [0, 255]. The result stays
    /// in floating point.
    #[inline]
    pub fn adjusted_gray(&self, rgb: [u8; 3]) -> f64 {
        let gray = luminance_bt601(rgb);
        let adjusted = (gray - CONTRAST_PIVOT) * self.contrast_factor + CONTRAST_PIVOT
            + self.brightness_shift;
        adjusted.clamp(0.0, 255.0)
    }

    /// Green-to-pink blend ratio for a curved normalized gray value.
    ///
    /// Three bands:
    ///
    /// - shadow (`ng < 0.4`): ramp from 0 to `0.15 * green_factor`
    /// - midtone (`0.4 <= ng <= 0.8`): ramp from 0.15 to 0.5, independent
    ///   of either intensity dial
    /// - highlight (`ng > 0.8`): ramp from 0.5 to `0.5 + 0.35 * pink_factor`
    ///
    /// The jump at `ng = 0.4` when `green_factor != 1` is intentional;
    /// callers must not smooth it.
    #[inline]
    pub fn blend_ratio(&self, ng: f64) -> f64 {
        if ng < SHADOW_MAX {
            (ng / SHADOW_MAX) * SHADOW_BLEND_MAX * self.green_factor
        } else if ng > HIGHLIGHT_MIN {
            0.5 + ((ng - HIGHLIGHT_MIN) / 0.2) * BLEND_SPAN * self.pink_factor
        } else {
            SHADOW_BLEND_MAX + ((ng - SHADOW_MAX) / 0.4) * BLEND_SPAN
        }
    }

    /// Apply the transform to a single RGBA pixel.
    ///
    /// Alpha is copied through unchanged.
    #[inline]
    pub fn apply(&self, rgba: [u8; 4]) -> [u8; 4] {
        let adjusted = self.adjusted_gray([rgba[0], rgba[1], rgba[2]]);
        let ng = tone_curve(adjusted / 255.0);
        let blend = self.blend_ratio(ng);

        // Whichever color dominates the blend supplies the saturation dial.
        let saturation = if blend < 0.5 {
            self.green_factor
        } else {
            self.pink_factor
        };

        let mut out = [0u8; 4];
        for c in 0..3 {
            // The gradient mix is rounded before the saturation lerp.
            let mix = (DEEP_GREEN[c] + (VIBRANT_PINK[c] - DEEP_GREEN[c]) * blend).round();
            let v = (adjusted + (mix - adjusted) * saturation).round();
            out[c] = v.clamp(0.0, 255.0) as u8;
        }
        out[3] = rgba[3];
        out
    }
}

/// Validate a raw RGBA slice against its stated dimensions.
pub(crate) fn validate_rgba(src: &[u8], width: usize, height: usize) -> OpsResult<()> {
    if width == 0 || height == 0 {
        return Err(OpsError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))?;
    if src.len() != expected {
        return Err(OpsError::SizeMismatch(format!(
            "expected {} bytes, got {}",
            expected,
            src.len()
        )));
    }
    Ok(())
}

/// Apply the duotone transform to a raw RGBA slice, sequentially.
///
/// `src` must hold `width * height * 4` bytes of interleaved RGBA data.
/// Returns a fresh output vector of the same length; `src` is not
/// mutated.
///
/// # Example
///
/// ```rust
/// use duotone_core::DuotoneParams;
/// use duotone_ops::duotone::{apply_duotone, Duotone};
///
/// let src = vec![0u8; 8 * 8 * 4];
/// let op = Duotone::new(&DuotoneParams::default());
/// let dst = apply_duotone(&src, 8, 8, &op).unwrap();
/// assert_eq!(dst.len(), src.len());
/// ```
pub fn apply_duotone(src: &[u8], width: usize, height: usize, op: &Duotone) -> OpsResult<Vec<u8>> {
    validate_rgba(src, width, height)?;
    trace!(width, height, "duotone::apply_duotone");

    let mut dst = vec![0u8; src.len()];
    for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        out.copy_from_slice(&op.apply([px[0], px[1], px[2], px[3]]));
    }
    Ok(dst)
}

/// Apply the duotone transform to a [`PixelBuffer`], producing a new one.
///
/// Convenience wrapper over [`apply_duotone`]: the output buffer has the
/// same dimensions as the input, alpha is preserved per pixel, and the
/// input is left untouched.
pub fn transform(input: &PixelBuffer, params: &DuotoneParams) -> OpsResult<PixelBuffer> {
    debug!(
        width = input.width(),
        height = input.height(),
        ?params,
        "Applying duotone transform"
    );
    let op = Duotone::new(params);
    let out = apply_duotone(
        input.data(),
        input.width() as usize,
        input.height() as usize,
        &op,
    )?;
    Ok(PixelBuffer::from_raw(input.width(), input.height(), out)?)
}

// ============================================================================
// Tests
// ============================================================================
