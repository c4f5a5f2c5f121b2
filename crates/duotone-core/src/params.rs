//! Adjustment parameters for the duotone transform.
//!
//! Four independent dials, each an integer percent with a bounded domain:
//!
//! | dial              | domain    | default |
//! |-------------------|-----------|---------|
//! | `pink_intensity`  | [0, 100]  | 70      |
//! | `green_intensity` | [0, 100]  | 70      |
//! | `contrast`        | [50, 150] | 100     |
//! | `brightness`      | [50, 150] | 100     |
//!
//! Out-of-domain values are clamped silently via
//! [`DuotoneParams::clamped`] rather than rejected: the dials originate
//! from continuous sliders, and clamping preserves the nearest valid
//! setting. Operations clamp once when they are built, so the policy is
//! applied uniformly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum intensity percent (pink/green).
pub const INTENSITY_MIN: u8 = 0;
/// Maximum intensity percent (pink/green).
pub const INTENSITY_MAX: u8 = 100;
/// Default intensity percent (pink/green).
pub const INTENSITY_DEFAULT: u8 = 70;

/// Minimum contrast/brightness percent.
pub const LEVEL_MIN: u8 = 50;
/// Maximum contrast/brightness percent.
pub const LEVEL_MAX: u8 = 150;
/// Default contrast/brightness percent (no change).
pub const LEVEL_DEFAULT: u8 = 100;

/// The four adjustment dials for the duotone transform.
///
/// All values are integer percents. See the [module docs](self) for
/// domains and the clamping policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DuotoneParams {
    /// Pink intensity percent, [0, 100]. Scales the highlight-band blend
    /// and doubles as the saturation control for pink-dominant pixels.
    pub pink_intensity: u8,
    /// Green intensity percent, [0, 100]. Scales the shadow-band blend
    /// and doubles as the saturation control for green-dominant pixels.
    pub green_intensity: u8,
    /// Contrast percent, [50, 150]. 100 leaves the image unchanged;
    /// applied as a linear pivot around mid-gray 128.
    pub contrast: u8,
    /// Brightness percent, [50, 150]. 100 leaves the image unchanged;
    /// applied as an additive shift of `(brightness - 100) * 1.28`.
    pub brightness: u8,
}

impl Default for DuotoneParams {
    fn default() -> Self {
        Self {
            pink_intensity: INTENSITY_DEFAULT,
            green_intensity: INTENSITY_DEFAULT,
            contrast: LEVEL_DEFAULT,
            brightness: LEVEL_DEFAULT,
        }
    }
}

impl DuotoneParams {
    /// Create parameters from raw percents, clamping each into domain.
    #[inline]
    pub fn new(pink_intensity: u8, green_intensity: u8, contrast: u8, brightness: u8) -> Self {
        Self {
            pink_intensity,
            green_intensity,
            contrast,
            brightness,
        }
        .clamped()
    }

    /// Return a copy with every dial clamped into its domain.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            pink_intensity: self.pink_intensity.clamp(INTENSITY_MIN, INTENSITY_MAX),
            green_intensity: self.green_intensity.clamp(INTENSITY_MIN, INTENSITY_MAX),
            contrast: self.contrast.clamp(LEVEL_MIN, LEVEL_MAX),
            brightness: self.brightness.clamp(LEVEL_MIN, LEVEL_MAX),
        }
    }

    /// Whether every dial already lies inside its domain.
    #[inline]
    pub fn in_domain(&self) -> bool {
        *self == self.clamped()
    }

    /// Pink intensity as a fraction in [0, 1].
    #[inline]
    pub fn pink_factor(&self) -> f64 {
        self.pink_intensity as f64 / 100.0
    }

    /// Green intensity as a fraction in [0, 1].
    #[inline]
    pub fn green_factor(&self) -> f64 {
        self.green_intensity as f64 / 100.0
    }

    /// Contrast as a multiplicative factor (1.0 = no change).
    #[inline]
    pub fn contrast_factor(&self) -> f64 {
        self.contrast as f64 / 100.0
    }

    /// Brightness as an additive shift on the [0, 255] gray axis.
    ///
    /// The percent delta is scaled by 1.28 so the +/-50% dial range maps
    /// to roughly +/-64 gray levels.
    #[inline]
    pub fn brightness_shift(&self) -> f64 {
        (self.brightness as f64 - 100.0) * 1.28
    }
}
