//! GIMP-style brightness and contrast curves.
//!
//! Both curves act on a single normalized channel value and must be applied
//! per channel. Neither clamps its result; values leaving `[0, 1]` saturate
//! when the pixel is quantized.
//!
//! # Contrast slope table
//! The contrast curve is a line through mid-gray whose slope is
//! `tan((factor + 1) × π/4)`. The slope is looked up in a table of 255
//! entries indexed by `round(factor × 127 + 127)`. [`contrast_slope_exact`]
//! evaluates the tangent directly.
//!
//! The contrast line is evaluated in `f64`. Shifting by mid-gray in `f32`
//! loses low bits of dark values, which would break the byte-exact identity
//! at `factor = 0` once the result is truncated to a byte.

use std::f64::consts::FRAC_PI_4;
use std::sync::OnceLock;

/// Number of entries in the contrast slope table.
pub const TAN_TABLE_LEN: usize = 255;

/// Table index of a contrast factor of zero.
const TAN_TABLE_CENTER: f32 = 127.0;

/// Apply brightness to a channel value.
///
/// ```text
/// factor < 0:  out = v × (1 + factor)
/// factor ≥ 0:  out = v + (1 − v) × factor
/// ```
///
/// Negative factors scale toward black, positive factors move the value
/// toward white in proportion to its distance from white. `factor = 0` is
/// the identity.
#[inline]
pub fn enhance_brightness(value: f32, factor: f32) -> f32 {
    if factor < 0.0 {
        return value * (1.0 + factor);
    }
    value + (1.0 - value) * factor
}

/// Apply contrast to a channel value.
///
/// ```text
/// out = (v − 0.5) × tan((factor + 1) × π/4) + 0.5
/// ```
///
/// Mid-gray is fixed. `factor = 0` has slope 1 (identity), `factor = −1`
/// flattens everything to mid-gray and `factor = 1` is a hard threshold.
#[inline]
pub fn enhance_contrast(value: f32, factor: f32) -> f32 {
    let slope = f64::from(contrast_slope(factor));
    ((f64::from(value) - 0.5) * slope + 0.5) as f32
}

/// Slope of the contrast line for `factor`, from the tangent table.
///
/// Factors outside `[-1, 1]` use the nearest end of the table.
pub fn contrast_slope(factor: f32) -> f32 {
    tan_table()[tan_index(factor)]
}

/// Slope of the contrast line for `factor`, evaluated directly.
pub fn contrast_slope_exact(factor: f32) -> f32 {
    ((f64::from(factor) + 1.0) * FRAC_PI_4).tan() as f32
}

/// Map a contrast factor to its table index.
fn tan_index(factor: f32) -> usize {
    let index = (factor * TAN_TABLE_CENTER + TAN_TABLE_CENTER).round();
    // NaN casts to 0.
    index.clamp(0.0, (TAN_TABLE_LEN - 1) as f32) as usize
}

/// The process-wide tangent table. Built on first use, read-only afterwards.
fn tan_table() -> &'static [f32; TAN_TABLE_LEN] {
    static TABLE: OnceLock<[f32; TAN_TABLE_LEN]> = OnceLock::new();
    TABLE.get_or_init(|| {
        tracing::trace!("building contrast slope table ({} entries)", TAN_TABLE_LEN);
        std::array::from_fn(|i| {
            let normalized = i as f64 / f64::from(TAN_TABLE_CENTER);
            (normalized * FRAC_PI_4).tan() as f32
        })
    })
}
