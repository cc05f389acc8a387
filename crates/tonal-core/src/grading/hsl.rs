//! GIMP-style hue, saturation and lightness curves.
//!
//! Each function adjusts one component of an HSL triple produced by
//! [`crate::color_space::rgb_to_hsl`].

use crate::numeric::clamp;

/// Rotate `hue` (degrees) by `delta` degrees.
///
/// The result is wrapped by a single step of ±360, so it stays in
/// `[0, 360]` only while `|delta| <= 360`.
#[inline]
pub fn enhance_hue(hue: f32, delta: f32) -> f32 {
    let hue = hue + delta;
    if hue > 360.0 {
        return hue - 360.0;
    }
    if hue < 0.0 {
        return hue + 360.0;
    }
    hue
}

/// Scale `saturation` by `delta + 1`, clamped to `[0, 1]`.
///
/// `delta = -1` removes all color, `delta = 0` is the identity.
#[inline]
pub fn enhance_saturation(saturation: f32, delta: f32) -> f32 {
    clamp(saturation * (delta + 1.0), 0.0, 1.0)
}

/// Adjust `lightness` the way brightness adjusts a channel.
///
/// ```text
/// delta < 0:  out = l × (delta + 1)
/// delta ≥ 0:  out = l + delta × (1 − l)
/// ```
#[inline]
pub fn enhance_lightness(lightness: f32, delta: f32) -> f32 {
    if delta < 0.0 {
        return lightness * (delta + 1.0);
    }
    lightness + delta * (1.0 - lightness)
}
