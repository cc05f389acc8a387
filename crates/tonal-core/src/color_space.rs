//! RGB ↔ HSL conversion for a single pixel.
//!
//! Hue is in degrees, saturation and lightness in `0..1`. Inputs are
//! normalized channel values as produced by [`crate::numeric::normalize`].
//!
//! # Reference
//! - Wikipedia, "HSL and HSV", *From RGB* and *HSL to RGB* (alternative
//!   formulation with the `f(n)` helper)

use crate::numeric::{clamp, max3, min3, remainder};

/// Phase of the red channel in the `f(n)` helper.
const PHASE_RED: f32 = 0.0;
/// Phase of the green channel.
const PHASE_GREEN: f32 = 8.0;
/// Phase of the blue channel.
const PHASE_BLUE: f32 = 4.0;

/// Convert RGB to HSL.
///
/// Returns `(hue, saturation, lightness)` with hue in `[0, 360)`.
///
/// ```text
/// hue = 0                               if max == min
///     = 60 × (g − b) / (max − min)       if max == r
///     = 60 × (2 + (b − r) / (max − min)) if max == g
///     = 60 × (4 + (r − g) / (max − min)) otherwise
/// lightness  = (max + min) / 2
/// saturation = (max − l) / min(l, 1 − l), 0 at pure black or pure white
/// ```
///
/// The hue branches are tested in that order, so the first match wins.
/// Equality is exact: with byte-derived inputs the extremes are only ever
/// exactly `0.0` or `1.0`.
pub fn rgb_to_hsl(rgb: [f32; 3]) -> (f32, f32, f32) {
    let [r, g, b] = rgb;
    let min = min3(r, g, b);
    let max = max3(r, g, b);

    let hue = if min == max {
        0.0
    } else if max == r {
        60.0 * (g - b) / (max - min)
    } else if max == g {
        60.0 * (2.0 + (b - r) / (max - min))
    } else {
        60.0 * (4.0 + (r - g) / (max - min))
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    let lightness = (max + min) / 2.0;

    let saturation = if max == 0.0 || min == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    (hue, saturation, lightness)
}

/// Convert HSL to RGB.
///
/// ```text
/// a    = s × min(l, 1 − l)
/// k(n) = (n + h / 30) rem 12
/// f(n) = l − a × max(min(k − 3, 9 − k, 1), −1)
/// rgb  = (f(0), f(8), f(4))
/// ```
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let a = saturation * lightness.min(1.0 - lightness);
    [
        hsl_channel(PHASE_RED, a, hue, lightness),
        hsl_channel(PHASE_GREEN, a, hue, lightness),
        hsl_channel(PHASE_BLUE, a, hue, lightness),
    ]
}

/// The shared `f(n)` term; every channel goes through here.
#[inline]
fn hsl_channel(phase: f32, a: f32, hue: f32, lightness: f32) -> f32 {
    let k = remainder(phase + hue / 30.0, 12.0);
    lightness - a * clamp(min3(k - 3.0, 9.0 - k, 1.0), -1.0, f32::INFINITY)
}
