//! Scalar helpers shared by the curves, the color space converter and the
//! buffer passes.
//!
//! Every pixel-write path ends in [`quantize`], which is the only place a
//! normalized channel value becomes a byte again.

/// Largest value an 8-bit channel can hold, as a float.
pub const CHANNEL_MAX: f32 = 255.0;

/// Restrict `value` to `[lower, upper]`.
///
/// Unlike [`f32::clamp`] this never panics on inverted bounds, and a NaN
/// `value` is returned unchanged.
#[inline]
pub fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    if value < lower {
        return lower;
    }
    if value > upper {
        return upper;
    }
    value
}

/// Smallest of three values.
#[inline]
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    if a <= b && a <= c {
        a
    } else if b <= c {
        b
    } else {
        c
    }
}

/// Largest of three values.
#[inline]
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    if a >= b && a >= c {
        a
    } else if b >= c {
        b
    } else {
        c
    }
}

/// Truncated floating point remainder.
///
/// ```text
/// remainder(x, y) = x − y × trunc(x / y)
/// ```
///
/// The quotient is truncated toward zero, so the result carries the sign of
/// the dividend. This is not IEEE `remainder` (which rounds the quotient to
/// nearest) and differs from a mathematical modulo for negative dividends.
#[inline]
pub fn remainder(dividend: f32, divisor: f32) -> f32 {
    let quotient = (dividend / divisor).trunc();
    dividend - quotient * divisor
}

/// Convert a byte to a normalized channel value in `[0, 1]`.
#[inline]
pub fn normalize(byte: u8) -> f32 {
    f32::from(byte) / CHANNEL_MAX
}

/// Convert a normalized channel value back to a byte.
///
/// ```text
/// quantize(v) = trunc(clamp(v × 255, 0, 255))
/// ```
///
/// The fractional part is dropped, not rounded. Values outside `[0, 1]`
/// saturate at 0 or 255. NaN maps to 0.
#[inline]
pub fn quantize(value: f32) -> u8 {
    // `as` truncates toward zero, saturates and maps NaN to zero.
    clamp(value * CHANNEL_MAX, 0.0, CHANNEL_MAX) as u8
}
