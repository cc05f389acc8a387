//! Hue/saturation/lightness pass over a whole pixel buffer.
//!
//! Each pixel is taken through HSL and back:
//!
//! ```text
//! RGB bytes ──→ /255 ──→ rgb_to_hsl ──→ hue, saturation, lightness curves
//!           ──→ hsl_to_rgb ──→ quantize ──→ RGB bytes
//! ```
//!
//! Red, green and blue are read from and written to the offsets given by the
//! channel layout. Alpha is never read or written.

use crate::color_space::{hsl_to_rgb, rgb_to_hsl};
use crate::error::EnhanceResult;
use crate::grading::hsl::{enhance_hue, enhance_lightness, enhance_saturation};
use crate::image::{Pixel, PixelBuffer};
use crate::layout::ChannelLayout;
use crate::numeric::{normalize, quantize};

/// Enhance hue, saturation and lightness of `buffer` in place.
///
/// `hue` is a rotation in degrees, `saturation` and `lightness` are deltas
/// in `[-1, 1]`. Returns the same buffer.
///
/// # Errors
/// [`EnhanceError::InvalidInput`](crate::EnhanceError::InvalidInput) if the
/// length is not a multiple of 4. The buffer is untouched in that case.
pub fn hue_saturation_lightness(
    buffer: &mut [u8],
    hue: f32,
    saturation: f32,
    lightness: f32,
    layout: ChannelLayout,
) -> EnhanceResult<&mut [u8]> {
    tracing::debug!(
        "hue/saturation/lightness: {} bytes, hue={}, saturation={}, lightness={}, layout={}",
        buffer.len(),
        hue,
        saturation,
        lightness,
        layout
    );
    let mut pixels = PixelBuffer::new(&mut *buffer, layout)?;
    enhance_hsl(&mut pixels, hue, saturation, lightness);
    Ok(buffer)
}

/// Enhance hue, saturation and lightness of an already validated buffer.
pub fn enhance_hsl(buffer: &mut PixelBuffer<'_>, hue: f32, saturation: f32, lightness: f32) {
    let layout = buffer.layout();
    apply_hsl(buffer.pixels_mut(), layout, hue, saturation, lightness);
}

pub(crate) fn apply_hsl(
    pixels: &mut [Pixel],
    layout: ChannelLayout,
    hue: f32,
    saturation: f32,
    lightness: f32,
) {
    let [red, green, blue] = layout.rgb();
    for px in pixels {
        let rgb = [normalize(px[red]), normalize(px[green]), normalize(px[blue])];
        let (h, s, l) = rgb_to_hsl(rgb);
        let [r, g, b] = hsl_to_rgb(
            enhance_hue(h, hue),
            enhance_saturation(s, saturation),
            enhance_lightness(l, lightness),
        );
        px[red] = quantize(r);
        px[green] = quantize(g);
        px[blue] = quantize(b);
    }
}
