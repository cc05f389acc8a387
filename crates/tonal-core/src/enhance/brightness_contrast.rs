//! Brightness/contrast pass over a whole pixel buffer.
//!
//! The curve depends only on the input byte, so each call bakes a 256-entry
//! byte table once and then maps every color byte through it. Alpha bytes are
//! skipped.
//!
//! ```text
//! byte ──→ /255 ──→ brightness ──→ contrast ──→ quantize ──→ byte
//! ```
//!
//! Brightness is always applied before contrast.

use crate::error::EnhanceResult;
use crate::grading::brightness_contrast::{enhance_brightness, enhance_contrast};
use crate::image::{Pixel, PixelBuffer};
use crate::layout::ChannelLayout;
use crate::numeric::{normalize, quantize};

/// Byte-to-byte lookup table for one channel.
pub type ByteLut = [u8; 256];

/// Bake the brightness/contrast curve for every possible input byte.
pub fn bake_brightness_contrast_lut(brightness: f32, contrast: f32) -> ByteLut {
    std::array::from_fn(|byte| {
        let value = normalize(byte as u8);
        let value = enhance_brightness(value, brightness);
        let value = enhance_contrast(value, contrast);
        quantize(value)
    })
}

/// Enhance brightness and contrast of `buffer` in place.
///
/// `buffer` holds packed 4-byte pixels in `layout` order. Every byte except
/// alpha is adjusted. Returns the same buffer.
///
/// # Errors
/// [`EnhanceError::InvalidInput`](crate::EnhanceError::InvalidInput) if the
/// length is not a multiple of 4. The buffer is untouched in that case.
pub fn brightness_contrast(
    buffer: &mut [u8],
    brightness: f32,
    contrast: f32,
    layout: ChannelLayout,
) -> EnhanceResult<&mut [u8]> {
    tracing::debug!(
        "brightness/contrast: {} bytes, brightness={}, contrast={}, layout={}",
        buffer.len(),
        brightness,
        contrast,
        layout
    );
    let mut pixels = PixelBuffer::new(&mut *buffer, layout)?;
    enhance_brightness_contrast(&mut pixels, brightness, contrast);
    Ok(buffer)
}

/// Enhance brightness and contrast of an already validated buffer.
pub fn enhance_brightness_contrast(buffer: &mut PixelBuffer<'_>, brightness: f32, contrast: f32) {
    let lut = bake_brightness_contrast_lut(brightness, contrast);
    let alpha = buffer.layout().alpha();
    apply_lut(buffer.pixels_mut(), &lut, alpha);
}

/// Map every non-alpha byte of `pixels` through `lut`.
pub(crate) fn apply_lut(pixels: &mut [Pixel], lut: &ByteLut, alpha: usize) {
    for px in pixels {
        for (channel, byte) in px.iter_mut().enumerate() {
            if channel != alpha {
                *byte = lut[usize::from(*byte)];
            }
        }
    }
}
