//! Parallel buffer passes using Rayon.
//!
//! Every pixel is transformed independently, so the buffer is split into
//! disjoint runs of whole pixels that are processed on the Rayon pool.
//! Output is byte-identical to the sequential passes.
//!
//! # Example
//!
//! ```rust
//! use tonal_core::{ChannelLayout, parallel};
//!
//! let mut data = vec![128u8; 1920 * 1080 * 4];
//! parallel::brightness_contrast(&mut data, 0.2, 0.1, ChannelLayout::native()).unwrap();
//! ```

use rayon::prelude::*;

use crate::enhance::brightness_contrast::{apply_lut, bake_brightness_contrast_lut};
use crate::enhance::hsl::apply_hsl;
use crate::enhance::params::Adjustments;
use crate::error::EnhanceResult;
use crate::image::PixelBuffer;
use crate::layout::ChannelLayout;

/// Pixels handed to one Rayon task.
pub const CHUNK_PIXELS: usize = 16 * 1024;

/// Parallel version of [`crate::enhance::brightness_contrast()`].
pub fn brightness_contrast(
    buffer: &mut [u8],
    brightness: f32,
    contrast: f32,
    layout: ChannelLayout,
) -> EnhanceResult<&mut [u8]> {
    tracing::debug!(
        "parallel brightness/contrast: {} bytes, brightness={}, contrast={}, layout={}",
        buffer.len(),
        brightness,
        contrast,
        layout
    );
    let mut pixels = PixelBuffer::new(&mut *buffer, layout)?;
    enhance_brightness_contrast(&mut pixels, brightness, contrast);
    Ok(buffer)
}

/// Parallel version of [`crate::enhance::hue_saturation_lightness()`].
pub fn hue_saturation_lightness(
    buffer: &mut [u8],
    hue: f32,
    saturation: f32,
    lightness: f32,
    layout: ChannelLayout,
) -> EnhanceResult<&mut [u8]> {
    tracing::debug!(
        "parallel hue/saturation/lightness: {} bytes, hue={}, saturation={}, lightness={}, layout={}",
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

fn enhance_brightness_contrast(buffer: &mut PixelBuffer<'_>, brightness: f32, contrast: f32) {
    let lut = bake_brightness_contrast_lut(brightness, contrast);
    let alpha = buffer.layout().alpha();
    buffer
        .pixels_mut()
        .par_chunks_mut(CHUNK_PIXELS)
        .for_each(|chunk| apply_lut(chunk, &lut, alpha));
}

fn enhance_hsl(buffer: &mut PixelBuffer<'_>, hue: f32, saturation: f32, lightness: f32) {
    let layout = buffer.layout();
    buffer
        .pixels_mut()
        .par_chunks_mut(CHUNK_PIXELS)
        .for_each(|chunk| apply_hsl(chunk, layout, hue, saturation, lightness));
}

impl Adjustments {
    /// Parallel version of [`Adjustments::apply`].
    pub fn apply_parallel<'a>(
        &self,
        buffer: &'a mut [u8],
        layout: ChannelLayout,
    ) -> EnhanceResult<&'a mut [u8]> {
        let mut pixels = PixelBuffer::new(&mut *buffer, layout)?;
        if self.has_brightness_contrast() {
            enhance_brightness_contrast(&mut pixels, self.brightness, self.contrast);
        }
        if self.has_hsl() {
            enhance_hsl(&mut pixels, self.hue, self.saturation, self.lightness);
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance;

    /// A buffer spanning several chunks with a partial last chunk.
    fn gradient(pixels: usize) -> Vec<u8> {
        (0..pixels * 4).map(|i| (i * 37 % 251) as u8).collect()
    }

    #[test]
    fn test_parallel_bc_matches_sequential() {
        let original = gradient(CHUNK_PIXELS * 2 + 17);
        for &layout in ChannelLayout::all() {
            let mut seq = original.clone();
            let mut par = original.clone();
            enhance::brightness_contrast(&mut seq, -0.3, 0.6, layout).unwrap();
            brightness_contrast(&mut par, -0.3, 0.6, layout).unwrap();
            assert!(seq == par, "{layout}: parallel output differs");
        }
    }

    #[test]
    fn test_parallel_hsl_matches_sequential() {
        let original = gradient(CHUNK_PIXELS + 5);
        let layout = ChannelLayout::LittleEndian;
        let mut seq = original.clone();
        let mut par = original.clone();
        enhance::hue_saturation_lightness(&mut seq, 200.0, -0.4, 0.25, layout).unwrap();
        hue_saturation_lightness(&mut par, 200.0, -0.4, 0.25, layout).unwrap();
        assert!(seq == par, "parallel output differs");
    }

    #[test]
    fn test_parallel_apply_matches_sequential() {
        let original = gradient(CHUNK_PIXELS + 1);
        let adjustments = Adjustments {
            brightness: 0.15,
            contrast: -0.2,
            hue: -30.0,
            saturation: 0.5,
            lightness: 0.0,
        };
        let mut seq = original.clone();
        let mut par = original;
        adjustments.apply(&mut seq, ChannelLayout::Other).unwrap();
        adjustments.apply_parallel(&mut par, ChannelLayout::Other).unwrap();
        assert!(seq == par, "parallel output differs");
    }

    #[test]
    fn test_parallel_rejects_partial_pixel() {
        let mut data = vec![0u8; 4 * CHUNK_PIXELS + 3];
        assert!(brightness_contrast(&mut data, 0.5, 0.0, ChannelLayout::native()).is_err());
        assert!(hue_saturation_lightness(&mut data, 10.0, 0.0, 0.0, ChannelLayout::native()).is_err());
        assert!(data.iter().all(|&b| b == 0));
    }
}
