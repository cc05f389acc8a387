//! The full set of adjustment factors for one enhancement request.
//!
//! `Adjustments` is what a host keeps between redraws: every slider writes
//! here and [`Adjustments::apply`] runs the passes in a fixed order.

use serde::{Deserialize, Serialize};

use crate::enhance::brightness_contrast::enhance_brightness_contrast;
use crate::enhance::hsl::enhance_hsl;
use crate::error::EnhanceResult;
use crate::image::PixelBuffer;
use crate::layout::ChannelLayout;

/// Adjustment factors for both passes.
///
/// None of the ranges are enforced. Values beyond them push intermediate
/// results outside `[0, 1]`, which saturate when quantized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    /// Brightness in `[-1, 1]`. 0.0 = neutral.
    pub brightness: f32,
    /// Contrast in `[-1, 1]`. 0.0 = neutral.
    pub contrast: f32,
    /// Hue rotation in degrees. 0.0 = no rotation.
    pub hue: f32,
    /// Saturation delta in `[-1, 1]`. 0.0 = neutral.
    pub saturation: f32,
    /// Lightness delta in `[-1, 1]`. 0.0 = neutral.
    pub lightness: f32,
}

impl Default for Adjustments {
    /// Produces an identity (no-op) adjustment.
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.0,
        }
    }
}

impl Adjustments {
    /// `true` if the brightness/contrast pass would change anything.
    pub fn has_brightness_contrast(&self) -> bool {
        self.brightness != 0.0 || self.contrast != 0.0
    }

    /// `true` if the hue/saturation/lightness pass would run.
    pub fn has_hsl(&self) -> bool {
        self.hue != 0.0 || self.saturation != 0.0 || self.lightness != 0.0
    }

    /// `true` if every factor is neutral.
    pub fn is_identity(&self) -> bool {
        !self.has_brightness_contrast() && !self.has_hsl()
    }

    /// Apply all adjustments to `buffer` in place.
    ///
    /// Brightness/contrast runs first, then hue/saturation/lightness. A pass
    /// whose factors are all neutral is skipped, so an identity adjustment
    /// leaves the buffer byte-for-byte unchanged.
    ///
    /// # Errors
    /// [`EnhanceError::InvalidInput`](crate::EnhanceError::InvalidInput) if
    /// the length is not a multiple of 4, before any byte is changed.
    pub fn apply<'a>(&self, buffer: &'a mut [u8], layout: ChannelLayout) -> EnhanceResult<&'a mut [u8]> {
        let mut pixels = PixelBuffer::new(&mut *buffer, layout)?;
        self.apply_pixels(&mut pixels);
        Ok(buffer)
    }

    /// Apply all adjustments to an already validated buffer.
    pub fn apply_pixels(&self, pixels: &mut PixelBuffer<'_>) {
        if self.is_identity() {
            tracing::debug!("identity adjustment, {} pixels left as is", pixels.len());
            return;
        }
        if self.has_brightness_contrast() {
            enhance_brightness_contrast(pixels, self.brightness, self.contrast);
        }
        if self.has_hsl() {
            enhance_hsl(pixels, self.hue, self.saturation, self.lightness);
        }
    }
}
