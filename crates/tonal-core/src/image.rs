//! Borrowed view of a host-owned 8-bit pixel buffer.

use crate::error::{EnhanceError, EnhanceResult};
use crate::layout::ChannelLayout;

/// Bytes per pixel. Every buffer carries an alpha channel.
pub const CHANNELS: usize = 4;

/// One packed pixel, channel order given by a [`ChannelLayout`].
pub type Pixel = [u8; CHANNELS];

/// A caller's byte buffer, validated and viewed as whole pixels.
///
/// Construction is the single validation point of the engine: a buffer that
/// does not hold a whole number of pixels is rejected before any byte is
/// touched. The view borrows the bytes for its lifetime and never resizes
/// them.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    pixels: &'a mut [Pixel],
    layout: ChannelLayout,
}

impl<'a> PixelBuffer<'a> {
    /// View `data` as pixels laid out according to `layout`.
    pub fn new(data: &'a mut [u8], layout: ChannelLayout) -> EnhanceResult<Self> {
        let len = data.len();
        let pixels = bytemuck::try_cast_slice_mut::<u8, Pixel>(data).map_err(|_| {
            tracing::warn!("rejecting pixel buffer of {} bytes", len);
            EnhanceError::InvalidInput { len }
        })?;
        Ok(Self { pixels, layout })
    }

    /// Channel layout of the pixels.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels as a mutable slice.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut *self.pixels
    }
}
