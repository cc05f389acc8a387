//! Byte order of the four channels inside a packed pixel.
//!
//! Hosts hand over pixels in their platform's native 32-bit word order, so
//! the position of alpha and of each color channel depends on endianness.
//! The layout is an explicit value passed to every buffer pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EnhanceError, EnhanceResult};
use crate::image::CHANNELS;

/// In-pixel byte offsets of alpha, red, green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// Little-endian hosts: `B G R A`.
    LittleEndian,
    /// Big-endian hosts: `A R G B`.
    BigEndian,
    /// Any other byte order (PDP-style): `R A G B`.
    Other,
}

impl ChannelLayout {
    /// Layout matching the byte order of the compilation target.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::LittleEndian
        } else {
            Self::BigEndian
        }
    }

    /// Offset of the alpha byte within a pixel.
    pub const fn alpha(self) -> usize {
        match self {
            Self::LittleEndian => 3,
            Self::BigEndian => 0,
            Self::Other => 1,
        }
    }

    /// Offset of the red byte within a pixel.
    pub const fn red(self) -> usize {
        match self {
            Self::LittleEndian => 2,
            Self::BigEndian => 1,
            Self::Other => 0,
        }
    }

    /// Offset of the green byte within a pixel.
    pub const fn green(self) -> usize {
        match self {
            Self::LittleEndian => 1,
            Self::BigEndian | Self::Other => 2,
        }
    }

    /// Offset of the blue byte within a pixel.
    pub const fn blue(self) -> usize {
        match self {
            Self::LittleEndian => 0,
            Self::BigEndian | Self::Other => 3,
        }
    }

    /// Offsets of red, green and blue, in that order.
    pub const fn rgb(self) -> [usize; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Short label naming the byte sequence, e.g. `"BGRA"`.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LittleEndian => "BGRA",
            Self::BigEndian => "ARGB",
            Self::Other => "RAGB",
        }
    }

    /// All supported layouts.
    pub fn all() -> &'static [Self] {
        const ALL: [ChannelLayout; 3] = [
            ChannelLayout::LittleEndian,
            ChannelLayout::BigEndian,
            ChannelLayout::Other,
        ];
        &ALL
    }

    /// Reorder `R G B A` pixels into this layout, in place.
    pub fn pack_rgba(self, data: &mut [u8]) -> EnhanceResult<()> {
        check_len(data)?;
        for px in data.chunks_exact_mut(CHANNELS) {
            let [r, g, b, a] = [px[0], px[1], px[2], px[3]];
            px[self.red()] = r;
            px[self.green()] = g;
            px[self.blue()] = b;
            px[self.alpha()] = a;
        }
        Ok(())
    }

    /// Reorder pixels in this layout back into `R G B A`, in place.
    pub fn unpack_rgba(self, data: &mut [u8]) -> EnhanceResult<()> {
        check_len(data)?;
        for px in data.chunks_exact_mut(CHANNELS) {
            let rgba = [px[self.red()], px[self.green()], px[self.blue()], px[self.alpha()]];
            px.copy_from_slice(&rgba);
        }
        Ok(())
    }
}

impl Default for ChannelLayout {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn check_len(data: &[u8]) -> EnhanceResult<()> {
    if data.len() % CHANNELS != 0 {
        return Err(EnhanceError::InvalidInput { len: data.len() });
    }
    Ok(())
}
