//! Image loading and saving for the command-line host.
//!
//! The engine works on packed 8-bit pixels in a host byte order, so decoded
//! images are converted to RGBA8 and swizzled into the requested
//! [`ChannelLayout`] on load, and swizzled back on save.

use std::path::Path;

use tonal_core::{ChannelLayout, EnhanceError};

/// A decoded image whose pixels are packed in `layout` order.
#[derive(Debug, Clone)]
pub struct HostImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Packed 4-byte pixels, row-major.
    pub data: Vec<u8>,
    /// Byte order of `data`.
    pub layout: ChannelLayout,
}

/// Load an image from disk and pack it into `layout`.
///
/// Supports the formats enabled in the `image` crate. Images without alpha
/// get an opaque alpha channel.
pub fn load_image(path: &Path, layout: ChannelLayout) -> Result<HostImage, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    layout.pack_rgba(&mut data)?;
    tracing::debug!(
        "loaded {} ({}x{}, {:?}) as {}",
        path.display(),
        width,
        height,
        img.color(),
        layout
    );

    Ok(HostImage {
        width,
        height,
        data,
        layout,
    })
}

/// Unpack `image` back to RGBA and write it to `path`.
///
/// The output format follows the file extension.
pub fn save_image(image: HostImage, path: &Path) -> Result<(), ImageLoadError> {
    let HostImage {
        width,
        height,
        mut data,
        layout,
    } = image;
    layout.unpack_rgba(&mut data)?;

    let len = data.len();
    let rgba = image::RgbaImage::from_raw(width, height, data).ok_or(ImageLoadError::Size {
        width,
        height,
        len,
    })?;
    rgba.save(path).map_err(ImageLoadError::Encode)?;
    tracing::debug!("wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}

/// Errors that can occur while loading or saving an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("pixel data of {len} bytes does not fit {width}x{height}")]
    Size { width: u32, height: u32, len: usize },
    #[error(transparent)]
    Layout(#[from] EnhanceError),
}
