//! Tonal Core: in-place tone adjustment of 8-bit pixel buffers.
//!
//! This crate contains the brightness/contrast and hue/saturation/lightness
//! curves, the RGB ↔ HSL conversion and the buffer passes a host calls with
//! its packed 4-channel pixels. No image decoding or display dependencies.

pub mod color_space;
pub mod config;
pub mod enhance;
pub mod error;
pub mod grading;
pub mod image;
pub mod layout;
pub mod manipulation;
pub mod numeric;

// Re-exports for convenience.
pub use config::EnhanceConfig;
pub use enhance::params::Adjustments;
#[cfg(feature = "parallel")]
pub use enhance::parallel;
pub use enhance::{brightness_contrast, hue_saturation_lightness};
pub use error::{EnhanceError, EnhanceResult};
pub use image::{PixelBuffer, CHANNELS};
pub use layout::ChannelLayout;
pub use manipulation::{Manipulation, ManipulationKind, Manipulations};
