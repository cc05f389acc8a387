//! Buffer passes: the two entry points a host calls, plus the combined
//! adjustment set.

pub mod brightness_contrast;
pub mod hsl;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod params;

pub use brightness_contrast::brightness_contrast;
pub use hsl::hue_saturation_lightness;
