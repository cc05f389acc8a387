//! Per-value tone curves: brightness/contrast on channels, hue/saturation/
//! lightness on HSL components.

pub mod brightness_contrast;
pub mod hsl;
