//! Integer slider state behind a host's manipulate mode.
//!
//! Hosts expose each adjustment as an integer slider with fixed limits. A
//! [`Manipulations`] set tracks the five sliders and which one has focus,
//! and converts the slider positions into engine [`Adjustments`].
//!
//! | Slider     | Limits       | Factor          |
//! |------------|--------------|-----------------|
//! | brightness | −127 … 127   | value / 255     |
//! | contrast   | −127 … 127   | value / 255     |
//! | hue        | −180 … 180   | value (degrees) |
//! | saturation | −100 … 100   | value / 100     |
//! | lightness  | −100 … 100   | value / 100     |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enhance::params::Adjustments;

/// Identifies one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManipulationKind {
    Brightness,
    Contrast,
    Hue,
    Saturation,
    Lightness,
}

impl ManipulationKind {
    /// Lower-case name shown next to the slider.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
        }
    }

    /// Inclusive `(lower, upper)` slider limits.
    pub const fn limits(self) -> (i32, i32) {
        match self {
            Self::Brightness | Self::Contrast => (-127, 127),
            Self::Hue => (-180, 180),
            Self::Saturation | Self::Lightness => (-100, 100),
        }
    }

    /// Divisor turning a slider position into an engine factor.
    const fn divisor(self) -> f32 {
        match self {
            Self::Brightness | Self::Contrast => 255.0,
            Self::Hue => 1.0,
            Self::Saturation | Self::Lightness => 100.0,
        }
    }

    /// All sliders in display order.
    pub fn all() -> &'static [Self] {
        const ALL: [ManipulationKind; 5] = [
            ManipulationKind::Brightness,
            ManipulationKind::Contrast,
            ManipulationKind::Hue,
            ManipulationKind::Saturation,
            ManipulationKind::Lightness,
        ];
        &ALL
    }
}

impl fmt::Display for ManipulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slider: a value kept within its limits plus the value to reset to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manipulation {
    kind: ManipulationKind,
    value: i32,
    initial: i32,
}

impl Manipulation {
    /// A slider at its neutral position.
    pub fn new(kind: ManipulationKind) -> Self {
        Self::with_value(kind, 0)
    }

    /// A slider starting (and resetting) at `value`, clamped to the limits.
    pub fn with_value(kind: ManipulationKind, value: i32) -> Self {
        let value = clamp_to_limits(kind, value);
        Self {
            kind,
            value,
            initial: value,
        }
    }

    pub fn kind(&self) -> ManipulationKind {
        self.kind
    }

    /// Current slider position.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Move the slider to `value`, clamped to the limits.
    pub fn set_value(&mut self, value: i32) {
        self.value = clamp_to_limits(self.kind, value);
    }

    /// Move the slider by `delta`, clamped to the limits.
    pub fn adjust(&mut self, delta: i32) {
        self.set_value(self.value.saturating_add(delta));
    }

    /// Return to the initial position.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }

    /// `true` if the slider is off its neutral position.
    pub fn is_changed(&self) -> bool {
        self.value != 0
    }

    /// Engine factor for the current position.
    pub fn factor(&self) -> f32 {
        self.value as f32 / self.kind.divisor()
    }
}

fn clamp_to_limits(kind: ManipulationKind, value: i32) -> i32 {
    let (lower, upper) = kind.limits();
    value.clamp(lower, upper)
}

/// All five sliders plus the focused one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manipulations {
    sliders: [Manipulation; 5],
    focused: ManipulationKind,
}

impl Default for Manipulations {
    fn default() -> Self {
        Self {
            sliders: std::array::from_fn(|i| Manipulation::new(ManipulationKind::all()[i])),
            focused: ManipulationKind::Brightness,
        }
    }
}

impl Manipulations {
    /// Slider for `kind`.
    pub fn get(&self, kind: ManipulationKind) -> &Manipulation {
        &self.sliders[slot(kind)]
    }

    /// Mutable slider for `kind`.
    pub fn get_mut(&mut self, kind: ManipulationKind) -> &mut Manipulation {
        &mut self.sliders[slot(kind)]
    }

    /// Iterate over the sliders in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Manipulation> {
        self.sliders.iter()
    }

    /// Give focus to `kind`.
    pub fn focus(&mut self, kind: ManipulationKind) {
        tracing::debug!("focus {}", kind);
        self.focused = kind;
    }

    /// Slider that currently has focus.
    pub fn focused(&self) -> ManipulationKind {
        self.focused
    }

    /// Increase the focused slider by `value × count`.
    pub fn increase(&mut self, value: i32, count: i32) {
        let focused = self.focused;
        self.get_mut(focused).adjust(value.saturating_mul(count));
    }

    /// Decrease the focused slider by `value × count`.
    pub fn decrease(&mut self, value: i32, count: i32) {
        let focused = self.focused;
        self.get_mut(focused).adjust(value.saturating_mul(count).saturating_neg());
    }

    /// Set the focused slider to `value`.
    pub fn set(&mut self, value: i32) {
        let focused = self.focused;
        self.get_mut(focused).set_value(value);
    }

    /// `true` if any slider is off its neutral position.
    pub fn changed(&self) -> bool {
        self.sliders.iter().any(Manipulation::is_changed)
    }

    /// Reset every slider to its initial position.
    pub fn reset(&mut self) {
        for slider in &mut self.sliders {
            slider.reset();
        }
    }

    /// Engine factors for the current slider positions.
    pub fn adjustments(&self) -> Adjustments {
        Adjustments {
            brightness: self.get(ManipulationKind::Brightness).factor(),
            contrast: self.get(ManipulationKind::Contrast).factor(),
            hue: self.get(ManipulationKind::Hue).factor(),
            saturation: self.get(ManipulationKind::Saturation).factor(),
            lightness: self.get(ManipulationKind::Lightness).factor(),
        }
    }
}

const fn slot(kind: ManipulationKind) -> usize {
    match kind {
        ManipulationKind::Brightness => 0,
        ManipulationKind::Contrast => 1,
        ManipulationKind::Hue => 2,
        ManipulationKind::Saturation => 3,
        ManipulationKind::Lightness => 4,
    }
}
