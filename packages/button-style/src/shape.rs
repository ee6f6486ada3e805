//! Background shapes.

use serde::{Deserialize, Serialize};

/// Outline used for a button's background, backdrop and stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Fully rounded ends. `continuous` selects a squircle-style curve.
    Capsule {
        #[serde(default)]
        continuous: bool,
    },
    /// Rectangle, optionally with rounded corners
    Rect {
        #[serde(default)]
        corner_radius: f32,
    },
    Ellipse,
    Circle,
}

impl Default for Shape {
    fn default() -> Self {
        Self::capsule()
    }
}

impl Shape {
    pub fn capsule() -> Self {
        Self::Capsule { continuous: false }
    }

    pub fn continuous_capsule() -> Self {
        Self::Capsule { continuous: true }
    }

    pub fn rect() -> Self {
        Self::Rect { corner_radius: 0.0 }
    }

    pub fn rounded_rect(corner_radius: f32) -> Self {
        Self::Rect { corner_radius }
    }
}
