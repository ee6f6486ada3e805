//! Button Style - Declarative button appearance presets.
//!
//! This crate maps a button's interaction state to a fully resolved
//! [`RenderDescription`] that a host renderer applies to its visual tree:
//!
//! - **Press-reactive presets**: capsule, bouncy, growing, shape, primary
//! - **Loading preset**: indicator placement, content replacement, disabled state
//! - **Style sheets**: named styles loaded from TOML
//!
//! Every style is an immutable value. Rendering is a pure function of the
//! style and the current state, so descriptions are recomputed on every
//! state change and never cached.
//!
//! # Example
//!
//! ```rust
//! use button_style::{ButtonStyle, InteractionState, LoadingPlacement};
//!
//! let bouncy = ButtonStyle::bouncy();
//! let pressed = bouncy.render(InteractionState::Pressed);
//! assert_eq!(pressed.vertical_offset, -0.5);
//!
//! let submit = ButtonStyle::loading(LoadingPlacement::Leading);
//! let busy = submit.render_with_loading(InteractionState::Idle, true);
//! assert!(busy.is_interaction_disabled);
//! assert_eq!(busy.label_opacity(), 1.0);
//! ```

pub mod loading;
pub mod paint;
pub mod registry;
pub mod shape;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use loading::{LoadingPlacement, LoadingPolicy};
pub use paint::{GradientDirection, Paint, Rgba, SemanticPaint};
pub use registry::{StyleEntry, StyleInfo, StyleRegistry, StyleSheet};
pub use shape::Shape;
pub use style::{ButtonStyle, StyleConfig, StyleKind, StyleVariant};
pub use types::{
    Alignment, AnimationSpec, AnimationTrigger, BackdropLayer, Content, Curve, EdgeSet,
    FontWeight, InteractionState, LoadingOverlay, Padding, RenderDescription, StrokeOverlay,
};

/// Error types for button-style configuration.
///
/// Rendering itself never fails; these only surface while parsing paints,
/// placements and style sheets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid paint: {0}")]
    InvalidPaint(String),

    #[error("Invalid length for {field}: {value}")]
    InvalidLength { field: &'static str, value: f32 },

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Unknown placement: {0}")]
    UnknownPlacement(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for button-style operations.
pub type Result<T> = std::result::Result<T, Error>;
