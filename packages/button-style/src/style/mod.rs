//! Button style presets and the press-reactive mapper.
//!
//! A [`ButtonStyle`] pairs a [`StyleVariant`] (which perturbation rules
//! apply) with a [`StyleConfig`] (which paints, shape and padding). Both
//! are fixed at construction; [`ButtonStyle::render`] is a pure function of
//! the style and the current [`InteractionState`].

mod press;

use crate::loading::{LoadingPlacement, LoadingPolicy};
use crate::paint::{Paint, Rgba, SemanticPaint};
use crate::shape::Shape;
use crate::types::{InteractionState, Padding, RenderDescription};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_VERTICAL_PADDING: f32 = 10.0;
pub const DEFAULT_HORIZONTAL_PADDING: f32 = 20.0;

/// Paints, shape and padding chosen once for a button.
///
/// For the loading variant `pressed_background_paint` is the
/// disabled/loading fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub text_paint: Paint,
    pub pressed_text_paint: Paint,
    pub background_paint: Paint,
    pub pressed_background_paint: Paint,
    pub shape: Shape,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(Rgba::WHITE.into(), Rgba::BLUE.into())
    }
}

impl StyleConfig {
    /// Config whose pressed paints equal the idle paints.
    pub fn new(text_paint: Paint, background_paint: Paint) -> Self {
        Self {
            pressed_text_paint: text_paint.clone(),
            pressed_background_paint: background_paint.clone(),
            text_paint,
            background_paint,
            shape: Shape::default(),
            vertical_padding: DEFAULT_VERTICAL_PADDING,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING,
        }
    }

    /// Set the text paint for both idle and pressed states.
    pub fn with_text_paint(mut self, paint: impl Into<Paint>) -> Self {
        let paint = paint.into();
        self.pressed_text_paint = paint.clone();
        self.text_paint = paint;
        self
    }

    pub fn with_pressed_text_paint(mut self, paint: impl Into<Paint>) -> Self {
        self.pressed_text_paint = paint.into();
        self
    }

    /// Set the idle background paint only.
    pub fn with_background_paint(mut self, paint: impl Into<Paint>) -> Self {
        self.background_paint = paint.into();
        self
    }

    pub fn with_pressed_background_paint(mut self, paint: impl Into<Paint>) -> Self {
        self.pressed_background_paint = paint.into();
        self
    }

    /// Background used while loading.
    pub fn with_disabled_paint(self, paint: impl Into<Paint>) -> Self {
        self.with_pressed_background_paint(paint)
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding;
        self
    }

    pub fn with_horizontal_padding(mut self, padding: f32) -> Self {
        self.horizontal_padding = padding;
        self
    }

    pub fn padding(&self) -> Padding {
        Padding::new(self.vertical_padding, self.horizontal_padding)
    }

    /// Text paint for the given press state.
    pub fn text_paint_for(&self, state: InteractionState) -> &Paint {
        if state.is_pressed() {
            &self.pressed_text_paint
        } else {
            &self.text_paint
        }
    }

    /// Background paint for the given press state.
    pub fn background_paint_for(&self, state: InteractionState) -> &Paint {
        if state.is_pressed() {
            &self.pressed_background_paint
        } else {
            &self.background_paint
        }
    }
}

/// Which perturbation rules a style applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum StyleVariant {
    /// Lifts slightly and tightens its backdrop when pressed
    Bouncy,
    /// Scales up when pressed
    Growing,
    /// Capsule background, paint swap only
    Capsule,
    /// Caller-chosen shape, paint swap only
    Shape,
    /// Bold label on a continuous capsule
    Primary,
    /// Shows a progress indicator while loading
    Loading {
        #[serde(default)]
        placement: LoadingPlacement,
    },
}

impl StyleVariant {
    pub fn kind(&self) -> StyleKind {
        match self {
            Self::Bouncy => StyleKind::Bouncy,
            Self::Growing => StyleKind::Growing,
            Self::Capsule => StyleKind::Capsule,
            Self::Shape => StyleKind::Shape,
            Self::Primary => StyleKind::Primary,
            Self::Loading { .. } => StyleKind::Loading,
        }
    }
}

/// Variant tag without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Bouncy,
    Growing,
    Capsule,
    Shape,
    Primary,
    Loading,
}

impl StyleKind {
    pub const ALL: [StyleKind; 6] = [
        StyleKind::Capsule,
        StyleKind::Bouncy,
        StyleKind::Growing,
        StyleKind::Shape,
        StyleKind::Primary,
        StyleKind::Loading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bouncy => "bouncy",
            Self::Growing => "growing",
            Self::Capsule => "capsule",
            Self::Shape => "shape",
            Self::Primary => "primary",
            Self::Loading => "loading",
        }
    }

    /// Preset style for this kind. Loading uses the default placement.
    pub fn preset(&self) -> ButtonStyle {
        match self {
            Self::Bouncy => ButtonStyle::bouncy(),
            Self::Growing => ButtonStyle::growing(),
            Self::Capsule => ButtonStyle::capsule(),
            Self::Shape => ButtonStyle::shape(),
            Self::Primary => ButtonStyle::primary(),
            Self::Loading => ButtonStyle::loading(LoadingPlacement::default()),
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

/// A complete, immutable button style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub variant: StyleVariant,
    pub config: StyleConfig,
}

impl ButtonStyle {
    pub fn new(variant: StyleVariant, config: StyleConfig) -> Self {
        Self { variant, config }
    }

    /// Black on yellow, white on cyan when pressed.
    pub fn bouncy() -> Self {
        Self::new(
            StyleVariant::Bouncy,
            StyleConfig::new(Rgba::BLACK.into(), Rgba::YELLOW.into())
                .with_pressed_text_paint(Rgba::WHITE)
                .with_pressed_background_paint(Rgba::CYAN),
        )
    }

    /// White on blue, grows to 1.2x when pressed.
    pub fn growing() -> Self {
        Self::new(StyleVariant::Growing, StyleConfig::default())
    }

    /// White on a blue capsule.
    pub fn capsule() -> Self {
        Self::new(StyleVariant::Capsule, StyleConfig::default())
    }

    /// Primary text on a secondary fill.
    pub fn shape() -> Self {
        Self::new(
            StyleVariant::Shape,
            StyleConfig::new(
                SemanticPaint::Primary.into(),
                SemanticPaint::Secondary.into(),
            ),
        )
    }

    /// Bold white text on the accent colour.
    pub fn primary() -> Self {
        Self::new(
            StyleVariant::Primary,
            StyleConfig::new(Rgba::WHITE.into(), SemanticPaint::Accent.into())
                .with_shape(Shape::continuous_capsule())
                .with_vertical_padding(12.0)
                .with_horizontal_padding(24.0),
        )
    }

    /// White on blue, gray while loading.
    pub fn loading(placement: LoadingPlacement) -> Self {
        Self::new(
            StyleVariant::Loading { placement },
            StyleConfig::default().with_disabled_paint(Rgba::GRAY),
        )
    }

    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply `f` to the config, keeping the variant.
    pub fn map_config(mut self, f: impl FnOnce(StyleConfig) -> StyleConfig) -> Self {
        self.config = f(self.config);
        self
    }

    pub fn kind(&self) -> StyleKind {
        self.variant.kind()
    }

    /// Loading placement, if this is a loading style.
    pub fn placement(&self) -> Option<LoadingPlacement> {
        match self.variant {
            StyleVariant::Loading { placement } => Some(placement),
            _ => None,
        }
    }

    /// Describe the button for a press state, not loading.
    pub fn render(&self, state: InteractionState) -> RenderDescription {
        self.render_with_loading(state, false)
    }

    /// Describe the button for a press state and loading flag.
    ///
    /// `is_loading` only affects the loading variant.
    pub fn render_with_loading(&self, state: InteractionState, is_loading: bool) -> RenderDescription {
        match self.variant {
            StyleVariant::Bouncy => press::bouncy(&self.config, state),
            StyleVariant::Growing => press::growing(&self.config, state),
            StyleVariant::Capsule => press::capsule(&self.config, state),
            StyleVariant::Shape => press::shape(&self.config, state),
            StyleVariant::Primary => press::primary(&self.config, state),
            StyleVariant::Loading { placement } => {
                LoadingPolicy::new(&self.config, placement).decide_pressed(state, is_loading)
            }
        }
    }
}
