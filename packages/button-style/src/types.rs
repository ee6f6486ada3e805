//! Core data types shared by every style: interaction state in, render
//! description out.

use crate::paint::Paint;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

/// Press state reported by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    #[default]
    Idle,
    Pressed,
}

impl InteractionState {
    pub const ALL: [InteractionState; 2] = [InteractionState::Idle, InteractionState::Pressed];

    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }
}

impl From<bool> for InteractionState {
    fn from(pressed: bool) -> Self {
        if pressed {
            Self::Pressed
        } else {
            Self::Idle
        }
    }
}

/// Where an overlay sits inside the button's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Center,
    Leading,
    Trailing,
    Top,
    Bottom,
}

/// Edges that receive the renderer's default padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSet {
    #[default]
    Empty,
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl EdgeSet {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Timing curve for a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    Linear,
    EaseOut,
    EaseInOut,
}

/// Which signal an animation is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationTrigger {
    Press,
    Loading,
}

/// Visual interpolation the renderer applies when `trigger` changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub curve: Curve,
    /// Duration in seconds; `None` uses the renderer's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    pub trigger: AnimationTrigger,
}

impl AnimationSpec {
    pub fn new(curve: Curve, trigger: AnimationTrigger) -> Self {
        Self {
            curve,
            duration: None,
            trigger,
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Inner padding between the label and the background shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Padding {
    pub fn new(vertical: f32, horizontal: f32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The smaller of the two sides.
    pub fn min_side(&self) -> f32 {
        self.vertical.min(self.horizontal)
    }
}

/// What is mounted inside the button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    /// The caller's label
    Label { opacity: f32 },
    /// A progress indicator in place of the label, padded on all sides
    LoadingIndicator { padding: f32 },
}

/// A progress indicator drawn over a still-mounted label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingOverlay {
    pub alignment: Alignment,
    pub padding_edge: EdgeSet,
}

/// Shadow layer drawn behind the background shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackdropLayer {
    pub paint: Paint,
    /// Padding applied to the shape; negative values grow it
    pub inset: f32,
    pub offset_y: f32,
}

/// Outline drawn over the background shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeOverlay {
    pub paint: Paint,
    pub line_width: f32,
}

/// Fully resolved visual attributes for one interaction state.
///
/// Derived fresh on every query; holding on to one across a state change
/// shows stale visuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescription {
    pub text_paint: Paint,
    pub background_paint: Paint,
    pub shape: Shape,
    pub content_padding: Padding,
    pub vertical_offset: f32,
    pub scale: f32,
    pub font_weight: FontWeight,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_overlay: Option<LoadingOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<BackdropLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeOverlay>,
    pub is_interaction_disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationSpec>,
}

impl RenderDescription {
    /// Plain label with no perturbation.
    pub(crate) fn base(text_paint: Paint, background_paint: Paint, shape: Shape, padding: Padding) -> Self {
        Self {
            text_paint,
            background_paint,
            shape,
            content_padding: padding,
            vertical_offset: 0.0,
            scale: 1.0,
            font_weight: FontWeight::Regular,
            content: Content::Label { opacity: 1.0 },
            loading_overlay: None,
            backdrop: None,
            stroke: None,
            is_interaction_disabled: false,
            animation: None,
        }
    }

    /// Whether the caller's label is mounted.
    pub fn shows_label(&self) -> bool {
        matches!(self.content, Content::Label { .. })
    }

    /// Opacity of the caller's label; 0 when it has been replaced.
    pub fn label_opacity(&self) -> f32 {
        match self.content {
            Content::Label { opacity } => opacity,
            Content::LoadingIndicator { .. } => 0.0,
        }
    }

    /// Whether a progress indicator is visible, either inline or overlaid.
    pub fn shows_loading_indicator(&self) -> bool {
        self.loading_overlay.is_some() || matches!(self.content, Content::LoadingIndicator { .. })
    }

    /// Alignment of the loading overlay, Center when there is none.
    pub fn alignment(&self) -> Alignment {
        self.loading_overlay
            .map(|overlay| overlay.alignment)
            .unwrap_or_default()
    }
}
