//! Loading indicator placement and the loading appearance policy.
//!
//! The policy observes two signals: `is_loading`, owned and toggled by the
//! caller, and a [`LoadingPlacement`] fixed at construction. There are only
//! two steady states (loading / not loading); the ease-in-out animation
//! between them belongs to the renderer.

use crate::style::StyleConfig;
use crate::types::{
    Alignment, AnimationSpec, AnimationTrigger, Content, Curve, EdgeSet, InteractionState,
    LoadingOverlay, RenderDescription,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the progress indicator appears while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPlacement {
    /// Replace the label with an indicator sized by the padding
    Resize,
    Leading,
    Trailing,
    Top,
    Bottom,
    /// Overlay in the middle and hide the label
    #[default]
    Center,
    /// Never show an indicator
    None,
}

impl LoadingPlacement {
    pub const ALL: [LoadingPlacement; 7] = [
        LoadingPlacement::Resize,
        LoadingPlacement::Leading,
        LoadingPlacement::Trailing,
        LoadingPlacement::Top,
        LoadingPlacement::Bottom,
        LoadingPlacement::Center,
        LoadingPlacement::None,
    ];

    /// Overlay alignment.
    pub fn alignment(&self) -> Alignment {
        match self {
            Self::Leading => Alignment::Leading,
            Self::Trailing => Alignment::Trailing,
            Self::Top => Alignment::Top,
            Self::Bottom => Alignment::Bottom,
            Self::Resize | Self::Center | Self::None => Alignment::Center,
        }
    }

    /// Edge that receives padding around the overlay.
    pub fn padding_edge(&self) -> EdgeSet {
        match self {
            Self::Leading => EdgeSet::Leading,
            Self::Trailing => EdgeSet::Trailing,
            Self::Top => EdgeSet::Top,
            Self::Bottom => EdgeSet::Bottom,
            Self::Resize | Self::Center | Self::None => EdgeSet::Empty,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::None => "none",
        }
    }
}

impl fmt::Display for LoadingPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadingPlacement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| Error::UnknownPlacement(s.to_string()))
    }
}

/// Maps the loading flag to a render description for one button.
#[derive(Debug, Clone, Copy)]
pub struct LoadingPolicy<'a> {
    config: &'a StyleConfig,
    placement: LoadingPlacement,
}

impl<'a> LoadingPolicy<'a> {
    pub fn new(config: &'a StyleConfig, placement: LoadingPlacement) -> Self {
        Self { config, placement }
    }

    pub fn placement(&self) -> LoadingPlacement {
        self.placement
    }

    /// Describe the button, not pressed.
    pub fn decide(&self, is_loading: bool) -> RenderDescription {
        self.decide_pressed(InteractionState::Idle, is_loading)
    }

    /// Describe the button for a press state and loading flag.
    ///
    /// While loading the disabled paint wins over any press state and the
    /// button reports itself as non-interactive.
    pub fn decide_pressed(&self, state: InteractionState, is_loading: bool) -> RenderDescription {
        let config = self.config;
        // The pressed background slot holds the loading fill, so a press
        // alone never changes the background.
        let background = if is_loading {
            config.pressed_background_paint.clone()
        } else {
            config.background_paint.clone()
        };

        let mut desc = RenderDescription::base(
            config.text_paint_for(state).clone(),
            background,
            config.shape,
            config.padding(),
        );
        desc.is_interaction_disabled = is_loading;
        desc.animation = Some(AnimationSpec::new(Curve::EaseInOut, AnimationTrigger::Loading));

        if !is_loading {
            return desc;
        }

        match self.placement {
            LoadingPlacement::Resize => {
                desc.content = Content::LoadingIndicator {
                    padding: config.padding().min_side(),
                };
            }
            LoadingPlacement::None => {}
            placement => {
                // Only a centred indicator hides the label; edge placements
                // leave it fully visible.
                let opacity = if placement == LoadingPlacement::Center { 0.0 } else { 1.0 };
                desc.content = Content::Label { opacity };
                desc.loading_overlay = Some(LoadingOverlay {
                    alignment: placement.alignment(),
                    padding_edge: placement.padding_edge(),
                });
            }
        }

        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Paint, Rgba};
    use crate::style::ButtonStyle;

    fn config() -> StyleConfig {
        ButtonStyle::loading(LoadingPlacement::Center).config
    }

    #[test]
    fn test_resize_replaces_label() {
        let config = config().with_vertical_padding(6.0);
        let policy = LoadingPolicy::new(&config, LoadingPlacement::Resize);

        let loading = policy.decide(true);
        assert_eq!(loading.content, Content::LoadingIndicator { padding: 6.0 });
        assert!(!loading.shows_label());
        assert!(loading.loading_overlay.is_none());

        let idle = policy.decide(false);
        assert_eq!(idle.content, Content::Label { opacity: 1.0 });
        assert!(!idle.shows_loading_indicator());
    }

    #[test]
    fn test_center_hides_label_edges_do_not() {
        let config = config();
        let center = LoadingPolicy::new(&config, LoadingPlacement::Center).decide(true);
        assert_eq!(center.label_opacity(), 0.0);
        assert_eq!(
            center.loading_overlay,
            Some(LoadingOverlay {
                alignment: Alignment::Center,
                padding_edge: EdgeSet::Empty,
            })
        );

        for placement in [
            LoadingPlacement::Leading,
            LoadingPlacement::Trailing,
            LoadingPlacement::Top,
            LoadingPlacement::Bottom,
        ] {
            let desc = LoadingPolicy::new(&config, placement).decide(true);
            assert_eq!(desc.label_opacity(), 1.0, "{placement}");
            assert!(desc.shows_loading_indicator());
        }
    }

    #[test]
    fn test_none_never_shows_indicator() {
        let config = config();
        let desc = LoadingPolicy::new(&config, LoadingPlacement::None).decide(true);
        assert!(!desc.shows_loading_indicator());
        assert_eq!(desc.label_opacity(), 1.0);
        assert!(desc.is_interaction_disabled);
        assert_eq!(desc.background_paint, Paint::Color(Rgba::GRAY));
    }

    #[test]
    fn test_disabled_tracks_loading() {
        let config = config();
        for placement in LoadingPlacement::ALL {
            let policy = LoadingPolicy::new(&config, placement);
            assert!(policy.decide(true).is_interaction_disabled);
            assert!(!policy.decide(false).is_interaction_disabled);
        }
    }

    #[test]
    fn test_loading_paint_beats_press() {
        let config = config().with_pressed_text_paint(Rgba::BLACK);
        let policy = LoadingPolicy::new(&config, LoadingPlacement::Leading);

        let desc = policy.decide_pressed(InteractionState::Pressed, true);
        assert_eq!(desc.background_paint, Paint::Color(Rgba::GRAY));

        let desc = policy.decide_pressed(InteractionState::Pressed, false);
        assert_eq!(desc.background_paint, Paint::Color(Rgba::BLUE));
        assert_eq!(desc.text_paint, Paint::Color(Rgba::BLACK));
    }

    #[test]
    fn test_loading_animation_is_ease_in_out() {
        let config = config();
        let policy = LoadingPolicy::new(&config, LoadingPlacement::Top);
        for is_loading in [false, true] {
            let animation = policy.decide(is_loading).animation.unwrap();
            assert_eq!(animation.curve, Curve::EaseInOut);
            assert_eq!(animation.trigger, AnimationTrigger::Loading);
            assert!(animation.duration.is_none());
        }
    }

    #[test]
    fn test_placement_table() {
        for placement in [LoadingPlacement::Resize, LoadingPlacement::Center, LoadingPlacement::None] {
            assert_eq!(placement.alignment(), Alignment::Center);
            assert!(placement.padding_edge().is_empty());
        }
        assert_eq!(LoadingPlacement::Leading.alignment(), Alignment::Leading);
        assert_eq!(LoadingPlacement::Leading.padding_edge(), EdgeSet::Leading);
        assert_eq!(LoadingPlacement::Bottom.alignment(), Alignment::Bottom);
        assert_eq!(LoadingPlacement::Bottom.padding_edge(), EdgeSet::Bottom);
    }

    #[test]
    fn test_placement_parse() {
        assert_eq!("Trailing".parse::<LoadingPlacement>().unwrap(), LoadingPlacement::Trailing);
        assert_eq!(LoadingPlacement::default(), LoadingPlacement::Center);
        assert!(matches!(
            "sideways".parse::<LoadingPlacement>(),
            Err(Error::UnknownPlacement(_))
        ));
    }
}
