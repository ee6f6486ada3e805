//! Press-reactive mappers for the non-loading variants.

use super::StyleConfig;
use crate::paint::SemanticPaint;
use crate::shape::Shape;
use crate::types::{
    AnimationSpec, AnimationTrigger, BackdropLayer, Curve, FontWeight, InteractionState,
    RenderDescription, StrokeOverlay,
};

const BOUNCY_PRESSED_OFFSET: f32 = -0.5;
const BOUNCY_BACKDROP_INSET: (f32, f32) = (-3.5, -2.0);
const BOUNCY_BACKDROP_OFFSET: (f32, f32) = (1.5, 0.2);
const BOUNCY_STROKE_WIDTH: f32 = 2.0;

const GROWING_PRESSED_SCALE: f32 = 1.2;
const GROWING_DURATION: f32 = 0.2;

/// Idle/pressed pick from a `(idle, pressed)` pair.
fn pick(state: InteractionState, (idle, pressed): (f32, f32)) -> f32 {
    if state.is_pressed() {
        pressed
    } else {
        idle
    }
}

/// Paint swap with the config's own shape and padding.
fn paint_swap(config: &StyleConfig, state: InteractionState) -> RenderDescription {
    RenderDescription::base(
        config.text_paint_for(state).clone(),
        config.background_paint_for(state).clone(),
        config.shape,
        config.padding(),
    )
}

pub(super) fn bouncy(config: &StyleConfig, state: InteractionState) -> RenderDescription {
    let mut desc = paint_swap(config, state);
    desc.vertical_offset = pick(state, (0.0, BOUNCY_PRESSED_OFFSET));
    desc.backdrop = Some(BackdropLayer {
        paint: SemanticPaint::Primary.into(),
        inset: pick(state, BOUNCY_BACKDROP_INSET),
        offset_y: pick(state, BOUNCY_BACKDROP_OFFSET),
    });
    desc.stroke = Some(StrokeOverlay {
        paint: SemanticPaint::Background.into(),
        line_width: BOUNCY_STROKE_WIDTH,
    });
    desc.animation = Some(AnimationSpec::new(Curve::Linear, AnimationTrigger::Press));
    desc
}

pub(super) fn growing(config: &StyleConfig, state: InteractionState) -> RenderDescription {
    let mut desc = paint_swap(config, state);
    desc.scale = pick(state, (1.0, GROWING_PRESSED_SCALE));
    desc.animation = Some(
        AnimationSpec::new(Curve::EaseOut, AnimationTrigger::Press).with_duration(GROWING_DURATION),
    );
    desc
}

/// Shape is always a plain capsule.
pub(super) fn capsule(config: &StyleConfig, state: InteractionState) -> RenderDescription {
    let mut desc = paint_swap(config, state);
    desc.shape = Shape::capsule();
    desc
}

pub(super) fn shape(config: &StyleConfig, state: InteractionState) -> RenderDescription {
    paint_swap(config, state)
}

/// Shape is always a continuous capsule, text always bold.
pub(super) fn primary(config: &StyleConfig, state: InteractionState) -> RenderDescription {
    let mut desc = paint_swap(config, state);
    desc.shape = Shape::continuous_capsule();
    desc.font_weight = FontWeight::Bold;
    desc
}
