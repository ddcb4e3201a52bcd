//! Shadow, stroke, border and filter values built from nested style records.
//! Disabled effects produce `None` so the property is left out entirely.

use crate::color::hex_to_rgba;
use crate::number::format_number;
use mailcraft_blocks::{Border, DropShadow, Filter, Stroke};

/// `x y blur color` shared by every shadow flavour
fn shadow_parts(shadow: &DropShadow) -> String {
    format!(
        "{}px {}px {}px {}",
        shadow.x,
        shadow.y,
        shadow.blur,
        hex_to_rgba(&shadow.color, shadow.opacity)
    )
}

pub fn box_shadow(shadow: &DropShadow) -> Option<String> {
    shadow.enabled.then(|| shadow_parts(shadow))
}

pub fn text_shadow(shadow: &DropShadow) -> Option<String> {
    shadow.enabled.then(|| shadow_parts(shadow))
}

pub fn drop_shadow(shadow: &DropShadow) -> Option<String> {
    shadow
        .enabled
        .then(|| format!("drop-shadow({})", shadow_parts(shadow)))
}

/// Value for `filter`. Always present: with no adjustments it is the
/// neutral `brightness(100%) contrast(100%) saturate(100%)`.
pub fn filter_value(filter: &Filter, shadow: &DropShadow) -> String {
    let mut value = format!(
        "brightness({}%) contrast({}%) saturate({}%)",
        filter.brightness, filter.contrast, filter.saturate
    );

    if let Some(drop) = drop_shadow(shadow) {
        value.push(' ');
        value.push_str(&drop);
    }

    value
}

/// Value for `-webkit-text-stroke`
pub fn text_stroke(stroke: &Stroke) -> Option<String> {
    stroke
        .enabled
        .then(|| format!("{}px {}", format_number(stroke.width), stroke.color))
}

pub fn border(border: &Border) -> Option<String> {
    border
        .enabled
        .then(|| format!("{}px {} {}", border.width, border.style, border.color))
}
