//! Canvas background and repeating pattern declarations.

use crate::color::hex_to_rgba;
use mailcraft_blocks::{BackgroundType, GlobalSettings, PatternKind};

/// Value for the canvas `background` property
pub fn background_css(settings: &GlobalSettings) -> String {
    match settings.background_type {
        BackgroundType::Solid => settings.background_color.clone(),
        BackgroundType::Gradient => format!(
            "linear-gradient({}, {}, {})",
            settings.gradient.direction, settings.gradient.from, settings.gradient.to
        ),
    }
}

/// `background-image` and `background-size` declarations for the canvas
/// pattern, or an empty string when there is none
pub fn pattern_css(settings: &GlobalSettings) -> String {
    let color = hex_to_rgba(&settings.pattern_color, settings.pattern_opacity);

    match settings.pattern {
        PatternKind::None => String::new(),
        PatternKind::Grid => format!(
            "background-image: linear-gradient({c} 1px, transparent 1px), linear-gradient(90deg, {c} 1px, transparent 1px); background-size: 20px 20px;",
            c = color
        ),
        PatternKind::Dots => format!(
            "background-image: radial-gradient({c} 1.5px, transparent 1.5px); background-size: 16px 16px;",
            c = color
        ),
        PatternKind::Lines => format!(
            "background-image: repeating-linear-gradient(45deg, {c} 0, {c} 1px, transparent 0, transparent 50%); background-size: 12px 12px;",
            c = color
        ),
        PatternKind::Checker => format!(
            "background-image: conic-gradient({c} 90deg, transparent 90deg 180deg, {c} 180deg 270deg, transparent 270deg); background-size: 24px 24px;",
            c = color
        ),
    }
}
