//! # Mailcraft CSS helpers
//!
//! Pure functions that turn style records into inline-safe CSS: colors,
//! canvas backgrounds and patterns, effect values and `@font-face` rules.
//! Output is deterministic; malformed colors and URLs pass through as-is.

pub mod background;
pub mod color;
pub mod declarations;
pub mod effects;
pub mod fonts;
pub mod number;

pub use background::{background_css, pattern_css};
pub use color::hex_to_rgba;
pub use declarations::Declarations;
pub use effects::{border, box_shadow, drop_shadow, filter_value, text_shadow, text_stroke};
pub use fonts::{font_face_css, font_face_css_for};
pub use number::format_number;
