//! # Mailcraft Blocks
//!
//! Data model for email templates: eight block types, each with a typed
//! `content` and `styles` record, plus the canvas-level `GlobalSettings`.
//!
//! ## Contents
//!
//! - `block`: `Block`, `BlockBody` (one variant per type) and default templates
//! - `content` / `styles`: per-type records
//! - `settings`: canvas width, background, pattern and noise
//! - `fields`: name-addressed edits that keep the typed shape intact
//! - `presets`: named style bundles and the protected-key merge
//! - `normalize`: defaulting of untrusted block records
//! - `fonts`, `icons`, `patterns`: static registries used by the compiler
//!
//! ## Usage
//!
//! ```rust
//! use mailcraft_blocks::{Block, BlockType};
//! use serde_json::json;
//!
//! let mut button = Block::new(BlockType::Button);
//! button.set_content_field("text", json!("خرید کنید")).unwrap();
//! ```

pub mod block;
pub mod content;
pub mod fields;
pub mod fonts;
pub mod icons;
pub mod normalize;
pub mod patterns;
pub mod presets;
pub mod settings;
pub mod styles;

pub use block::{Block, BlockBody, BlockId, BlockType, UnknownBlockType};
pub use content::*;
pub use fields::{edit_object, set_field, set_nested_field, FieldError, Section};
pub use fonts::{find_font, FontFace, FontFamily, DEFAULT_FONT_FAMILY, FONT_FAMILIES};
pub use icons::icon_path;
pub use normalize::{
    blocks_from_values, deserialize_blocks_lenient, normalize_block, NormalizeError,
};
pub use patterns::{find_pattern, HeaderPattern, HEADER_PATTERNS};
pub use presets::{
    button_presets, countdown_presets, merge_preset, presets_for, Preset, PROTECTED_STYLE_KEYS,
};
pub use settings::{BackgroundType, GlobalSettings, Gradient, Noise, PatternKind};
pub use styles::*;
