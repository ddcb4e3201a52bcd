//! # Style Presets
//!
//! Named partial style bundles. Applying one overwrites the keys it defines,
//! except `backgroundColor`, `align` and `padding`, which always keep the
//! block's current values.

use crate::block::{Block, BlockType};
use crate::fields::{FieldError, Section};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Style keys a preset may never change
pub const PROTECTED_STYLE_KEYS: [&str; 3] = ["backgroundColor", "align", "padding"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub block_type: BlockType,
    pub styles: Map<String, Value>,
}

impl Preset {
    fn new(id: &str, name: &str, block_type: BlockType, styles: Value) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            block_type,
            styles: match styles {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }
}

/// Shallow-merge `preset` over `current`, then put back the protected keys
/// from `current`. A protected key missing from `current` is removed rather
/// than taken from the preset.
pub fn merge_preset(current: &Map<String, Value>, preset: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = current.clone();
    for (key, value) in preset {
        merged.insert(key.clone(), value.clone());
    }

    for key in PROTECTED_STYLE_KEYS {
        match current.get(key) {
            Some(value) => {
                merged.insert(key.to_string(), value.clone());
            }
            None => {
                merged.remove(key);
            }
        }
    }

    merged
}

impl Block {
    /// Apply a preset's styles. Keys the block's style record does not have
    /// are dropped on read-back.
    pub fn apply_preset(&mut self, preset: &Map<String, Value>) -> Result<(), FieldError> {
        self.edit_section(Section::Styles, |styles| {
            *styles = merge_preset(styles, preset);
            Ok(())
        })
    }
}

pub fn button_presets() -> Vec<Preset> {
    vec![
        Preset::new(
            "primary",
            "اصلی",
            BlockType::Button,
            json!({
                "buttonColor": "#2563eb",
                "textColor": "#ffffff",
                "borderRadius": 8,
                "buttonGradient": { "enabled": false, "from": "#2563eb", "to": "#7c3aed", "direction": "to right" },
                "border": { "enabled": false, "color": "#2563eb", "width": 1, "style": "solid" },
                "dropShadow": { "enabled": false, "color": "#000000", "blur": 10, "x": 0, "y": 4, "opacity": 0.2 }
            }),
        ),
        Preset::new(
            "outline",
            "دورخط",
            BlockType::Button,
            json!({
                "buttonColor": "transparent",
                "textColor": "#2563eb",
                "borderRadius": 8,
                "buttonGradient": { "enabled": false, "from": "#2563eb", "to": "#7c3aed", "direction": "to right" },
                "border": { "enabled": true, "color": "#2563eb", "width": 2, "style": "solid" },
                "dropShadow": { "enabled": false, "color": "#000000", "blur": 10, "x": 0, "y": 4, "opacity": 0.2 }
            }),
        ),
        Preset::new(
            "pill",
            "کپسولی",
            BlockType::Button,
            json!({
                "buttonColor": "#10b981",
                "textColor": "#ffffff",
                "borderRadius": 999,
                "buttonPadding": "12px 40px"
            }),
        ),
        Preset::new(
            "sunset",
            "گرادیان غروب",
            BlockType::Button,
            json!({
                "textColor": "#ffffff",
                "borderRadius": 12,
                "buttonGradient": { "enabled": true, "from": "#f97316", "to": "#db2777", "direction": "to right" },
                "dropShadow": { "enabled": true, "color": "#db2777", "blur": 16, "x": 0, "y": 6, "opacity": 0.35 },
                "backgroundColor": "#fff7ed"
            }),
        ),
        Preset::new(
            "dark",
            "تیره",
            BlockType::Button,
            json!({
                "buttonColor": "#111827",
                "textColor": "#f9fafb",
                "borderRadius": 4,
                "fontWeight": "600",
                "buttonGradient": { "enabled": false, "from": "#111827", "to": "#374151", "direction": "to bottom" },
                "padding": "0px",
                "align": "left"
            }),
        ),
    ]
}

pub fn countdown_presets() -> Vec<Preset> {
    vec![
        Preset::new(
            "classic",
            "کلاسیک",
            BlockType::Countdown,
            json!({
                "boxColor": "#1f2937",
                "textColor": "#ffffff",
                "labelColor": "#6b7280",
                "borderRadius": 8,
                "boxSize": 64
            }),
        ),
        Preset::new(
            "minimal",
            "مینیمال",
            BlockType::Countdown,
            json!({
                "boxColor": "transparent",
                "textColor": "#111827",
                "labelColor": "#9ca3af",
                "borderRadius": 0,
                "border": { "enabled": true, "color": "#e5e7eb", "width": 1, "style": "solid" }
            }),
        ),
        Preset::new(
            "vibrant",
            "پرانرژی",
            BlockType::Countdown,
            json!({
                "boxColor": "#dc2626",
                "textColor": "#ffffff",
                "labelColor": "#dc2626",
                "borderRadius": 999,
                "boxSize": 72,
                "dropShadow": { "enabled": true, "color": "#dc2626", "blur": 12, "x": 0, "y": 4, "opacity": 0.3 }
            }),
        ),
        Preset::new(
            "midnight",
            "نیمه‌شب",
            BlockType::Countdown,
            json!({
                "boxColor": "#312e81",
                "textColor": "#e0e7ff",
                "labelColor": "#a5b4fc",
                "borderRadius": 12,
                "backgroundColor": "#1e1b4b"
            }),
        ),
    ]
}

/// Every built-in preset for `block_type`
pub fn presets_for(block_type: BlockType) -> Vec<Preset> {
    match block_type {
        BlockType::Button => button_presets(),
        BlockType::Countdown => countdown_presets(),
        _ => Vec::new(),
    }
}
