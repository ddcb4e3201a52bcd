//! Canvas-level settings shared by every block of a template.
//!
//! Both `background_color` and `gradient` are always kept, whichever one
//! `background_type` activates, so toggling between them loses nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    #[default]
    Solid,
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    None,
    Grid,
    Dots,
    Lines,
    Checker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gradient {
    pub from: String,
    pub to: String,
    pub direction: String,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            from: "#667eea".to_string(),
            to: "#764ba2".to_string(),
            direction: "to bottom".to_string(),
        }
    }
}

/// Film-grain overlay drawn above the whole canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Noise {
    pub enabled: bool,
    /// Overlay opacity, 0..1
    pub amount: f64,
    /// Turbulence base frequency
    pub scale: f64,
    pub blend_mode: String,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: 0.15,
            scale: 0.8,
            blend_mode: "overlay".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    /// Max width of the email container, e.g. `600px`
    pub width: String,
    pub background_type: BackgroundType,
    pub background_color: String,
    pub gradient: Gradient,
    pub pattern: PatternKind,
    pub pattern_opacity: f64,
    pub pattern_color: String,
    pub noise: Noise,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            width: "600px".to_string(),
            background_type: BackgroundType::Solid,
            background_color: "#f3f4f6".to_string(),
            gradient: Gradient::default(),
            pattern: PatternKind::None,
            pattern_opacity: 0.1,
            pattern_color: "#000000".to_string(),
            noise: Noise::default(),
        }
    }
}
