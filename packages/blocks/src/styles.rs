//! # Block Styles
//!
//! Visual properties for every block type. Shared effect records (border,
//! drop shadow, text stroke, image filter) are reused across block types;
//! everything else is specific to one block.
//!
//! Every struct is `#[serde(default)]`, so a partially specified record
//! (an older save, an AI-generated block) is completed from the type's
//! default template when it is deserialized.

use serde::{Deserialize, Serialize};

/// Border around an element, emitted only when `enabled`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Border {
    pub enabled: bool,
    pub color: String,
    pub width: u32,
    pub style: String,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#e5e7eb".to_string(),
            width: 1,
            style: "solid".to_string(),
        }
    }
}

/// Shadow cast by an element (box-shadow, drop-shadow or text-shadow
/// depending on the block)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropShadow {
    pub enabled: bool,
    pub color: String,
    pub blur: u32,
    pub x: i32,
    pub y: i32,
    pub opacity: f64,
}

impl Default for DropShadow {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#000000".to_string(),
            blur: 10,
            x: 0,
            y: 4,
            opacity: 0.2,
        }
    }
}

/// Outline drawn around glyphs (`-webkit-text-stroke`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stroke {
    pub enabled: bool,
    pub color: String,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#000000".to_string(),
            width: 1.0,
        }
    }
}

/// Image adjustments, in percent (100 = unchanged)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
    pub brightness: u32,
    pub contrast: u32,
    pub saturate: u32,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            brightness: 100,
            contrast: 100,
            saturate: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderStyles {
    pub background_color: String,
    pub padding: String,
    pub align: String,
    pub width: String,
    pub height: String,
    pub object_fit: String,
    pub border_radius: u32,
    pub border: Border,
    pub drop_shadow: DropShadow,
    pub filter: Filter,
}

impl Default for HeaderStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            padding: "24px".to_string(),
            align: "center".to_string(),
            width: "180px".to_string(),
            height: "auto".to_string(),
            object_fit: "contain".to_string(),
            border_radius: 0,
            border: Border::default(),
            drop_shadow: DropShadow::default(),
            filter: Filter::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyles {
    pub background_color: String,
    pub color: String,
    pub padding: String,
    pub align: String,
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: String,
    pub line_height: f64,
    pub font_style: String,
    pub text_decoration: String,
    pub drop_shadow: DropShadow,
    pub stroke: Stroke,
}

impl Default for TextStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            color: "#1f2937".to_string(),
            padding: "16px 24px".to_string(),
            align: "right".to_string(),
            font_family: "Vazirmatn".to_string(),
            font_size: 16,
            font_weight: "400".to_string(),
            line_height: 1.8,
            font_style: "normal".to_string(),
            text_decoration: "none".to_string(),
            drop_shadow: DropShadow::default(),
            stroke: Stroke::default(),
        }
    }
}

/// Two-stop gradient fill for buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonGradient {
    pub enabled: bool,
    pub from: String,
    pub to: String,
    /// `"to right"` renders horizontally, anything else vertically
    pub direction: String,
}

impl Default for ButtonGradient {
    fn default() -> Self {
        Self {
            enabled: false,
            from: "#2563eb".to_string(),
            to: "#7c3aed".to_string(),
            direction: "to right".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyles {
    /// Row background behind the button
    pub background_color: String,
    pub padding: String,
    pub align: String,
    /// Fill of the button itself
    pub button_color: String,
    pub text_color: String,
    pub button_padding: String,
    pub border_radius: u32,
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: String,
    pub width: String,
    pub button_gradient: ButtonGradient,
    pub border: Border,
    pub drop_shadow: DropShadow,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            padding: "16px 24px".to_string(),
            align: "center".to_string(),
            button_color: "#2563eb".to_string(),
            text_color: "#ffffff".to_string(),
            button_padding: "12px 32px".to_string(),
            border_radius: 8,
            font_family: "Vazirmatn".to_string(),
            font_size: 16,
            font_weight: "700".to_string(),
            width: "auto".to_string(),
            button_gradient: ButtonGradient::default(),
            border: Border::default(),
            drop_shadow: DropShadow::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageStyles {
    pub background_color: String,
    pub padding: String,
    pub align: String,
    pub width: String,
    pub height: String,
    pub object_fit: String,
    pub border_radius: u32,
    pub border: Border,
    pub drop_shadow: DropShadow,
    pub filter: Filter,
}

impl Default for ImageStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            padding: "0px".to_string(),
            align: "center".to_string(),
            width: "100%".to_string(),
            height: "auto".to_string(),
            object_fit: "cover".to_string(),
            border_radius: 0,
            border: Border::default(),
            drop_shadow: DropShadow::default(),
            filter: Filter::default(),
        }
    }
}

/// Wrapper around each product-grid item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardStyles {
    pub background_color: String,
    pub padding: u32,
    pub border_radius: u32,
    pub border: Border,
    pub drop_shadow: DropShadow,
}

impl Default for CardStyles {
    fn default() -> Self {
        Self {
            background_color: "#f9fafb".to_string(),
            padding: 12,
            border_radius: 8,
            border: Border::default(),
            drop_shadow: DropShadow::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridImageStyles {
    pub aspect_ratio: String,
    pub object_fit: String,
    pub border_radius: u32,
    pub filter: Filter,
    pub border: Border,
    pub drop_shadow: DropShadow,
}

impl Default for GridImageStyles {
    fn default() -> Self {
        Self {
            aspect_ratio: "1 / 1".to_string(),
            object_fit: "cover".to_string(),
            border_radius: 6,
            filter: Filter::default(),
            border: Border::default(),
            drop_shadow: DropShadow::default(),
        }
    }
}

/// Caption under each product-grid image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridTextStyles {
    pub show: bool,
    pub color: String,
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: String,
    pub align: String,
    pub line_height: f64,
}

impl Default for GridTextStyles {
    fn default() -> Self {
        Self {
            show: true,
            color: "#111827".to_string(),
            font_family: "Vazirmatn".to_string(),
            font_size: 14,
            font_weight: "500".to_string(),
            align: "center".to_string(),
            line_height: 1.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductGridStyles {
    pub background_color: String,
    pub padding: String,
    pub gap: u32,
    pub card: CardStyles,
    pub image: GridImageStyles,
    pub text: GridTextStyles,
}

impl Default for ProductGridStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            padding: "16px".to_string(),
            gap: 12,
            card: CardStyles::default(),
            image: GridImageStyles::default(),
            text: GridTextStyles::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownStyles {
    pub background_color: String,
    pub padding: String,
    pub align: String,
    pub box_color: String,
    pub text_color: String,
    pub label_color: String,
    pub box_size: u32,
    pub gap: u32,
    pub border_radius: u32,
    pub font_family: String,
    pub font_size: u32,
    pub label_size: u32,
    pub border: Border,
    pub drop_shadow: DropShadow,
}

impl Default for CountdownStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            padding: "24px".to_string(),
            align: "center".to_string(),
            box_color: "#1f2937".to_string(),
            text_color: "#ffffff".to_string(),
            label_color: "#6b7280".to_string(),
            box_size: 64,
            gap: 12,
            border_radius: 8,
            font_family: "Vazirmatn".to_string(),
            font_size: 24,
            label_size: 12,
            border: Border::default(),
            drop_shadow: DropShadow::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterStyles {
    pub background_color: String,
    pub color: String,
    pub link_color: String,
    pub padding: String,
    pub align: String,
    pub font_family: String,
    pub font_size: u32,
    pub line_height: f64,
}

impl Default for FooterStyles {
    fn default() -> Self {
        Self {
            background_color: "#f3f4f6".to_string(),
            color: "#6b7280".to_string(),
            link_color: "#2563eb".to_string(),
            padding: "24px".to_string(),
            align: "center".to_string(),
            font_family: "Vazirmatn".to_string(),
            font_size: 12,
            line_height: 1.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerStyles {
    pub background_color: String,
    pub height: u32,
}

impl Default for SpacerStyles {
    fn default() -> Self {
        Self {
            background_color: "transparent".to_string(),
            height: 32,
        }
    }
}
