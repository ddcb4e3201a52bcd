//! # Block Content
//!
//! Type-specific payloads: what a block says or shows, as opposed to how it
//! looks. An empty `link` means "not linked".

use serde::{Deserialize, Serialize};

/// Where a header's visual comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderSource {
    #[default]
    Url,
    /// Embedded data URI
    Upload,
    /// Generated fill from the header pattern registry
    Pattern,
}

/// Where an image block's picture comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Url,
    Upload,
}

/// Side of the label a button icon sits on, in visual (RTL) terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderContent {
    pub logo_url: String,
    pub pattern_id: String,
    pub alt: String,
    pub link: String,
    pub source_type: HeaderSource,
}

impl Default for HeaderContent {
    fn default() -> Self {
        Self {
            logo_url: "https://placehold.co/180x60?text=LOGO".to_string(),
            pattern_id: "waves".to_string(),
            alt: "لوگو".to_string(),
            link: String::new(),
            source_type: HeaderSource::Url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    pub text: String,
    pub link: String,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            text: "متن خود را اینجا بنویسید".to_string(),
            link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonContent {
    pub text: String,
    pub link: String,
    /// Name from the icon registry; empty for no icon
    pub icon: String,
    pub icon_position: IconPosition,
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            text: "مشاهده محصولات".to_string(),
            link: "https://example.com".to_string(),
            icon: String::new(),
            icon_position: IconPosition::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    pub image_url: String,
    pub alt: String,
    pub link: String,
    pub source_type: ImageSource,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            image_url: "https://placehold.co/600x300?text=Image".to_string(),
            alt: "تصویر".to_string(),
            link: String::new(),
            source_type: ImageSource::Url,
        }
    }
}

/// One cell of a product grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridItem {
    pub image_url: String,
    pub link: String,
    pub text: String,
    pub alt: String,
}

impl GridItem {
    /// Synthesized item for 1-based position `number`
    pub fn placeholder(number: usize) -> Self {
        Self {
            image_url: format!("https://placehold.co/300x300?text=Product+{}", number),
            link: "https://example.com".to_string(),
            text: format!("محصول {}", number),
            alt: format!("محصول {}", number),
        }
    }
}

impl Default for GridItem {
    fn default() -> Self {
        Self::placeholder(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductGridContent {
    pub columns: u32,
    pub items: Vec<GridItem>,
}

impl ProductGridContent {
    /// Resize `items` to `columns`, keeping existing items verbatim and
    /// numbering new placeholders by position. The count is clamped to 1.
    pub fn set_columns(&mut self, columns: u32) {
        let columns = columns.max(1);
        let target = columns as usize;

        if target < self.items.len() {
            self.items.truncate(target);
        } else {
            let start = self.items.len();
            self.items
                .extend((start..target).map(|index| GridItem::placeholder(index + 1)));
        }

        self.columns = columns;
    }
}

impl Default for ProductGridContent {
    fn default() -> Self {
        Self {
            columns: 2,
            items: vec![GridItem::placeholder(1), GridItem::placeholder(2)],
        }
    }
}

/// Unit captions under the four countdown boxes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownLabels {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Default for CountdownLabels {
    fn default() -> Self {
        Self {
            days: "روز".to_string(),
            hours: "ساعت".to_string(),
            minutes: "دقیقه".to_string(),
            seconds: "ثانیه".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountdownContent {
    /// `YYYY-MM-DD`
    pub target_date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub target_time: String,
    /// `UTC`, `Z` or a fixed offset such as `+03:30`
    pub timezone: String,
    pub labels: CountdownLabels,
}

impl Default for CountdownContent {
    fn default() -> Self {
        Self {
            target_date: "2026-12-31".to_string(),
            target_time: "23:59".to_string(),
            timezone: "+03:30".to_string(),
            labels: CountdownLabels::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub text: String,
    pub unsubscribe_text: String,
    pub unsubscribe_link: String,
    pub link: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            text: "© ۱۴۰۵ تمامی حقوق محفوظ است.".to_string(),
            unsubscribe_text: "لغو اشتراک".to_string(),
            unsubscribe_link: "#unsubscribe".to_string(),
            link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerContent {
    pub link: String,
}
