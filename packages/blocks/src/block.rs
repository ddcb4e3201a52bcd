//! # Blocks
//!
//! A block is one structural unit of an email template. Its `content` and
//! `styles` shapes are fixed by its type: `BlockBody` has one variant per
//! type, each carrying only that type's records.
//!
//! Serialized form (shared with saved templates and generated input):
//!
//! ```json
//! { "id": "…", "type": "product-grid", "content": { … }, "styles": { … } }
//! ```

use crate::content::*;
use crate::styles::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque block identifier, unique for the lifetime of a block
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Header,
    Text,
    Button,
    Image,
    ProductGrid,
    Countdown,
    Footer,
    Spacer,
}

impl BlockType {
    pub const ALL: [BlockType; 8] = [
        BlockType::Header,
        BlockType::Text,
        BlockType::Button,
        BlockType::Image,
        BlockType::ProductGrid,
        BlockType::Countdown,
        BlockType::Footer,
        BlockType::Spacer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Text => "text",
            BlockType::Button => "button",
            BlockType::Image => "image",
            BlockType::ProductGrid => "product-grid",
            BlockType::Countdown => "countdown",
            BlockType::Footer => "footer",
            BlockType::Spacer => "spacer",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|block_type| block_type.as_str() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// Type-tagged content and styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockBody {
    Header {
        #[serde(default)]
        content: HeaderContent,
        #[serde(default)]
        styles: HeaderStyles,
    },
    Text {
        #[serde(default)]
        content: TextContent,
        #[serde(default)]
        styles: TextStyles,
    },
    Button {
        #[serde(default)]
        content: ButtonContent,
        #[serde(default)]
        styles: ButtonStyles,
    },
    Image {
        #[serde(default)]
        content: ImageContent,
        #[serde(default)]
        styles: ImageStyles,
    },
    ProductGrid {
        #[serde(default)]
        content: ProductGridContent,
        #[serde(default)]
        styles: ProductGridStyles,
    },
    Countdown {
        #[serde(default)]
        content: CountdownContent,
        #[serde(default)]
        styles: CountdownStyles,
    },
    Footer {
        #[serde(default)]
        content: FooterContent,
        #[serde(default)]
        styles: FooterStyles,
    },
    Spacer {
        #[serde(default)]
        content: SpacerContent,
        #[serde(default)]
        styles: SpacerStyles,
    },
}

impl BlockBody {
    /// Default template for a block type. Each call builds fresh values, so
    /// two blocks never share their defaults.
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Header => BlockBody::Header {
                content: HeaderContent::default(),
                styles: HeaderStyles::default(),
            },
            BlockType::Text => BlockBody::Text {
                content: TextContent::default(),
                styles: TextStyles::default(),
            },
            BlockType::Button => BlockBody::Button {
                content: ButtonContent::default(),
                styles: ButtonStyles::default(),
            },
            BlockType::Image => BlockBody::Image {
                content: ImageContent::default(),
                styles: ImageStyles::default(),
            },
            BlockType::ProductGrid => BlockBody::ProductGrid {
                content: ProductGridContent::default(),
                styles: ProductGridStyles::default(),
            },
            BlockType::Countdown => BlockBody::Countdown {
                content: CountdownContent::default(),
                styles: CountdownStyles::default(),
            },
            BlockType::Footer => BlockBody::Footer {
                content: FooterContent::default(),
                styles: FooterStyles::default(),
            },
            BlockType::Spacer => BlockBody::Spacer {
                content: SpacerContent::default(),
                styles: SpacerStyles::default(),
            },
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockBody::Header { .. } => BlockType::Header,
            BlockBody::Text { .. } => BlockType::Text,
            BlockBody::Button { .. } => BlockType::Button,
            BlockBody::Image { .. } => BlockType::Image,
            BlockBody::ProductGrid { .. } => BlockType::ProductGrid,
            BlockBody::Countdown { .. } => BlockType::Countdown,
            BlockBody::Footer { .. } => BlockType::Footer,
            BlockBody::Spacer { .. } => BlockType::Spacer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    /// New block of `block_type` built from its default template
    pub fn new(block_type: BlockType) -> Self {
        Self::with_id(BlockId::generate(), block_type)
    }

    pub fn with_id(id: BlockId, block_type: BlockType) -> Self {
        Self {
            id,
            body: BlockBody::default_for(block_type),
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.body.block_type()
    }

    /// Deep copy carrying a fresh id
    pub fn duplicate(&self) -> Self {
        Self {
            id: BlockId::generate(),
            body: self.body.clone(),
        }
    }
}
