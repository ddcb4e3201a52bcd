//! # Untrusted Block Input
//!
//! Blocks arriving from outside the editor (a generation service, a stored
//! collection written by an older build) are never rendered raw. Each
//! record is overlaid onto its type's default template and read back into
//! the typed model; records that still do not fit are skipped so one bad
//! block cannot take down the rest of the list.

use crate::block::{Block, BlockBody, BlockId, BlockType, UnknownBlockType};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error(transparent)]
    UnknownType(#[from] UnknownBlockType),

    #[error("Invalid {block_type} block: {message}")]
    InvalidBlock { block_type: BlockType, message: String },
}

/// Build a block of `block_type` from loosely shaped `content` and `styles`.
/// Missing fields come from the default template; non-object sections are
/// ignored. The block gets a fresh id.
pub fn normalize_block(
    block_type: &str,
    content: &Value,
    styles: &Value,
) -> Result<Block, NormalizeError> {
    let block_type: BlockType = block_type.parse()?;

    let defaults = serde_json::to_value(BlockBody::default_for(block_type)).map_err(|e| {
        NormalizeError::InvalidBlock {
            block_type,
            message: e.to_string(),
        }
    })?;

    let mut body = match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for (key, patch) in [("content", content), ("styles", styles)] {
        if let (Some(Value::Object(base)), Value::Object(patch)) = (body.get_mut(key), patch) {
            overlay(base, patch);
        }
    }

    let body: BlockBody =
        serde_json::from_value(Value::Object(body)).map_err(|e| NormalizeError::InvalidBlock {
            block_type,
            message: e.to_string(),
        })?;

    Ok(Block {
        id: BlockId::generate(),
        body,
    })
}

/// Recursive merge: objects merge key by key, everything else replaces
fn overlay(base: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        if let (Some(Value::Object(inner)), Value::Object(nested)) = (base.get_mut(key), value) {
            overlay(inner, nested);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}

/// Read each element as a block, skipping the ones that do not parse
pub fn blocks_from_values(values: Vec<Value>) -> Vec<Block> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Block>(value) {
            Ok(block) => Some(block),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable block");
                None
            }
        })
        .collect()
}

/// `deserialize_with` adapter for block lists that must survive bad entries
pub fn deserialize_blocks_lenient<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(blocks_from_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::ButtonStyles;
    use serde_json::json;

    #[test]
    fn test_normalize_fills_gaps_from_defaults() {
        let block = normalize_block(
            "button",
            &json!({ "text": "ثبت‌نام" }),
            &json!({ "buttonColor": "#16a34a", "border": { "enabled": true } }),
        )
        .unwrap();

        match block.body {
            BlockBody::Button { content, styles } => {
                assert_eq!(content.text, "ثبت‌نام");
                assert_eq!(content.link, "https://example.com");
                assert_eq!(styles.button_color, "#16a34a");
                assert!(styles.border.enabled);
                assert_eq!(styles.border.width, ButtonStyles::default().border.width);
            }
            other => panic!("Expected button, got {:?}", other.block_type()),
        }
    }

    #[test]
    fn test_normalize_rejects_unknown_type() {
        let result = normalize_block("carousel", &json!({}), &json!({}));
        assert!(matches!(result, Err(NormalizeError::UnknownType(_))));
    }

    #[test]
    fn test_normalize_rejects_badly_typed_fields() {
        let result = normalize_block("spacer", &json!({}), &json!({ "height": "tall" }));
        assert!(matches!(result, Err(NormalizeError::InvalidBlock { .. })));
    }

    #[test]
    fn test_normalize_ignores_foreign_fields() {
        let block = normalize_block("spacer", &json!({ "columns": 4 }), &json!(null)).unwrap();
        assert_eq!(block.block_type(), BlockType::Spacer);
    }

    #[test]
    fn test_blocks_from_values_skips_bad_entries() {
        let values = vec![
            json!({ "id": "a", "type": "text" }),
            json!({ "id": "b", "type": "marquee" }),
            json!({ "id": "c", "type": "spacer" }),
        ];

        let blocks = blocks_from_values(values);

        let ids: Vec<&str> = blocks.iter().map(|block| block.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
