//! Reading templates from JSON files.
//!
//! Three shapes are accepted: a stored template (`name`, `blocks`,
//! `settings`), a bare document (`blocks`, `settings`), or a bare block array.

use anyhow::{anyhow, Result};
use mailcraft_blocks::{blocks_from_values, Block, GlobalSettings};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TemplateSource {
    pub name: String,
    pub blocks: Vec<Block>,
    /// Canvas settings, when the file carries them
    pub settings: Option<GlobalSettings>,
}

pub fn read_template(path: &Path) -> Result<TemplateSource> {
    let source = fs::read_to_string(path)?;
    let fallback = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("template");

    parse_template(&source, fallback)
}

pub fn parse_template(source: &str, fallback_name: &str) -> Result<TemplateSource> {
    match serde_json::from_str::<Value>(source)? {
        Value::Array(items) => Ok(TemplateSource {
            name: fallback_name.to_string(),
            blocks: blocks_from_values(items),
            settings: None,
        }),
        Value::Object(mut map) => {
            let blocks = match map.remove("blocks") {
                Some(Value::Array(items)) => blocks_from_values(items),
                _ => return Err(anyhow!("Template has no \"blocks\" array")),
            };
            let settings = map
                .remove("settings")
                .map(serde_json::from_value::<GlobalSettings>)
                .transpose()?;
            let name = map
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(fallback_name)
                .to_string();

            Ok(TemplateSource {
                name,
                blocks,
                settings,
            })
        }
        _ => Err(anyhow!("Expected a template object or a block array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_blocks::BlockType;

    #[test]
    fn test_block_array() {
        let template = parse_template(
            r#"[{ "id": "a", "type": "header" }, { "id": "b", "type": "footer" }]"#,
            "welcome",
        )
        .unwrap();

        assert_eq!(template.name, "welcome");
        assert_eq!(template.blocks.len(), 2);
        assert!(template.settings.is_none());
    }

    #[test]
    fn test_stored_template() {
        let template = parse_template(
            r#"{
                "id": "t1",
                "name": "حراج",
                "date": "2026-01-01T00:00:00Z",
                "blocks": [{ "id": "a", "type": "countdown" }, { "id": "b", "type": "blink" }],
                "settings": { "width": "700px" }
            }"#,
            "fallback",
        )
        .unwrap();

        assert_eq!(template.name, "حراج");
        assert_eq!(template.blocks.len(), 1);
        assert_eq!(template.blocks[0].block_type(), BlockType::Countdown);
        assert_eq!(template.settings.unwrap().width, "700px");
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(parse_template(r#"{ "name": "x" }"#, "x").is_err());
        assert!(parse_template("42", "x").is_err());
        assert!(parse_template("{", "x").is_err());
    }

    #[test]
    fn test_read_uses_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spring-sale.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(read_template(&path).unwrap().name, "spring-sale");
    }
}
