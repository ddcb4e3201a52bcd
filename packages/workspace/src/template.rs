//! A named, dated template as it is stored.

use chrono::{DateTime, Utc};
use mailcraft_blocks::{deserialize_blocks_lenient, Block, GlobalSettings};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTemplate {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_blocks_lenient")]
    pub blocks: Vec<Block>,
    /// Last save time
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub settings: GlobalSettings,
}

impl SavedTemplate {
    pub fn new(name: impl Into<String>, blocks: Vec<Block>, settings: GlobalSettings) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            blocks,
            date: Utc::now(),
            settings,
        }
    }

    /// Same id and name with new contents, dated now
    pub fn revise(&self, blocks: Vec<Block>, settings: GlobalSettings) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            blocks,
            date: Utc::now(),
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_blocks::BlockType;
    use serde_json::json;

    #[test]
    fn test_new_templates_get_distinct_ids() {
        let a = SavedTemplate::new("a", Vec::new(), GlobalSettings::default());
        let b = SavedTemplate::new("a", Vec::new(), GlobalSettings::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_revise_keeps_identity() {
        let template = SavedTemplate::new("خبرنامه", Vec::new(), GlobalSettings::default());

        let revised = template.revise(vec![Block::new(BlockType::Text)], GlobalSettings::default());

        assert_eq!(revised.id, template.id);
        assert_eq!(revised.name, template.name);
        assert_eq!(revised.blocks.len(), 1);
        assert!(revised.date >= template.date);
    }

    #[test]
    fn test_older_records_without_settings() {
        let template: SavedTemplate = serde_json::from_value(json!({
            "id": "t1",
            "name": "قدیمی",
            "date": "2025-03-01T10:00:00Z",
            "blocks": [
                { "id": "a", "type": "header" },
                { "id": "b", "type": "slideshow" }
            ]
        }))
        .unwrap();

        assert_eq!(template.blocks.len(), 1);
        assert_eq!(template.settings, GlobalSettings::default());
    }
}
