//! # Field Editing
//!
//! Name-addressed edits on strongly typed records. A record is viewed as its
//! JSON object, the one addressed field is replaced, and the result is read
//! back into the typed record. Read-back fails (and nothing changes) when
//! the field does not exist on that record or the value has the wrong shape,
//! so an edit can never leave a block holding another type's fields.

use crate::block::{Block, BlockBody};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field is not an object: {0}")]
    NotAnObject(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Run `edit` against the JSON object form of `target` and write the result
/// back. `target` is untouched unless every step succeeds.
pub fn edit_object<T, F>(target: &mut T, label: &str, edit: F) -> Result<(), FieldError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(&mut Map<String, Value>) -> Result<(), FieldError>,
{
    let mut value = serde_json::to_value(&*target).map_err(|e| FieldError::InvalidValue {
        field: label.to_string(),
        message: e.to_string(),
    })?;

    let map = value
        .as_object_mut()
        .ok_or_else(|| FieldError::NotAnObject(label.to_string()))?;
    edit(map)?;

    *target = serde_json::from_value(value).map_err(|e| FieldError::InvalidValue {
        field: label.to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Replace one top-level field
pub fn set_field<T>(target: &mut T, field: &str, value: Value) -> Result<(), FieldError>
where
    T: Serialize + DeserializeOwned,
{
    edit_object(target, field, |map| replace_existing(map, field, value))
}

/// Replace one field inside a named sub-object, leaving its siblings alone
pub fn set_nested_field<T>(
    target: &mut T,
    category: &str,
    field: &str,
    value: Value,
) -> Result<(), FieldError>
where
    T: Serialize + DeserializeOwned,
{
    let label = format!("{}.{}", category, field);
    edit_object(target, &label, |map| {
        let inner = map
            .get_mut(category)
            .ok_or_else(|| FieldError::UnknownField(category.to_string()))?
            .as_object_mut()
            .ok_or_else(|| FieldError::NotAnObject(category.to_string()))?;
        replace_existing(inner, field, value)
    })
}

fn replace_existing(
    map: &mut Map<String, Value>,
    field: &str,
    value: Value,
) -> Result<(), FieldError> {
    match map.get_mut(field) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(FieldError::UnknownField(field.to_string())),
    }
}

/// A block's `content` or `styles` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Content,
    Styles,
}

impl Section {
    fn key(&self) -> &'static str {
        match self {
            Section::Content => "content",
            Section::Styles => "styles",
        }
    }
}

impl Block {
    pub fn set_content_field(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        self.edit_section(Section::Content, |map| replace_existing(map, field, value))
    }

    pub fn set_style_field(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        self.edit_section(Section::Styles, |map| replace_existing(map, field, value))
    }

    pub fn set_nested_style_field(
        &mut self,
        category: &str,
        field: &str,
        value: Value,
    ) -> Result<(), FieldError> {
        self.edit_section(Section::Styles, |map| {
            let inner = map
                .get_mut(category)
                .ok_or_else(|| FieldError::UnknownField(category.to_string()))?
                .as_object_mut()
                .ok_or_else(|| FieldError::NotAnObject(category.to_string()))?;
            replace_existing(inner, field, value)
        })
    }

    /// Edit one section as a JSON object. The block's type tag is outside
    /// the section, so the variant can never change.
    pub fn edit_section<F>(&mut self, section: Section, edit: F) -> Result<(), FieldError>
    where
        F: FnOnce(&mut Map<String, Value>) -> Result<(), FieldError>,
    {
        let key = section.key();
        edit_object::<BlockBody, _>(&mut self.body, key, |body| {
            let map = body
                .get_mut(key)
                .and_then(Value::as_object_mut)
                .ok_or_else(|| FieldError::NotAnObject(key.to_string()))?;
            edit(map)
        })
    }

    /// JSON object view of one section
    pub fn section_value(&self, section: Section) -> Map<String, Value> {
        serde_json::to_value(&self.body)
            .ok()
            .and_then(|mut body| body.get_mut(section.key()).map(Value::take))
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockType;
    use crate::settings::GlobalSettings;
    use serde_json::json;

    #[test]
    fn test_set_content_field() {
        let mut block = Block::new(BlockType::Button);
        block.set_content_field("text", json!("خرید")).unwrap();

        assert_eq!(block.section_value(Section::Content)["text"], "خرید");
        assert_eq!(
            block.section_value(Section::Content)["link"],
            "https://example.com"
        );
    }

    #[test]
    fn test_unknown_field_is_rejected_without_change() {
        let mut block = Block::new(BlockType::Spacer);
        let before = block.clone();

        let result = block.set_style_field("columns", json!(3));

        assert_eq!(result, Err(FieldError::UnknownField("columns".to_string())));
        assert_eq!(block, before);
    }

    #[test]
    fn test_wrong_type_is_rejected_without_change() {
        let mut block = Block::new(BlockType::Text);
        let before = block.clone();

        let result = block.set_style_field("fontSize", json!("huge"));

        assert!(matches!(result, Err(FieldError::InvalidValue { .. })));
        assert_eq!(block, before);
    }

    #[test]
    fn test_nested_style_touches_one_field() {
        let mut block = Block::new(BlockType::Image);
        block
            .set_nested_style_field("dropShadow", "enabled", json!(true))
            .unwrap();

        let styles = block.section_value(Section::Styles);
        assert_eq!(styles["dropShadow"]["enabled"], true);
        assert_eq!(styles["dropShadow"]["blur"], 10);
        assert_eq!(styles["filter"]["brightness"], 100);
    }

    #[test]
    fn test_nested_on_scalar_is_rejected() {
        let mut block = Block::new(BlockType::Image);
        let result = block.set_nested_style_field("padding", "top", json!("1px"));
        assert_eq!(result, Err(FieldError::NotAnObject("padding".to_string())));
    }

    #[test]
    fn test_settings_fields() {
        let mut settings = GlobalSettings::default();
        set_field(&mut settings, "backgroundType", json!("gradient")).unwrap();
        set_nested_field(&mut settings, "gradient", "from", json!("#000000")).unwrap();

        assert_eq!(settings.gradient.from, "#000000");
        assert_eq!(settings.gradient.to, "#764ba2");
        assert_eq!(settings.background_color, "#f3f4f6");
    }
}
