//! Save/load cycles through the file store must not change compiled output

use chrono::{TimeZone, Utc};
use mailcraft_blocks::{BlockType, GlobalSettings, PatternKind};
use mailcraft_compiler_html::{compile_to_html, CompileOptions};
use mailcraft_editor::{Mutation, TemplateDocument};
use mailcraft_workspace::{JsonFileStore, SavedTemplate, TemplateLibrary, TemplateStore};
use serde_json::json;

fn options() -> CompileOptions {
    CompileOptions {
        now: Some(Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()),
        ..CompileOptions::default()
    }
}

/// A template that touches every block type and a few nested styles
fn edited_document() -> TemplateDocument {
    let mut doc = TemplateDocument::new();
    for block_type in BlockType::ALL {
        doc.apply(Mutation::AddBlock {
            block_type,
            index: None,
        });
    }

    let ids: Vec<_> = doc.blocks.iter().map(|block| block.id.clone()).collect();
    doc.apply_all(vec![
        Mutation::UpdateContent {
            block_id: ids[1].clone(),
            field: "text".to_string(),
            value: json!("سلام\nبه خبرنامه ما خوش آمدید & <خوش باشید>"),
        },
        Mutation::UpdateNestedStyle {
            block_id: ids[2].clone(),
            category: "buttonGradient".to_string(),
            field: "enabled".to_string(),
            value: json!(true),
        },
        Mutation::UpdateNestedStyle {
            block_id: ids[3].clone(),
            category: "filter".to_string(),
            field: "brightness".to_string(),
            value: json!(115),
        },
        Mutation::SetGridColumns {
            block_id: ids[4].clone(),
            columns: 3,
        },
        Mutation::UpdateStyle {
            block_id: ids[5].clone(),
            field: "boxSize".to_string(),
            value: json!(72),
        },
        Mutation::UpdateNestedSetting {
            category: "noise".to_string(),
            field: "amount".to_string(),
            value: json!(0.27),
        },
    ]);
    doc.settings.pattern = PatternKind::Checker;
    doc
}

#[test]
fn test_compile_is_stable_across_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("templates.json"));
    let doc = edited_document();
    let before = compile_to_html(&doc.blocks, &doc.settings, &options());

    let template = SavedTemplate::new("همه بلوک‌ها", doc.blocks.clone(), doc.settings.clone());
    store.save(&[template.clone()]).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, vec![template]);
    let after = compile_to_html(&loaded[0].blocks, &loaded[0].settings, &options());
    assert_eq!(after, before);
}

#[test]
fn test_library_over_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");

    let template = SavedTemplate::new("کمپین پاییز", edited_document().blocks, GlobalSettings::default());
    TemplateLibrary::new(JsonFileStore::new(&path))
        .upsert(template.clone())
        .unwrap();

    let reopened = TemplateLibrary::new(JsonFileStore::new(&path));
    let found = reopened.find("کمپین پاییز").unwrap().unwrap();

    assert_eq!(found.id, template.id);
    assert_eq!(found.blocks, template.blocks);
}

#[test]
fn test_stored_form_is_the_block_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");
    let store = JsonFileStore::new(&path);
    let doc = edited_document();

    store
        .save(&[SavedTemplate::new("x", doc.blocks.clone(), doc.settings.clone())])
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let stored_blocks = raw[0]["blocks"].clone();
    assert_eq!(stored_blocks, serde_json::to_value(&doc.blocks).unwrap());
    assert_eq!(stored_blocks[4]["type"], "product-grid");
}
