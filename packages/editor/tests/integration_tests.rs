//! Integration tests for editor crate

use chrono::{TimeZone, Utc};
use mailcraft_blocks::{BlockType, GlobalSettings};
use mailcraft_compiler_html::{compile_to_html, CompileOptions};
use mailcraft_editor::{EditSession, Mutation, MutationResult, TemplateDocument};
use serde_json::json;

fn options() -> CompileOptions {
    CompileOptions {
        now: Some(Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()),
        ..CompileOptions::default()
    }
}

#[test]
fn test_document_lifecycle() -> anyhow::Result<()> {
    let mut doc = TemplateDocument::new();
    assert_eq!(doc.version, 0);

    let header = doc.apply(Mutation::AddBlock {
        block_type: BlockType::Header,
        index: None,
    });
    let button = doc.apply(Mutation::AddBlock {
        block_type: BlockType::Button,
        index: None,
    });
    let button_id = button.block_id.clone().unwrap();

    doc.apply(Mutation::UpdateContent {
        block_id: button_id.clone(),
        field: "text".to_string(),
        value: json!("خرید کنید"),
    });
    doc.apply(Mutation::UpdateContent {
        block_id: button_id,
        field: "link".to_string(),
        value: json!("https://x.com"),
    });

    assert!(header.is_applied());
    assert_eq!(doc.version, 4);

    let html = doc.to_html(&options());
    assert!(html.contains("<img "));
    assert_eq!(html.matches("<a href=\"https://x.com\"").count(), 1);
    assert!(html.contains("خرید کنید"));

    let reloaded = TemplateDocument::from_json(&doc.to_json()?)?;
    assert_eq!(reloaded.to_html(&options()), html);

    Ok(())
}

#[test]
fn test_edit_session_workflow() {
    let mut session = EditSession::new("test-client", TemplateDocument::new());

    let text = session.apply(Mutation::AddBlock {
        block_type: BlockType::Text,
        index: None,
    });
    let spacer = session.apply(Mutation::AddBlock {
        block_type: BlockType::Spacer,
        index: Some(0),
    });

    assert_eq!(session.selected_block, spacer.block_id);
    assert!(session.select(text.block_id.as_ref().unwrap()));

    let copy = session.apply(Mutation::DuplicateBlock {
        block_id: text.block_id.clone().unwrap(),
    });
    assert_eq!(session.selected_block, copy.block_id);
    assert_eq!(session.document.blocks.len(), 3);
}

#[test]
fn test_document_preview_matches_compiler() {
    let mut doc = TemplateDocument::new();
    for block_type in BlockType::ALL {
        doc.apply(Mutation::AddBlock {
            block_type,
            index: None,
        });
    }
    doc.apply(Mutation::UpdateSetting {
        field: "width".to_string(),
        value: json!("640px"),
    });

    let expected = compile_to_html(&doc.blocks, &doc.settings, &options());
    assert_eq!(doc.to_html(&options()), expected);
    assert!(expected.contains("max-width: 640px;"));
    assert_ne!(doc.settings, GlobalSettings::default());
}

#[test]
fn test_mutation_serialization() {
    let mutation = Mutation::UpdateNestedStyle {
        block_id: "block-1".into(),
        category: "dropShadow".to_string(),
        field: "blur".to_string(),
        value: json!(16),
    };

    let json = serde_json::to_string(&mutation).unwrap();
    let deserialized: Mutation = serde_json::from_str(&json).unwrap();

    assert_eq!(mutation, deserialized);
}

#[test]
fn test_mutation_log_replays_to_same_document() {
    let mut doc = TemplateDocument::new();
    let added: MutationResult = doc.apply(Mutation::AddBlock {
        block_type: BlockType::Countdown,
        index: None,
    });
    let id = added.block_id.unwrap();

    let log = vec![
        Mutation::UpdateContent {
            block_id: id.clone(),
            field: "targetDate".to_string(),
            value: json!("2026-06-01"),
        },
        Mutation::UpdateStyle {
            block_id: id.clone(),
            field: "boxColor".to_string(),
            value: json!("#dc2626"),
        },
    ];
    let encoded = serde_json::to_string(&log).unwrap();

    let mut replayed = doc.clone();
    doc.apply_all(log);
    let decoded: Vec<Mutation> = serde_json::from_str(&encoded).unwrap();
    replayed.apply_all(decoded);

    assert_eq!(replayed, doc);
}
