//! Per-mutation behaviour on a live document

use mailcraft_blocks::{
    button_presets, Block, BlockBody, BlockId, BlockType, GridItem, HeaderSource, Section,
    PROTECTED_STYLE_KEYS,
};
use mailcraft_editor::{MoveDirection, Mutation, MutationError, TemplateDocument};
use serde_json::json;

fn doc_with(types: &[BlockType]) -> (TemplateDocument, Vec<BlockId>) {
    let mut doc = TemplateDocument::new();
    let ids = types
        .iter()
        .map(|block_type| {
            doc.apply(Mutation::AddBlock {
                block_type: *block_type,
                index: None,
            })
            .block_id
            .unwrap()
        })
        .collect();
    (doc, ids)
}

fn order(doc: &TemplateDocument) -> Vec<BlockId> {
    doc.blocks.iter().map(|block| block.id.clone()).collect()
}

#[test]
fn test_add_block_at_index() {
    let (mut doc, ids) = doc_with(&[BlockType::Header, BlockType::Footer]);

    let result = doc.apply(Mutation::AddBlock {
        block_type: BlockType::Text,
        index: Some(1),
    });

    let new_id = result.block_id.unwrap();
    assert_eq!(order(&doc), vec![ids[0].clone(), new_id, ids[1].clone()]);
}

#[test]
fn test_added_blocks_do_not_share_defaults() {
    let (mut doc, ids) = doc_with(&[BlockType::Button, BlockType::Button]);

    doc.apply(Mutation::UpdateStyle {
        block_id: ids[0].clone(),
        field: "buttonColor".to_string(),
        value: json!("#000000"),
    });

    let second = doc.block(&ids[1]).unwrap();
    assert_eq!(second.section_value(Section::Styles)["buttonColor"], "#2563eb");
    assert_eq!(*second, Block::with_id(ids[1].clone(), BlockType::Button));
}

#[test]
fn test_update_content_touches_one_field() {
    let (mut doc, ids) = doc_with(&[BlockType::Button]);
    let before = doc.block(&ids[0]).unwrap().section_value(Section::Content);

    let result = doc.apply(Mutation::UpdateContent {
        block_id: ids[0].clone(),
        field: "link".to_string(),
        value: json!("https://x.com"),
    });
    assert!(result.is_applied());

    let after = doc.block(&ids[0]).unwrap().section_value(Section::Content);
    for (key, value) in &before {
        if key == "link" {
            assert_eq!(after[key], "https://x.com");
        } else {
            assert_eq!(&after[key], value, "{} changed", key);
        }
    }
}

#[test]
fn test_update_nested_style_keeps_siblings() {
    let (mut doc, ids) = doc_with(&[BlockType::Image]);

    doc.apply(Mutation::UpdateNestedStyle {
        block_id: ids[0].clone(),
        category: "border".to_string(),
        field: "enabled".to_string(),
        value: json!(true),
    });

    let styles = doc.block(&ids[0]).unwrap().section_value(Section::Styles);
    assert_eq!(
        styles["border"],
        json!({ "enabled": true, "color": "#e5e7eb", "width": 1, "style": "solid" })
    );
}

#[test]
fn test_invalid_field_is_ignored() {
    let (mut doc, ids) = doc_with(&[BlockType::Spacer]);
    let before = doc.clone();

    let unknown = doc.apply(Mutation::UpdateStyle {
        block_id: ids[0].clone(),
        field: "columns".to_string(),
        value: json!(3),
    });
    let wrong_type = doc.apply(Mutation::UpdateStyle {
        block_id: ids[0].clone(),
        field: "height".to_string(),
        value: json!("tall"),
    });

    assert!(matches!(unknown.ignored, Some(MutationError::Field(_))));
    assert!(matches!(wrong_type.ignored, Some(MutationError::Field(_))));
    assert_eq!(doc, before);
}

#[test]
fn test_apply_preset_protects_layout_keys() {
    let (mut doc, ids) = doc_with(&[BlockType::Button]);
    let dark = button_presets()
        .into_iter()
        .find(|preset| preset.id == "dark")
        .unwrap();
    assert!(dark.styles.contains_key("padding"));

    doc.apply(Mutation::ApplyPreset {
        block_id: ids[0].clone(),
        styles: dark.styles.clone(),
    });

    let styles = doc.block(&ids[0]).unwrap().section_value(Section::Styles);
    assert_eq!(styles["padding"], "16px 24px");
    assert_eq!(styles["align"], "center");
    assert_eq!(styles["buttonColor"], "#111827");
    for key in PROTECTED_STYLE_KEYS {
        assert!(styles.contains_key(key));
    }
}

#[test]
fn test_remove_block() {
    let (mut doc, ids) = doc_with(&[BlockType::Text, BlockType::Image]);

    doc.apply(Mutation::RemoveBlock {
        block_id: ids[0].clone(),
    });

    assert_eq!(order(&doc), vec![ids[1].clone()]);
}

#[test]
fn test_move_block_swaps_neighbours() {
    let (mut doc, ids) = doc_with(&[BlockType::Header, BlockType::Text, BlockType::Footer]);

    doc.apply(Mutation::MoveBlock {
        block_id: ids[1].clone(),
        direction: MoveDirection::Up,
    });
    assert_eq!(order(&doc), vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);

    doc.apply(Mutation::MoveBlock {
        block_id: ids[0].clone(),
        direction: MoveDirection::Down,
    });
    assert_eq!(order(&doc), vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);
}

#[test]
fn test_move_block_at_edges_is_noop() {
    let (mut doc, ids) = doc_with(&[BlockType::Header, BlockType::Footer]);
    let version = doc.version;

    let up = doc.apply(Mutation::MoveBlock {
        block_id: ids[0].clone(),
        direction: MoveDirection::Up,
    });
    let down = doc.apply(Mutation::MoveBlock {
        block_id: ids[1].clone(),
        direction: MoveDirection::Down,
    });

    assert_eq!(up.ignored, Some(MutationError::AtBoundary(ids[0].clone())));
    assert_eq!(down.ignored, Some(MutationError::AtBoundary(ids[1].clone())));
    assert_eq!(order(&doc), ids);
    assert_eq!(doc.version, version);
}

#[test]
fn test_grid_resize_grows_and_shrinks() {
    let (mut doc, ids) = doc_with(&[BlockType::ProductGrid]);
    doc.apply(Mutation::UpdateContent {
        block_id: ids[0].clone(),
        field: "items".to_string(),
        value: json!([
            { "imageUrl": "https://cdn.example/a.png", "link": "https://a", "text": "کفش", "alt": "کفش" },
            { "imageUrl": "https://cdn.example/b.png", "link": "https://b", "text": "کیف", "alt": "کیف" }
        ]),
    });
    let items_before = grid_items(&doc, &ids[0]);

    doc.apply(Mutation::SetGridColumns {
        block_id: ids[0].clone(),
        columns: 4,
    });

    let grown = grid_items(&doc, &ids[0]);
    assert_eq!(grown.len(), 4);
    assert_eq!(grown[..2], items_before[..]);
    assert_eq!(grown[2], GridItem::placeholder(3));
    assert_ne!(grown[2].image_url, grown[3].image_url);

    doc.apply(Mutation::SetGridColumns {
        block_id: ids[0].clone(),
        columns: 1,
    });

    let shrunk = grid_items(&doc, &ids[0]);
    assert_eq!(shrunk, vec![items_before[0].clone()]);
}

fn grid_items(doc: &TemplateDocument, id: &BlockId) -> Vec<GridItem> {
    match &doc.block(id).unwrap().body {
        BlockBody::ProductGrid { content, .. } => content.items.clone(),
        other => panic!("Expected product grid, got {:?}", other.block_type()),
    }
}

#[test]
fn test_header_source_switch_mutation() {
    let (mut doc, ids) = doc_with(&[BlockType::Header]);

    doc.apply(Mutation::SetHeaderSourceType {
        block_id: ids[0].clone(),
        source_type: HeaderSource::Pattern,
    });

    let block = doc.block(&ids[0]).unwrap();
    let styles = block.section_value(Section::Styles);
    assert_eq!(block.section_value(Section::Content)["sourceType"], "pattern");
    assert_eq!(styles["width"], "100%");
    assert_eq!(styles["padding"], "0px");
}

#[test]
fn test_duplicate_inserts_below() {
    let (mut doc, ids) = doc_with(&[BlockType::Text, BlockType::Footer]);
    doc.apply(Mutation::UpdateContent {
        block_id: ids[0].clone(),
        field: "text".to_string(),
        value: json!("تخفیف ویژه"),
    });

    let copy_id = doc
        .apply(Mutation::DuplicateBlock {
            block_id: ids[0].clone(),
        })
        .block_id
        .unwrap();

    assert_ne!(copy_id, ids[0]);
    assert_eq!(doc.position(&copy_id), Some(1));
    assert_eq!(doc.blocks[1].body, doc.blocks[0].body);

    doc.apply(Mutation::UpdateContent {
        block_id: copy_id,
        field: "text".to_string(),
        value: json!("متن دیگر"),
    });
    assert_ne!(doc.blocks[1].body, doc.blocks[0].body);
}

#[test]
fn test_settings_mutations() {
    let mut doc = TemplateDocument::new();

    doc.apply(Mutation::UpdateSetting {
        field: "backgroundType".to_string(),
        value: json!("gradient"),
    });
    doc.apply(Mutation::UpdateNestedSetting {
        category: "noise".to_string(),
        field: "enabled".to_string(),
        value: json!(true),
    });

    assert_eq!(doc.settings.background_color, "#f3f4f6");
    assert!(doc.settings.noise.enabled);
    assert_eq!(doc.settings.noise.amount, 0.15);
    assert_eq!(doc.version, 2);
}

#[test]
fn test_every_mutation_ignores_unknown_ids() {
    let (mut doc, _) = doc_with(&[BlockType::Header, BlockType::ProductGrid]);
    let before = doc.clone();
    let ghost = BlockId::from("ghost");

    let mutations = vec![
        Mutation::UpdateContent {
            block_id: ghost.clone(),
            field: "text".to_string(),
            value: json!("x"),
        },
        Mutation::UpdateStyle {
            block_id: ghost.clone(),
            field: "padding".to_string(),
            value: json!("0px"),
        },
        Mutation::UpdateNestedStyle {
            block_id: ghost.clone(),
            category: "border".to_string(),
            field: "enabled".to_string(),
            value: json!(true),
        },
        Mutation::ApplyPreset {
            block_id: ghost.clone(),
            styles: Default::default(),
        },
        Mutation::RemoveBlock {
            block_id: ghost.clone(),
        },
        Mutation::MoveBlock {
            block_id: ghost.clone(),
            direction: MoveDirection::Down,
        },
        Mutation::SetGridColumns {
            block_id: ghost.clone(),
            columns: 3,
        },
        Mutation::SetHeaderSourceType {
            block_id: ghost.clone(),
            source_type: HeaderSource::Pattern,
        },
        Mutation::DuplicateBlock {
            block_id: ghost.clone(),
        },
    ];

    for result in doc.apply_all(mutations) {
        assert_eq!(result.ignored, Some(MutationError::BlockNotFound(ghost.clone())));
    }
    assert_eq!(doc, before);
}
