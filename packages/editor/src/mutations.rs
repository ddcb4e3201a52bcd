//! # Block Mutations
//!
//! Editor operations on a template, as data. Every mutation addresses its
//! target by block id and replaces as little as it can: one field, one field
//! inside one named sub-object, or one position in the block list.
//!
//! ## Mutation Semantics
//!
//! ### Unknown ids
//! - Never an error at the document surface. The mutation is a no-op and the
//!   reason is reported in `MutationResult::ignored`
//!
//! ### MoveBlock
//! - Swaps with the immediate neighbour
//! - No-op at either end of the list
//!
//! ### ApplyPreset
//! - Shallow merge over the block's styles
//! - `backgroundColor`, `align` and `padding` keep their current values
//!
//! ### SetGridColumns
//! - Existing items are kept verbatim, new ones are numbered placeholders

use crate::document::TemplateDocument;
use crate::header_source::switch_header_source_type;
use mailcraft_blocks::{
    set_field, set_nested_field, Block, BlockBody, BlockId, BlockType, FieldError, HeaderSource,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Semantic editor operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a fresh default block at `index`, or append
    AddBlock {
        block_type: BlockType,
        index: Option<usize>,
    },

    /// Replace one content field
    UpdateContent {
        block_id: BlockId,
        field: String,
        value: Value,
    },

    /// Replace one style field
    UpdateStyle {
        block_id: BlockId,
        field: String,
        value: Value,
    },

    /// Replace one field of a style sub-object such as `border`
    UpdateNestedStyle {
        block_id: BlockId,
        category: String,
        field: String,
        value: Value,
    },

    ApplyPreset {
        block_id: BlockId,
        styles: Map<String, Value>,
    },

    RemoveBlock {
        block_id: BlockId,
    },

    MoveBlock {
        block_id: BlockId,
        direction: MoveDirection,
    },

    SetGridColumns {
        block_id: BlockId,
        columns: u32,
    },

    /// Switch a header between url, upload and pattern sources
    SetHeaderSourceType {
        block_id: BlockId,
        source_type: HeaderSource,
    },

    /// Insert a copy with a fresh id directly below the original
    DuplicateBlock {
        block_id: BlockId,
    },

    /// Replace one canvas setting
    UpdateSetting {
        field: String,
        value: Value,
    },

    /// Replace one field of a canvas setting sub-object such as `noise`
    UpdateNestedSetting {
        category: String,
        field: String,
        value: Value,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Block is not a product grid: {0}")]
    NotAProductGrid(BlockId),

    #[error("Block is not a header: {0}")]
    NotAHeader(BlockId),

    #[error("Block is already at the edge: {0}")]
    AtBoundary(BlockId),

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Outcome of applying a mutation to a document
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,
    /// Block the mutation created or touched
    pub block_id: Option<BlockId>,
    /// Why the mutation was a no-op, if it was
    pub ignored: Option<MutationError>,
}

impl MutationResult {
    pub fn is_applied(&self) -> bool {
        self.ignored.is_none()
    }
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock { .. } => "add_block",
            Mutation::UpdateContent { .. } => "update_content",
            Mutation::UpdateStyle { .. } => "update_style",
            Mutation::UpdateNestedStyle { .. } => "update_nested_style",
            Mutation::ApplyPreset { .. } => "apply_preset",
            Mutation::RemoveBlock { .. } => "remove_block",
            Mutation::MoveBlock { .. } => "move_block",
            Mutation::SetGridColumns { .. } => "set_grid_columns",
            Mutation::SetHeaderSourceType { .. } => "set_header_source_type",
            Mutation::DuplicateBlock { .. } => "duplicate_block",
            Mutation::UpdateSetting { .. } => "update_setting",
            Mutation::UpdateNestedSetting { .. } => "update_nested_setting",
        }
    }

    /// Apply to the document. On error the document is unchanged.
    /// Returns the id of the block created or touched.
    #[instrument(skip(self, doc), fields(mutation = self.name()))]
    pub fn apply(&self, doc: &mut TemplateDocument) -> Result<Option<BlockId>, MutationError> {
        match self {
            Mutation::AddBlock { block_type, index } => {
                Ok(Some(Self::apply_add(doc, *block_type, *index)))
            }

            Mutation::UpdateContent {
                block_id,
                field,
                value,
            } => {
                let block = Self::find_mut(doc, block_id)?;
                block.set_content_field(field, value.clone())?;
                Ok(Some(block_id.clone()))
            }

            Mutation::UpdateStyle {
                block_id,
                field,
                value,
            } => {
                let block = Self::find_mut(doc, block_id)?;
                block.set_style_field(field, value.clone())?;
                Ok(Some(block_id.clone()))
            }

            Mutation::UpdateNestedStyle {
                block_id,
                category,
                field,
                value,
            } => {
                let block = Self::find_mut(doc, block_id)?;
                block.set_nested_style_field(category, field, value.clone())?;
                Ok(Some(block_id.clone()))
            }

            Mutation::ApplyPreset { block_id, styles } => {
                let block = Self::find_mut(doc, block_id)?;
                block.apply_preset(styles)?;
                Ok(Some(block_id.clone()))
            }

            Mutation::RemoveBlock { block_id } => {
                let index = Self::position(doc, block_id)?;
                doc.blocks.remove(index);
                Ok(Some(block_id.clone()))
            }

            Mutation::MoveBlock {
                block_id,
                direction,
            } => Self::apply_move(doc, block_id, *direction).map(|_| Some(block_id.clone())),

            Mutation::SetGridColumns { block_id, columns } => {
                let block = Self::find_mut(doc, block_id)?;
                match &mut block.body {
                    BlockBody::ProductGrid { content, .. } => {
                        content.set_columns(*columns);
                        Ok(Some(block_id.clone()))
                    }
                    _ => Err(MutationError::NotAProductGrid(block_id.clone())),
                }
            }

            Mutation::SetHeaderSourceType {
                block_id,
                source_type,
            } => {
                let block = Self::find_mut(doc, block_id)?;
                *block = switch_header_source_type(block, *source_type)?;
                Ok(Some(block_id.clone()))
            }

            Mutation::DuplicateBlock { block_id } => {
                let index = Self::position(doc, block_id)?;
                let copy = doc.blocks[index].duplicate();
                let id = copy.id.clone();
                doc.blocks.insert(index + 1, copy);
                Ok(Some(id))
            }

            Mutation::UpdateSetting { field, value } => {
                set_field(&mut doc.settings, field, value.clone())?;
                Ok(None)
            }

            Mutation::UpdateNestedSetting {
                category,
                field,
                value,
            } => {
                set_nested_field(&mut doc.settings, category, field, value.clone())?;
                Ok(None)
            }
        }
    }

    fn apply_add(doc: &mut TemplateDocument, block_type: BlockType, index: Option<usize>) -> BlockId {
        let block = Block::new(block_type);
        let id = block.id.clone();

        match index {
            Some(index) => {
                let index = index.min(doc.blocks.len());
                doc.blocks.insert(index, block);
            }
            None => doc.blocks.push(block),
        }

        id
    }

    fn apply_move(
        doc: &mut TemplateDocument,
        block_id: &BlockId,
        direction: MoveDirection,
    ) -> Result<(), MutationError> {
        let index = Self::position(doc, block_id)?;

        let neighbour = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|next| *next < doc.blocks.len()),
        }
        .ok_or_else(|| MutationError::AtBoundary(block_id.clone()))?;

        doc.blocks.swap(index, neighbour);
        Ok(())
    }

    fn position(doc: &TemplateDocument, block_id: &BlockId) -> Result<usize, MutationError> {
        doc.position(block_id)
            .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))
    }

    fn find_mut<'a>(
        doc: &'a mut TemplateDocument,
        block_id: &BlockId,
    ) -> Result<&'a mut Block, MutationError> {
        doc.block_mut(block_id)
            .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))
    }
}
