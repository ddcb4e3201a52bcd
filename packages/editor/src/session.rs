//! # Edit Session
//!
//! One user's editing state over a document: the document itself and the
//! active block. Selection lives here and nowhere else; mutations and the
//! compiler never see it.

use crate::{Mutation, MutationResult, TemplateDocument};
use mailcraft_blocks::{Block, BlockId};

pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    pub document: TemplateDocument,

    /// Active block, if any
    pub selected_block: Option<BlockId>,
}

impl EditSession {
    pub fn new(id: impl Into<String>, document: TemplateDocument) -> Self {
        Self {
            id: id.into(),
            document,
            selected_block: None,
        }
    }

    /// Apply a mutation and keep the selection consistent with it.
    /// Added and duplicated blocks become active; removing the active
    /// block clears the selection.
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        let selects_result = matches!(
            mutation,
            Mutation::AddBlock { .. } | Mutation::DuplicateBlock { .. }
        );
        let removed = match &mutation {
            Mutation::RemoveBlock { block_id } => Some(block_id.clone()),
            _ => None,
        };

        let result = self.document.apply(mutation);
        if !result.is_applied() {
            return result;
        }

        if selects_result {
            self.selected_block = result.block_id.clone();
        } else if removed.is_some() && removed == self.selected_block {
            self.selected_block = None;
        }

        result
    }

    /// Select an existing block. Returns false for unknown ids.
    pub fn select(&mut self, id: &BlockId) -> bool {
        if self.document.block(id).is_none() {
            return false;
        }
        self.selected_block = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_block = None;
    }

    pub fn selected(&self) -> Option<&Block> {
        self.selected_block
            .as_ref()
            .and_then(|id| self.document.block(id))
    }
}
