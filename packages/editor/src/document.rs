//! # Template Document
//!
//! An ordered block list plus canvas settings, edited only through
//! `Mutation`s. `apply` never fails: a mutation that cannot be applied
//! leaves the document untouched and says why in its `MutationResult`.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Compile → Save
//!   ↓      ↓       ↓        ↓
//! JSON  Mutations  HTML    JSON
//! ```

use crate::{EditorError, Mutation, MutationResult};
use mailcraft_blocks::{deserialize_blocks_lenient, Block, BlockId, GlobalSettings};
use mailcraft_compiler_html::{compile_to_html, CompileOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Editable email template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(default, deserialize_with = "deserialize_blocks_lenient")]
    pub blocks: Vec<Block>,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// Increments on each applied mutation
    #[serde(skip)]
    pub version: u64,
}

impl TemplateDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(blocks: Vec<Block>, settings: GlobalSettings) -> Self {
        Self {
            blocks,
            settings,
            version: 0,
        }
    }

    /// Read a document from JSON. Unreadable blocks are dropped.
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn block_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| &block.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| &block.id == id)
    }

    /// Apply a mutation. Unknown ids and invalid fields are no-ops.
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        match mutation.apply(self) {
            Ok(block_id) => {
                self.version += 1;
                MutationResult {
                    version: self.version,
                    block_id,
                    ignored: None,
                }
            }
            Err(e) => {
                debug!(mutation = mutation.name(), reason = %e, "Ignoring mutation");
                MutationResult {
                    version: self.version,
                    block_id: None,
                    ignored: Some(e),
                }
            }
        }
    }

    /// Apply mutations in order
    pub fn apply_all<I>(&mut self, mutations: I) -> Vec<MutationResult>
    where
        I: IntoIterator<Item = Mutation>,
    {
        mutations
            .into_iter()
            .map(|mutation| self.apply(mutation))
            .collect()
    }

    /// Compile the current state to HTML
    pub fn to_html(&self, options: &CompileOptions) -> String {
        compile_to_html(&self.blocks, &self.settings, options)
    }
}
