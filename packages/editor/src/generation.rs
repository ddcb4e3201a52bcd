//! # Generated Templates
//!
//! Contract with an external text-to-template service. The service answers
//! a prompt with block-shaped records; those records are untrusted and go
//! through the same default-template normalization as anything else before
//! they reach a document.

use crate::{EditorError, TemplateDocument};
use mailcraft_blocks::{normalize_block, Block};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Loose structure appended to the current template
    #[default]
    Structure,
    /// A complete template that replaces the current blocks
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub mode: GenerationMode,
}

/// One block as the service describes it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub styles: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub blocks: Vec<GeneratedBlock>,
}

/// External prompt-to-template service
pub trait TemplateGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, EditorError>;
}

/// Normalize generated records into blocks, skipping the ones that do not
/// describe a known, well-typed block
pub fn import_generated(response: &GenerationResponse) -> Vec<Block> {
    response
        .blocks
        .iter()
        .enumerate()
        .filter_map(|(index, generated)| {
            match normalize_block(&generated.block_type, &generated.content, &generated.styles) {
                Ok(block) => Some(block),
                Err(e) => {
                    warn!(index, error = %e, "Skipping generated block");
                    None
                }
            }
        })
        .collect()
}

impl TemplateDocument {
    /// Ask `generator` for blocks and merge them in according to the
    /// request's mode. Returns how many blocks were imported.
    pub fn generate_with<G>(
        &mut self,
        generator: &G,
        request: &GenerationRequest,
    ) -> Result<usize, EditorError>
    where
        G: TemplateGenerator + ?Sized,
    {
        let response = generator.generate(request)?;
        let blocks = import_generated(&response);
        let imported = blocks.len();

        match request.mode {
            GenerationMode::Structure => self.blocks.extend(blocks),
            GenerationMode::Template => self.blocks = blocks,
        }
        self.version += 1;

        info!(
            imported,
            skipped = response.blocks.len() - imported,
            "Imported generated blocks"
        );
        Ok(imported)
    }
}
