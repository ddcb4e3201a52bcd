//! # Mailcraft Editor
//!
//! Editing engine for email templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: typed block model + defaults        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: TemplateDocument + mutations        │
//! │  - Apply mutations permissively             │
//! │  - Header source transitions                │
//! │  - Import generated templates               │
//! │  - Session selection state                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: blocks + settings → HTML     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mailcraft_blocks::BlockType;
//! use mailcraft_editor::{EditSession, Mutation, TemplateDocument};
//! use serde_json::json;
//!
//! let mut session = EditSession::new("client-1", TemplateDocument::new());
//!
//! let added = session.apply(Mutation::AddBlock {
//!     block_type: BlockType::Button,
//!     index: None,
//! });
//! let block_id = added.block_id.unwrap();
//!
//! session.apply(Mutation::UpdateContent {
//!     block_id: block_id.clone(),
//!     field: "text".to_string(),
//!     value: json!("خرید کنید"),
//! });
//!
//! assert_eq!(session.selected_block, Some(block_id));
//! ```

mod document;
mod errors;
mod generation;
mod header_source;
mod mutations;
mod session;

pub use document::TemplateDocument;
pub use errors::EditorError;
pub use generation::{
    import_generated, GeneratedBlock, GenerationMode, GenerationRequest, GenerationResponse,
    TemplateGenerator,
};
pub use header_source::{
    switch_header_source_type, transition_layout, HeaderLayout, LOGO_LAYOUT, PATTERN_LAYOUT,
};
pub use mutations::{MoveDirection, Mutation, MutationError, MutationResult};
pub use session::EditSession;
