//! # Mailcraft Workspace
//!
//! Persistence for email templates. A `TemplateStore` loads and saves the
//! whole template list; `TemplateLibrary` layers named lookups and
//! last-writer-wins updates on top of any store.
//!
//! ```rust
//! use mailcraft_blocks::{Block, BlockType, GlobalSettings};
//! use mailcraft_workspace::{MemoryStore, SavedTemplate, TemplateLibrary};
//!
//! let library = TemplateLibrary::new(MemoryStore::new());
//! let template = SavedTemplate::new(
//!     "خوش‌آمد",
//!     vec![Block::new(BlockType::Header)],
//!     GlobalSettings::default(),
//! );
//! library.upsert(template.clone()).unwrap();
//! assert_eq!(library.get(&template.id).unwrap(), Some(template));
//! ```

pub mod library;
pub mod store;
pub mod template;

pub use library::TemplateLibrary;
pub use store::{JsonFileStore, MemoryStore, StoreError, TemplateStore};
pub use template::SavedTemplate;
