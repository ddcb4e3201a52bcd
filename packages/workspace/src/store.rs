//! # Template Stores
//!
//! Key-value persistence for the template list. The stored form is the
//! serialized list itself, so a template compiles to the same HTML before
//! and after a save/load cycle.

use crate::template::SavedTemplate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait TemplateStore {
    fn load(&self) -> Result<Vec<SavedTemplate>, StoreError>;
    fn save(&self, templates: &[SavedTemplate]) -> Result<(), StoreError>;
}

/// Read a stored list, skipping templates that do not parse
fn decode(source: &str) -> Result<Vec<SavedTemplate>, StoreError> {
    let values: Vec<Value> = serde_json::from_str(source)?;

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(template) => Some(template),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable template");
                None
            }
        })
        .collect())
}

/// In-memory store holding the serialized list, like a browser key-value slot
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text, if anything has been saved
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl TemplateStore for MemoryStore {
    fn load(&self) -> Result<Vec<SavedTemplate>, StoreError> {
        match self.raw() {
            Some(source) => decode(&source),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, templates: &[SavedTemplate]) -> Result<(), StoreError> {
        let source = serde_json::to_string(templates)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(source);
        Ok(())
    }
}

/// JSON file on disk. A missing file is an empty library.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<SavedTemplate>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let source = fs::read_to_string(&self.path)?;
        decode(&source)
    }

    #[instrument(skip(self, templates), fields(path = %self.path.display()))]
    fn save(&self, templates: &[SavedTemplate]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write beside the target and swap in, so a crash never truncates it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(templates)?)?;
        fs::rename(&tmp, &self.path)?;

        info!(templates = templates.len(), "Saved templates");
        Ok(())
    }
}
