use mailcraft_blocks::GlobalSettings;
use mailcraft_workspace::{JsonFileStore, TemplateLibrary};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "mailcraft.config.json";

/// Mailcraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON file backing the template library
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Where compiled HTML is written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Canvas settings for templates that carry none
    #[serde(default)]
    pub settings: GlobalSettings,

    /// Indent compiled output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_store_path() -> String {
    "templates.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_store_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.store_path)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn open_library(&self, cwd: &Path) -> TemplateLibrary<JsonFileStore> {
        TemplateLibrary::new(JsonFileStore::new(self.get_store_path(cwd)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            out_dir: default_out_dir(),
            settings: GlobalSettings::default(),
            pretty: default_pretty(),
        }
    }
}
