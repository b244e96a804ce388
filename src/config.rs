//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the default tasks file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<String>,

    /// Priority assumed when `add` is not given one.
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: None,
            default_priority: default_priority(),
        }
    }
}

fn default_priority() -> String {
    "medium".to_string()
}

pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(dir.join("taskdeck").join("config.toml"))
}

impl Config {
    /// Load the user config, falling back to defaults if no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
