use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::link::LinkKind;
use crate::locale::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Forced UI language; when unset the language is detected from the
    /// environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,

    /// Link flavor used when no subcommand is given.
    #[serde(default = "default_service")]
    pub service: LinkKind,
}

fn default_service() -> LinkKind {
    LinkKind::Mailto
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            service: default_service(),
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".maillink").join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
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
