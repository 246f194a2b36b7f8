//! Application configuration management.
//!
//! The configuration holds an optional data directory override and the role
//! last picked on the sign-in screen. It is stored at
//! `~/.config/eduflow/config.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Application name used for config/data directory paths
const APP_NAME: &str = "eduflow";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EDUFLOW_DATA_DIR";

/// Used when the platform has no data directory
const FALLBACK_DATA_DIR: &str = "./eduflow-data";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub last_role: Option<Role>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where the local key-value store lives.
    ///
    /// Precedence: `EDUFLOW_DATA_DIR`, then `data_dir` from the config file,
    /// then the platform data directory.
    pub fn data_dir(&self) -> PathBuf {
        let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        self.resolve_data_dir(env_dir, dirs::data_dir())
    }

    fn resolve_data_dir(&self, env_dir: Option<PathBuf>, platform_dir: Option<PathBuf>) -> PathBuf {
        env_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| self.data_dir.clone())
            .or_else(|| platform_dir.map(|d| d.join(APP_NAME)))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }
}
