//! Configuration module for the Rooli client

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::limits::CharacterLimits;
use crate::models::ContentType;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Rooli backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timezone used when composing without an explicit one
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Timezones the backend accepts for scheduling
    #[serde(default = "default_timezones")]
    pub timezones: Vec<String>,

    /// Content type used when composing without an explicit one
    #[serde(default)]
    pub default_content_type: ContentType,

    /// Per-platform character limit overrides, e.g. `TWITTER = 280`
    #[serde(default)]
    pub limits: CharacterLimits,
}

fn default_api_base_url() -> String {
    "https://api.rooli.app/v1".to_string()
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

fn default_timezones() -> Vec<String> {
    [
        "Africa/Lagos",
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "Europe/London",
        "Europe/Paris",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timezone: default_timezone(),
            timezones: default_timezones(),
            default_content_type: ContentType::default(),
            limits: CharacterLimits::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        crate::paths::config_path()
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}
