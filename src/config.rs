//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the user config
//! directory and currently covers the backend base URL. Environment
//! variables override the file: `TRIAGE_API_URL` replaces the URL and
//! `TRIAGE_CONFIG_DIR` relocates the config directory entirely.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TriageError};

pub const API_URL_ENV: &str = "TRIAGE_API_URL";
pub const CONFIG_DIR_ENV: &str = "TRIAGE_CONFIG_DIR";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the ticket backend
    #[serde(default = "default_api_url")]
    pub url: String,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir).join("config.yaml"));
        }

        let dirs = ProjectDirs::from("", "", "triage")
            .ok_or_else(|| TriageError::Config("cannot determine config directory".to_string()))?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from disk, falling back to defaults when the
    /// file does not exist. Environment overrides are applied last.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml_ng::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.api.url = url;
        }

        Ok(config)
    }

    /// Save configuration to disk, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get a configuration value by dotted key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.url" => Ok(self.api.url.clone()),
            _ => Err(TriageError::Config(format!("unknown key '{}'", key))),
        }
    }

    /// Set a configuration value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => {
                let parsed = Url::parse(value)
                    .map_err(|e| TriageError::Config(format!("invalid URL '{}': {}", value, e)))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(TriageError::Config(format!(
                        "invalid URL '{}': expected http or https",
                        value
                    )));
                }
                self.api.url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            _ => Err(TriageError::Config(format!("unknown key '{}'", key))),
        }
    }
}
