//! Runtime configuration.
//!
//! Defaults work out of the box. An optional `config.yaml` in the data
//! directory overrides them; the Gemini API key only ever comes from the
//! `API_KEY` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip)]
    pub data_directory: PathBuf,
    pub bind_address: String,
    /// Origin the browser UI is served from, allowed by CORS
    pub allowed_origin: String,
    /// Built frontend assets served for every non-API path
    pub frontend_dist: PathBuf,
    pub advisory: AdvisoryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
            frontend_dist: PathBuf::from("../frontend/dist"),
            advisory: AdvisoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default data directory and the process environment
    pub fn load() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::load_from(default_data_directory(), api_key)
    }

    /// Load `config.yaml` from `data_directory` if present, otherwise use defaults
    pub fn load_from<P: AsRef<Path>>(data_directory: P, api_key: Option<String>) -> Result<Self> {
        let data_directory = data_directory.as_ref().to_path_buf();
        let config_path = data_directory.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: AppConfig = serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            info!("Loaded configuration from {}", config_path.display());
            config
        } else {
            info!("No {} found, using default configuration", CONFIG_FILE_NAME);
            AppConfig::default()
        };

        config.data_directory = data_directory;
        config.advisory.api_key = api_key.filter(|k| !k.trim().is_empty());
        if config.advisory.api_key.is_none() {
            warn!("{} is not set; the assistant will answer with its fallback message", API_KEY_ENV);
        }

        Ok(config)
    }
}

/// `<platform data dir>/CowManager`, falling back to `~/Documents/CowManager`
fn default_data_directory() -> PathBuf {
    if let Some(dir) = dirs::data_dir() {
        return dir.join("CowManager");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join("Documents").join("CowManager");
    }
    PathBuf::from("cowmanager_data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(temp_dir.path(), None).unwrap();

        assert_eq!(config.data_directory, temp_dir.path());
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.advisory.model, "gemini-3-flash-preview");
        assert_eq!(config.advisory.temperature, 0.7);
        assert_eq!(config.advisory.api_key, None);
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "bind_address: 0.0.0.0:8000\nadvisory:\n  temperature: 0.2\n",
        )
        .unwrap();

        let config = AppConfig::load_from(temp_dir.path(), Some("secret".to_string())).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.allowed_origin, "http://localhost:8080");
        assert_eq!(config.advisory.temperature, 0.2);
        assert_eq!(config.advisory.model, "gemini-3-flash-preview");
        assert_eq!(config.advisory.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_api_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(temp_dir.path(), Some("  ".to_string())).unwrap();
        assert_eq!(config.advisory.api_key, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "bind_address: [unclosed").unwrap();
        assert!(AppConfig::load_from(temp_dir.path(), None).is_err());
    }
}
