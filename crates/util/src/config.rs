//! Configuration for the Foodtuck front end.
//!
//! Settings come from a small JSON file in the standard configuration
//! directory (`~/.config/foodtuck/config.json` on most platforms). A missing
//! file yields defaults; an unparsable file is logged and also yields
//! defaults. Environment variables override file values, and the CLI
//! overrides both.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dirs_next::{config_dir, data_dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{path_from_env, string_from_env};

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "FOODTUCK_CONFIG_PATH";
/// Environment variable overriding the content project identifier.
pub const PROJECT_ID_ENV: &str = "FOODTUCK_SANITY_PROJECT_ID";
/// Environment variable overriding the content dataset.
pub const DATASET_ENV: &str = "FOODTUCK_SANITY_DATASET";
/// Environment variable overriding the content base URL.
pub const CONTENT_BASE_ENV: &str = "FOODTUCK_CONTENT_BASE";
/// Environment variable overriding the local storage file path.
pub const STORAGE_PATH_ENV: &str = "FOODTUCK_STORAGE_PATH";

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2023-10-01";
pub const DEFAULT_CART_POLL_INTERVAL_MS: u64 = 1000;
const MIN_CART_POLL_INTERVAL_MS: u64 = 50;

/// Error surfaced when the configuration file cannot be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the catalog documents live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub project_id: Option<String>,
    pub dataset: String,
    pub api_version: String,
    /// Full base URL; when unset it is derived from `project_id`.
    pub base_url: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodtuckConfig {
    pub content: ContentConfig,
    pub storage_path: Option<PathBuf>,
    pub cart_poll_interval_ms: u64,
}

impl Default for FoodtuckConfig {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            storage_path: None,
            cart_poll_interval_ms: DEFAULT_CART_POLL_INTERVAL_MS,
        }
    }
}

impl FoodtuckConfig {
    /// Load from the default location and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&default_config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit file without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => Ok(config),
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Failed to parse config file; using defaults");
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(project_id) = string_from_env(PROJECT_ID_ENV) {
            self.content.project_id = Some(project_id);
        }
        if let Some(dataset) = string_from_env(DATASET_ENV) {
            self.content.dataset = dataset;
        }
        if let Some(base_url) = string_from_env(CONTENT_BASE_ENV) {
            self.content.base_url = Some(base_url);
        }
        if let Some(path) = path_from_env(STORAGE_PATH_ENV) {
            self.storage_path = Some(path);
        }
    }

    /// Interval between cart reads, clamped to a sane minimum.
    pub fn cart_poll_interval(&self) -> Duration {
        Duration::from_millis(self.cart_poll_interval_ms.max(MIN_CART_POLL_INTERVAL_MS))
    }

    /// Path of the local storage file holding the cart entry.
    pub fn resolved_storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(default_storage_path)
    }
}

/// Get the default path for the configuration file.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = path_from_env(CONFIG_PATH_ENV) {
        return path;
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foodtuck")
        .join("config.json")
}

fn default_storage_path() -> PathBuf {
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foodtuck")
        .join("local_storage.json")
}
