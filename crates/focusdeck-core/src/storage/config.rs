//! TOML-based application configuration.
//!
//! Stores deployment-level settings that are not user state:
//! - Authentication collaborator endpoint
//! - Water reminder defaults and prompt permission
//! - UI defaults
//!
//! Configuration is stored at `~/.config/focusdeck/config.toml`. User state
//! (session, counters, tasks, theme) lives in the JSON store instead.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Authentication collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_auth_endpoint")]
    pub endpoint: String,
}

/// Water reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Interval used when `start` is called without one.
    #[serde(default = "default_interval_min")]
    pub default_interval_min: u32,
    /// Whether system-level prompts are permitted. When false, prompts
    /// fall back to a blocking alert.
    #[serde(default = "default_true")]
    pub system_prompts: bool,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme applied when the store has no persisted theme yet.
    #[serde(default)]
    pub dark_mode: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusdeck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub water: WaterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_auth_endpoint() -> String {
    "http://localhost:8000/api/auth.php".into()
}
fn default_interval_min() -> u32 {
    60
}
fn default_true() -> bool {
    true
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            endpoint: default_auth_endpoint(),
        }
    }
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            default_interval_min: default_interval_min(),
            system_prompts: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { dark_mode: false }
    }
}

impl Config {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data dir>"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("<data dir>"),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "auth.endpoint" => Some(self.auth.endpoint.clone()),
            "water.default_interval_min" => Some(self.water.default_interval_min.to_string()),
            "water.system_prompts" => Some(self.water.system_prompts.to_string()),
            "ui.dark_mode" => Some(self.ui.dark_mode.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        match key {
            "auth.endpoint" => self.auth.endpoint = value.to_string(),
            "water.default_interval_min" => {
                self.water.default_interval_min =
                    value.parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
            }
            "water.system_prompts" => {
                self.water.system_prompts =
                    value.parse().map_err(|e: std::str::ParseBoolError| invalid(e.to_string()))?;
            }
            "ui.dark_mode" => {
                self.ui.dark_mode =
                    value.parse().map_err(|e: std::str::ParseBoolError| invalid(e.to_string()))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}
