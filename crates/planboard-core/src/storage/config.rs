//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Plan identity (year, remote plan id, local storage key)
//! - Storage backend and remote connection
//! - Save timing (immediate or debounced)
//! - Board display (visible lanes, expanded)
//!
//! Configuration is stored at `~/.config/planboard/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use super::remote::RemoteConfig;
use crate::error::ConfigError;
use crate::layout::LaneView;
use crate::sync::{SavePolicy, SyncMode};

/// Which plan this installation edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_year")]
    pub year: i32,
    /// Row id of the plan in the remote table.
    #[serde(default = "default_plan_id")]
    pub plan_id: String,
    /// Local file stem; bump it when the document shape changes.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Persistence backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Local,
    Remote,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default = "default_remote_table")]
    pub remote_table: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Save timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub mode: SyncMode,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Board display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Lanes shown per row while collapsed.
    #[serde(default = "default_visible_lanes")]
    pub visible_lanes: usize,
    #[serde(default)]
    pub expanded: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/planboard/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

// Default functions
fn default_year() -> i32 {
    2026
}
fn default_plan_id() -> String {
    "main".into()
}
fn default_storage_key() -> String {
    "planboard-2026-v5".into()
}
fn default_remote_table() -> String {
    "annual_plans".into()
}
fn default_debounce_ms() -> u64 {
    1000
}
fn default_visible_lanes() -> usize {
    2
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            plan_id: default_plan_id(),
            storage_key: default_storage_key(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            remote_url: None,
            remote_table: default_remote_table(),
            api_key: None,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mode: SyncMode::Immediate,
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            visible_lanes: default_visible_lanes(),
            expanded: false,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the field.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    pub fn save_policy(&self) -> SavePolicy {
        match self.sync.mode {
            SyncMode::Immediate => SavePolicy::Immediate,
            SyncMode::Debounced => SavePolicy::debounced_ms(self.sync.debounce_ms),
        }
    }

    pub fn lane_view(&self) -> LaneView {
        LaneView {
            visible_lanes: self.board.visible_lanes,
            expanded: self.board.expanded,
        }
    }

    /// Remote connection settings; errors if the remote backend is not configured.
    pub fn remote_config(&self) -> Result<RemoteConfig, ConfigError> {
        let base_url = self
            .storage
            .remote_url
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "storage.remote_url".into(),
                message: "required for the remote backend".into(),
            })?;
        let api_key = self
            .storage
            .api_key
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "storage.api_key".into(),
                message: "required for the remote backend".into(),
            })?;

        Ok(RemoteConfig {
            base_url,
            table: self.storage.remote_table.clone(),
            plan_id: self.plan.plan_id.clone(),
            api_key,
        })
    }
}
