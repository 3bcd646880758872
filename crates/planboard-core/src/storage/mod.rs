//! Persistence for the plan document.
//!
//! - [`LocalStore`]: pretty JSON file in the data directory
//! - [`RemoteStore`]: one row in a PostgREST-style table keyed by plan id
//! - [`Config`]: TOML settings selecting the backend and sync mode

mod config;
mod local;
mod remote;

pub use config::{BoardConfig, Config, PlanConfig, StorageBackend, StorageConfig, SyncConfig};
pub use local::LocalStore;
pub use remote::{RemoteConfig, RemoteStore};

use std::path::PathBuf;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::plan::PlanDocument;

/// Returns the data directory.
///
/// `PLANBOARD_DATA_DIR` wins when set; otherwise `~/.config/planboard[-dev]/`
/// based on `PLANBOARD_ENV` (set it to `dev` for a development directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("PLANBOARD_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("PLANBOARD_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("planboard-dev")
            } else {
                base_dir.join("planboard")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(ConfigError::DataDir)?;
    Ok(dir)
}

/// Configured persistence backend.
#[derive(Debug)]
pub enum PlanStore {
    Local(LocalStore),
    Remote(RemoteStore),
}

impl PlanStore {
    /// Build the store selected by `storage.backend`.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.storage.backend {
            StorageBackend::Local => Ok(Self::Local(LocalStore::in_data_dir(
                &config.plan.storage_key,
            )?)),
            StorageBackend::Remote => Ok(Self::Remote(RemoteStore::new(
                config.remote_config()?,
            )?)),
        }
    }

    /// Load the saved plan, `None` if nothing was saved yet.
    pub async fn load(&self) -> Result<Option<PlanDocument>> {
        match self {
            Self::Local(store) => store.load(),
            Self::Remote(store) => store.load().await,
        }
    }

    /// Load the saved plan or start a fresh one with seed rows.
    pub async fn load_or_seed(&self) -> Result<PlanDocument> {
        match self.load().await? {
            Some(doc) => Ok(doc),
            None => {
                debug!(store = %self.describe(), "no saved plan, seeding");
                Ok(PlanDocument::seeded())
            }
        }
    }

    pub async fn save(&self, doc: &PlanDocument) -> Result<()> {
        match self {
            Self::Local(store) => store.save(doc),
            Self::Remote(store) => store.save(doc).await,
        }
    }

    /// Human-readable location, for status output.
    pub fn describe(&self) -> String {
        match self {
            Self::Local(store) => format!("local:{}", store.path().display()),
            Self::Remote(store) => format!("remote:{}", store.plan_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SEED_ROWS;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_plan_is_seeded() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::Local(LocalStore::new(dir.path().join("plan.json")));

        let doc = store.load_or_seed().await.unwrap();
        assert_eq!(doc.rows.len(), SEED_ROWS);
        assert!(doc.items.is_empty());
        // seeding alone does not write
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saved_plan_is_loaded_back() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::Local(LocalStore::new(dir.path().join("plan.json")));

        let mut doc = PlanDocument::seeded();
        doc.set_slogan("Ship it");
        store.save(&doc).await.unwrap();

        assert_eq!(store.load_or_seed().await.unwrap(), doc);
        assert!(store.describe().starts_with("local:"));
    }

    #[test]
    fn remote_backend_requires_url_and_key() {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Remote;
        let err = PlanStore::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("storage.remote_url"));
    }
}
