//! JSON file store, one file per storage key.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::plan::PlanDocument;

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/<storage_key>.json`
    pub fn in_data_dir(storage_key: &str) -> Result<Self> {
        Ok(Self::new(data_dir()?.join(format!("{storage_key}.json"))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the plan. A missing file is `None`; unparsable or invalid data is an error.
    pub fn load(&self) -> Result<Option<PlanDocument>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e).into()),
        };

        let doc: PlanDocument = serde_json::from_str(&content).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "failed to parse plan");
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        doc.validate()?;

        debug!(
            path = %self.path.display(),
            rows = doc.rows.len(),
            items = doc.items.len(),
            events = doc.calendar_events.len(),
            "loaded plan"
        );
        Ok(Some(doc))
    }

    /// Write the plan via a sibling temp file and rename.
    pub fn save(&self, doc: &PlanDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(doc).map_err(StorageError::Json)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(StorageError::Io)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(StorageError::Io(e).into());
        }
        debug!(path = %self.path.display(), "saved plan");
        Ok(())
    }
}
