//! Load the plan, apply edits, write them back according to the sync mode.

use std::error::Error;

use chrono::Utc;
use planboard_core::{Config, PlanDocument, PlanStore, SaveScheduler};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

pub type CliResult<T = ()> = Result<T, Box<dyn Error>>;

pub struct Session {
    config: Config,
    store: PlanStore,
    runtime: Runtime,
    scheduler: SaveScheduler,
    pub doc: PlanDocument,
}

impl Session {
    /// Open the configured store. A plan that was never saved is seeded and
    /// marked dirty so its row ids survive this run.
    pub fn open() -> CliResult<Self> {
        let config = Config::load()?;
        let store = PlanStore::from_config(&config)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let loaded = runtime.block_on(store.load())?;
        debug!(store = %store.describe(), found = loaded.is_some(), "opened plan");

        let mut session = Self {
            scheduler: SaveScheduler::new(config.save_policy()),
            config,
            store,
            runtime,
            doc: PlanDocument::default(),
        };
        match loaded {
            Some(doc) => session.doc = doc,
            None => {
                session.doc = PlanDocument::seeded();
                session.commit()?;
            }
        }
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn year(&self) -> i32 {
        self.config.plan.year
    }

    /// Record an edit. Writes now in immediate mode; debounced edits wait
    /// for their window or for [`Session::close`].
    pub fn commit(&mut self) -> CliResult {
        let now = Utc::now();
        self.scheduler.mark_dirty(&self.doc, now);
        if let Some(snapshot) = self.scheduler.take_due(now) {
            self.write(&snapshot)?;
        }
        Ok(())
    }

    /// Write anything still pending.
    pub fn close(mut self) -> CliResult {
        if let Some(snapshot) = self.scheduler.flush() {
            self.write(&snapshot)?;
        }
        Ok(())
    }

    fn write(&self, doc: &PlanDocument) -> CliResult {
        self.runtime.block_on(self.store.save(doc))?;
        Ok(())
    }
}

/// Commands that bail out with `?` skip `close`; edits they already
/// committed are still written here.
impl Drop for Session {
    fn drop(&mut self) {
        if let Some(snapshot) = self.scheduler.flush() {
            if let Err(e) = self.write(&snapshot) {
                warn!(error = %e, store = %self.store.describe(), "failed to save pending plan");
            }
        }
    }
}

/// Resolve a row reference: a 1-based position on the board, or a row id.
pub fn resolve_row(doc: &PlanDocument, reference: &str) -> CliResult<String> {
    if let Ok(n) = reference.parse::<usize>() {
        if let Some(row) = n.checked_sub(1).and_then(|i| doc.rows.get(i)) {
            return Ok(row.id.clone());
        }
    }
    match doc.row(reference) {
        Some(row) => Ok(row.id.clone()),
        None => Err(format!("row not found: {reference}").into()),
    }
}
