//! Save scheduling: write every change at once, or coalesce bursts of edits.
//!
//! [`SaveScheduler`] is a pure state machine over caller-supplied timestamps.
//! It keeps only the latest snapshot; in debounced mode each edit pushes the
//! deadline out again, so a burst of edits produces one write.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::plan::PlanDocument;

/// Configured save timing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    #[default]
    Immediate,
    Debounced,
}

/// Resolved save timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    Immediate,
    Debounced(Duration),
}

impl SavePolicy {
    pub fn debounced_ms(ms: u64) -> Self {
        Self::Debounced(Duration::milliseconds(ms.min(i64::MAX as u64) as i64))
    }

    fn delay(&self) -> Duration {
        match self {
            Self::Immediate => Duration::zero(),
            Self::Debounced(delay) => *delay,
        }
    }
}

#[derive(Debug, Clone)]
struct Pending {
    snapshot: PlanDocument,
    due_at: DateTime<Utc>,
}

/// Decides when the latest document snapshot should be written.
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    policy: SavePolicy,
    pending: Option<Pending>,
}

impl SaveScheduler {
    pub fn new(policy: SavePolicy) -> Self {
        Self {
            policy,
            pending: None,
        }
    }

    pub fn policy(&self) -> SavePolicy {
        self.policy
    }

    /// Record a change. Replaces any earlier unsaved snapshot and restarts the debounce window.
    pub fn mark_dirty(&mut self, doc: &PlanDocument, now: DateTime<Utc>) {
        let due_at = now + self.policy.delay();
        self.pending = Some(Pending {
            snapshot: doc.clone(),
            due_at,
        });
        debug!(%due_at, "plan marked dirty");
    }

    /// Snapshot to write now, if its deadline has passed.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<PlanDocument> {
        if self.pending.as_ref().is_some_and(|p| p.due_at <= now) {
            self.pending.take().map(|p| p.snapshot)
        } else {
            None
        }
    }

    /// Snapshot to write regardless of deadline (shutdown path).
    pub fn flush(&mut self) -> Option<PlanDocument> {
        let pending = self.pending.take()?;
        info!(due_at = %pending.due_at, "flushing pending save");
        Some(pending.snapshot)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Time left until the pending snapshot is due; zero once overdue.
    pub fn time_until_due(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline().map(|t| {
            if t > now {
                t - now
            } else {
                Duration::zero()
            }
        })
    }
}
