//! Record of applied status changes.
//!
//! The log is immutable: `record` returns a new log with the change added.
//! Only changes that pass the lifecycle guard ever reach the log, so entries
//! dropped after teardown are absent by construction.

use super::event::EventKind;
use super::state::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One applied status change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status before the event was applied.
    pub from: Status,
    /// Status after the event was applied.
    pub to: Status,
    /// The event that caused the change.
    pub event: EventKind,
    /// When the change was applied.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of status changes for one controller.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use inflight::core::{EventKind, Status, StatusChange, TransitionLog};
///
/// let log = TransitionLog::new();
/// let log = log.record(StatusChange {
///     from: Status::Idle,
///     to: Status::Pending,
///     event: EventKind::Started,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.changes().len(), 1);
/// assert_eq!(log.path(), vec![Status::Idle, Status::Pending]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    changes: Vec<StatusChange>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new log. The original is unchanged.
    pub fn record(&self, change: StatusChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// All recorded changes, in application order.
    pub fn changes(&self) -> &[StatusChange] {
        &self.changes
    }

    /// The statuses traversed: the starting status, then each destination.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<Status> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        for change in &self.changes {
            path.push(change.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded change.
    ///
    /// `None` when the log is empty or the clock moved backwards between
    /// records.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.changes.first()?;
        let last = self.changes.last()?;
        (last.timestamp - first.timestamp).to_std().ok()
    }
}
