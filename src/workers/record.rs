//! # Worker record: identity plus mutable runtime state.
//!
//! A [`WorkerRecord`] is created once when the pool is built and only ever mutated
//! afterwards. All mutation goes through the methods here so the record invariants
//! hold at every observable point:
//!
//! - `health` stays within `[0, 100]`
//! - entering `error` always increments `error_count`
//! - `change_count` and `error_count` never decrease (except the explicit reset on start)

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::labels;

/// Upper bound of worker health.
pub const MAX_HEALTH: u8 = 100;

/// Runtime status of one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// Not participating in work (stopped or paused).
    Inactive,
    /// Eligible for the next work tick.
    Active,
    /// Performed work on the last tick it was eligible for.
    Working,
    /// A fault was recorded; waits for recovery.
    Error,
}

impl WorkerStatus {
    /// Returns true if the work cycle advances workers in this status.
    #[inline]
    pub fn is_eligible(self) -> bool {
        matches!(self, WorkerStatus::Active | WorkerStatus::Working)
    }

    /// Short stable label (snake_case).
    pub fn as_label(self) -> &'static str {
        match self {
            WorkerStatus::Inactive => "inactive",
            WorkerStatus::Active => "active",
            WorkerStatus::Working => "working",
            WorkerStatus::Error => "error",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_label())
    }
}

/// Static description of a worker, used to seed the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerDef {
    /// Stable identifier, unique within the pool.
    pub id: Arc<str>,
    /// Display name.
    pub name: Arc<str>,
    /// Display description.
    pub description: Arc<str>,
}

impl WorkerDef {
    /// Creates a worker definition.
    pub fn new(
        id: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        description: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One worker's identity and runtime state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerRecord {
    /// Stable identifier, unique within the pool.
    pub id: Arc<str>,
    /// Display name (opaque to the runtime).
    pub name: Arc<str>,
    /// Display description (opaque to the runtime).
    pub description: Arc<str>,
    /// Current status.
    pub status: WorkerStatus,
    /// Total units of work recorded.
    pub change_count: u64,
    /// Most recent action.
    pub last_activity: Arc<str>,
    /// Operational fitness in `[0, 100]`.
    pub health: u8,
    /// Number of transitions into `error`.
    pub error_count: u64,

    /// Set while paused if the worker was in `error` when the pause began.
    #[serde(skip)]
    held_in_error: bool,
}

impl WorkerRecord {
    /// Creates a fresh, inactive record at full health.
    pub fn new(def: WorkerDef) -> Self {
        Self {
            id: def.id,
            name: def.name,
            description: def.description,
            status: WorkerStatus::Inactive,
            change_count: 0,
            last_activity: Arc::from(labels::NOT_STARTED),
            health: MAX_HEALTH,
            error_count: 0,
            held_in_error: false,
        }
    }

    /// Sets the activity label.
    #[inline]
    pub(crate) fn note(&mut self, activity: impl Into<Arc<str>>) {
        self.last_activity = activity.into();
    }

    /// Applies a signed health delta, clamped into `[0, 100]`.
    pub(crate) fn shift_health(&mut self, delta: i16) {
        let next = (i16::from(self.health) + delta).clamp(0, i16::from(MAX_HEALTH));
        self.health = next as u8;
    }

    /// Sets health, clamped into `[0, 100]`.
    #[inline]
    pub(crate) fn set_health(&mut self, health: u8) {
        self.health = health.min(MAX_HEALTH);
    }

    /// Records one unit of successful work.
    pub(crate) fn record_work(&mut self, changes: u64, activity: impl Into<Arc<str>>, delta: i16) {
        self.change_count = self.change_count.saturating_add(changes.max(1));
        self.note(activity);
        self.shift_health(delta);
        self.status = WorkerStatus::Working;
    }

    /// Records a fault: `status = error`, `error_count += 1`. Health is left alone.
    ///
    /// A suspended (`inactive`) worker stays inactive and is held in error until
    /// `reactivate`, so pause keeps every worker inactive.
    pub(crate) fn record_fault(&mut self) {
        if self.status == WorkerStatus::Inactive {
            self.held_in_error = true;
        } else {
            self.status = WorkerStatus::Error;
        }
        self.error_count = self.error_count.saturating_add(1);
        self.note(labels::ERROR_OCCURRED);
    }

    /// Returns true if the recovery rule applies to this worker.
    #[inline]
    pub(crate) fn needs_recovery(&self, threshold: u8) -> bool {
        self.status == WorkerStatus::Error && self.health < threshold
    }

    /// Brings an errored worker back to `active` at the given health.
    pub(crate) fn recover(&mut self, health: u8) {
        self.status = WorkerStatus::Active;
        self.set_health(health);
        self.note(labels::AUTO_RECOVERED);
    }

    /// Lifecycle: `start()`.
    pub(crate) fn activate(&mut self) {
        self.status = WorkerStatus::Active;
        self.health = MAX_HEALTH;
        self.error_count = 0;
        self.held_in_error = false;
        self.note(labels::SYSTEM_STARTED);
    }

    /// Lifecycle: `pause()`. Remembers an `error` status so resume cannot clear it.
    pub(crate) fn suspend(&mut self) {
        self.held_in_error = self.status == WorkerStatus::Error;
        self.status = WorkerStatus::Inactive;
        self.note(labels::SYSTEM_PAUSED);
    }

    /// Lifecycle: `resume()`.
    pub(crate) fn reactivate(&mut self) {
        self.status = if self.held_in_error {
            WorkerStatus::Error
        } else {
            WorkerStatus::Active
        };
        self.held_in_error = false;
        self.note(labels::SYSTEM_RESUMED);
    }

    /// Lifecycle: `stop()`.
    pub(crate) fn deactivate(&mut self) {
        self.status = WorkerStatus::Inactive;
        self.held_in_error = false;
        self.note(labels::SYSTEM_STOPPED);
    }
}
