//! # Point-in-time view of the pool and supervisor counters.
//!
//! [`Snapshot`] is both the shape of the shared runtime state (held behind the
//! supervisor lock) and the read-only copy handed to observers. Cloning it is
//! cheap: the pool is small and string fields are `Arc<str>`.

use std::time::SystemTime;

use serde::Serialize;

use super::record::{WorkerRecord, WorkerStatus};

/// Supervisor-level counters and flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupervisorState {
    /// True from `start()` until `stop()`.
    pub is_running: bool,
    /// Meaningful only while running.
    pub is_paused: bool,
    /// One per work tick, never reset.
    pub total_changes: u64,
    /// Mean worker health as of the last health tick.
    pub system_health: f64,
    /// Uptime ticks observed while running and unpaused.
    pub uptime_seconds: u64,
    /// Time of the most recent heartbeat.
    pub last_heartbeat: Option<SystemTime>,
}

impl SupervisorState {
    /// Formats `uptime_seconds` as `HH:MM:SS` (hours are not wrapped).
    ///
    /// # Example
    /// ```
    /// use workvisor::SupervisorState;
    ///
    /// let mut state = SupervisorState::default();
    /// state.uptime_seconds = 3_725;
    /// assert_eq!(state.uptime_display(), "01:02:05");
    /// ```
    pub fn uptime_display(&self) -> String {
        let secs = self.uptime_seconds;
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    /// Clears the run flags and the per-run counters; `total_changes` survives.
    pub(crate) fn reset_run(&mut self) {
        self.is_running = false;
        self.is_paused = false;
        self.system_health = 100.0;
        self.uptime_seconds = 0;
    }
}

impl Default for SupervisorState {
    fn default() -> Self {
        Self {
            is_running: false,
            is_paused: false,
            total_changes: 0,
            system_health: 100.0,
            uptime_seconds: 0,
            last_heartbeat: None,
        }
    }
}

/// Workers plus supervisor state, as one consistent copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Every worker, in pool order.
    pub workers: Vec<WorkerRecord>,
    /// Supervisor counters and flags.
    pub supervisor: SupervisorState,
}

impl Snapshot {
    pub(crate) fn new(workers: Vec<WorkerRecord>) -> Self {
        Self {
            workers,
            supervisor: SupervisorState::default(),
        }
    }

    /// Looks a worker up by id.
    pub fn worker(&self, id: &str) -> Option<&WorkerRecord> {
        self.workers.iter().find(|w| &*w.id == id)
    }

    pub(crate) fn worker_mut(&mut self, id: &str) -> Option<&mut WorkerRecord> {
        self.workers.iter_mut().find(|w| &*w.id == id)
    }

    /// Number of workers whose status is anything but `inactive`.
    pub fn active_workers(&self) -> usize {
        self.workers
            .iter()
            .filter(|w| w.status != WorkerStatus::Inactive)
            .count()
    }

    /// Mean worker health, or `None` for an empty pool.
    pub fn mean_health(&self) -> Option<f64> {
        if self.workers.is_empty() {
            return None;
        }
        let sum: u64 = self.workers.iter().map(|w| u64::from(w.health)).sum();
        Some(sum as f64 / self.workers.len() as f64)
    }

    /// True while running and not paused.
    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.supervisor.is_running && !self.supervisor.is_paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workers::{default_roster, WorkerDef};

    fn pool() -> Snapshot {
        Snapshot::new(default_roster().into_iter().map(WorkerRecord::new).collect())
    }

    #[test]
    fn uptime_display_pads_fields() {
        let mut state = SupervisorState::default();
        assert_eq!(state.uptime_display(), "00:00:00");
        state.uptime_seconds = 59;
        assert_eq!(state.uptime_display(), "00:00:59");
        state.uptime_seconds = 360_000;
        assert_eq!(state.uptime_display(), "100:00:00");
    }

    #[test]
    fn mean_health_of_empty_pool_is_none() {
        assert_eq!(Snapshot::new(Vec::new()).mean_health(), None);
    }

    #[test]
    fn mean_health_and_active_count() {
        let mut snap = pool();
        assert_eq!(snap.active_workers(), 0);
        snap.workers[0].activate();
        snap.workers[1].activate();
        snap.workers[1].set_health(60);
        assert_eq!(snap.active_workers(), 2);
        assert_eq!(snap.mean_health(), Some(95.0));
    }

    #[test]
    fn lookup_by_id() {
        let snap = Snapshot::new(vec![WorkerRecord::new(WorkerDef::new("a", "A", ""))]);
        assert!(snap.worker("a").is_some());
        assert!(snap.worker("b").is_none());
    }

    #[test]
    fn reset_run_keeps_total_changes() {
        let mut state = SupervisorState {
            is_running: true,
            is_paused: true,
            total_changes: 7,
            system_health: 42.0,
            uptime_seconds: 11,
            last_heartbeat: None,
        };
        state.reset_run();
        assert_eq!(state.total_changes, 7);
        assert_eq!(state.uptime_seconds, 0);
        assert_eq!(state.system_health, 100.0);
        assert!(!state.is_running && !state.is_paused);
    }
}
