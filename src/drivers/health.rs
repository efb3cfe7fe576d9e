//! # HealthMonitor: recovery rule plus aggregate health.
//!
//! Runs regardless of pause: health is a property of worker state, not of work.
//!
//! ## Tick
//! 1. every worker with `status == error && health < threshold`
//!    ─► `active`, `health = recovery_health`, `"Auto-recovered"`
//! 2. `system_health` = mean of all worker healths (empty pool keeps the old value)
//!
//! Recovery runs first so the published `system_health` is exactly the mean of the
//! healths in the same committed snapshot.

use std::sync::Arc;
use std::time::Duration;

use crate::core::driver::Driver;
use crate::core::Config;
use crate::events::{Event, EventKind};
use crate::workers::Snapshot;

pub(crate) struct HealthMonitor {
    period: Duration,
    threshold: u8,
    recovery_health: u8,
}

impl HealthMonitor {
    pub(crate) fn new(cfg: &Config) -> Self {
        Self {
            period: cfg.health_period(),
            threshold: cfg.recovery_threshold,
            recovery_health: cfg.recovery_health(),
        }
    }
}

impl Driver for HealthMonitor {
    fn name(&self) -> &'static str {
        "health-monitor"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&self, state: &mut Snapshot) -> Vec<Event> {
        let mut events = Vec::new();

        for worker in state.workers.iter_mut() {
            if worker.needs_recovery(self.threshold) {
                worker.recover(self.recovery_health);
                events.push(
                    Event::new(EventKind::WorkerRecovered)
                        .with_worker(Arc::clone(&worker.id))
                        .with_value(f64::from(worker.health)),
                );
            }
        }

        if let Some(mean) = state.mean_health() {
            state.supervisor.system_health = mean;
        }
        events.push(
            Event::new(EventKind::HealthChecked).with_value(state.supervisor.system_health),
        );
        events
    }

    fn notifies(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workers::{default_roster, WorkerRecord, WorkerStatus};

    fn running_pool() -> Snapshot {
        let mut snap = Snapshot::new(default_roster().into_iter().map(WorkerRecord::new).collect());
        snap.supervisor.is_running = true;
        snap.workers.iter_mut().for_each(WorkerRecord::activate);
        snap
    }

    #[test]
    fn low_health_error_is_recovered() {
        let mut snap = running_pool();
        snap.workers[2].set_health(40);
        snap.workers[2].record_fault();

        let events = HealthMonitor::new(&Config::default()).tick(&mut snap);

        let w = &snap.workers[2];
        assert_eq!(w.status, WorkerStatus::Active);
        assert_eq!(w.health, 75);
        assert_eq!(&*w.last_activity, "Auto-recovered");
        assert_eq!(w.error_count, 1);
        assert_eq!(events[0].kind, EventKind::WorkerRecovered);
        assert_eq!(events[0].worker.as_deref(), Some("performance-agent"));
    }

    #[test]
    fn healthy_error_and_active_workers_are_left_alone() {
        let mut snap = running_pool();
        snap.workers[0].set_health(50);
        snap.workers[0].record_fault();
        snap.workers[1].set_health(10);
        let before = snap.workers.clone();

        HealthMonitor::new(&Config::default()).tick(&mut snap);

        assert_eq!(snap.workers, before);
    }

    #[test]
    fn system_health_is_the_mean_after_recovery() {
        let mut snap = running_pool();
        snap.workers[0].set_health(20);
        snap.workers[0].record_fault();
        snap.workers[1].set_health(33);

        let events = HealthMonitor::new(&Config::default()).tick(&mut snap);

        let expected = snap.mean_health().unwrap();
        assert!((snap.supervisor.system_health - expected).abs() < 1e-9);
        assert!((expected - (75.0 + 33.0 + 600.0) / 8.0).abs() < 1e-9);
        assert_eq!(events.last().unwrap().value, Some(snap.supervisor.system_health));
    }

    #[test]
    fn empty_pool_keeps_previous_health() {
        let mut snap = Snapshot::new(Vec::new());
        snap.supervisor.system_health = 88.0;
        HealthMonitor::new(&Config::default()).tick(&mut snap);
        assert_eq!(snap.supervisor.system_health, 88.0);
    }
}
