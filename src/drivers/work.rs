//! # WorkCycle: advances every eligible worker by one unit of work.
//!
//! ## Tick
//! ```text
//! if !running || paused ─► no-op (not even total_changes)
//! for worker in pool where status ∈ {active, working}:
//!   FaultPolicy::check(worker)
//!     ├─ Err(fault) ─► status=error, error_count+=1, "Error occurred", health kept
//!     │                emit WorkerFaulted
//!     └─ Ok         ─► change_count += rand[1, max_change_step]
//!                      last_activity = Activity::label(worker)
//!                      health += HealthDrift::sample()   (clamped)
//!                      status = working
//! total_changes += 1
//! emit WorkTick
//! ```
//!
//! A worker in `error` is not eligible, so this driver can never move it back to
//! `active`; only the health monitor can.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::core::driver::Driver;
use crate::core::Config;
use crate::events::{Event, EventKind};
use crate::policies::{Activity, FaultPolicy, HealthDrift};
use crate::workers::Snapshot;

pub(crate) struct WorkCycle {
    period: Duration,
    max_step: u64,
    drift: HealthDrift,
    activity: Arc<dyn Activity>,
    faults: Arc<dyn FaultPolicy>,
}

impl WorkCycle {
    pub(crate) fn new(
        cfg: &Config,
        drift: HealthDrift,
        activity: Arc<dyn Activity>,
        faults: Arc<dyn FaultPolicy>,
    ) -> Self {
        Self {
            period: cfg.work_period(),
            max_step: cfg.max_change_step(),
            drift,
            activity,
            faults,
        }
    }
}

impl Driver for WorkCycle {
    fn name(&self) -> &'static str {
        "work-cycle"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&self, state: &mut Snapshot) -> Vec<Event> {
        if !state.is_live() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let mut rng = rand::rng();

        for worker in state.workers.iter_mut() {
            if !worker.status.is_eligible() {
                continue;
            }
            match self.faults.check(worker) {
                Err(fault) => {
                    worker.record_fault();
                    events.push(
                        Event::new(EventKind::WorkerFaulted)
                            .with_worker(Arc::clone(&worker.id))
                            .with_reason(fault.reason),
                    );
                }
                Ok(()) => {
                    let changes = rng.random_range(1..=self.max_step);
                    let label = self.activity.label(worker);
                    worker.record_work(changes, label, self.drift.sample());
                }
            }
        }

        let sup = &mut state.supervisor;
        sup.total_changes = sup.total_changes.saturating_add(1);
        events.push(Event::new(EventKind::WorkTick).with_value(sup.total_changes as f64));
        events
    }

    fn notifies(&self) -> bool {
        true
    }
}
