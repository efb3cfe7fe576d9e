use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::driver::Driver;
use super::shared::Shared;
use super::supervisor::Supervisor;
use crate::{
    core::Config,
    drivers::{HealthMonitor, HeartbeatEmitter, UptimeTracker, WorkCycle},
    error::BuildError,
    events::Bus,
    policies::{Activity, ActivityCatalog, FaultPolicy, HealthDrift, NeverFault},
    subscribers::{Subscribe, SubscriberSet},
    workers::{default_roster, Snapshot, WorkerDef, WorkerRecord},
};

/// Builder for constructing a [`Supervisor`] with optional features.
pub struct SupervisorBuilder {
    cfg: Config,
    workers: Option<Vec<WorkerDef>>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    drift: HealthDrift,
    activity: Arc<dyn Activity>,
    faults: Arc<dyn FaultPolicy>,
}

impl SupervisorBuilder {
    /// Creates a new builder with the given configuration.
    ///
    /// Defaults: the eight-worker [`default_roster`], [`HealthDrift::default`],
    /// [`ActivityCatalog::default`], [`NeverFault`], no subscribers.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            workers: None,
            subscribers: Vec::new(),
            drift: HealthDrift::default(),
            activity: Arc::new(ActivityCatalog::default()),
            faults: Arc::new(NeverFault),
        }
    }

    /// Replaces the default roster with the given workers (pool order is kept).
    pub fn with_workers(mut self, workers: impl IntoIterator<Item = WorkerDef>) -> Self {
        self.workers = Some(workers.into_iter().collect());
        self
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive runtime events through dedicated workers with bounded queues.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Sets the health drift applied on successful work ticks.
    pub fn with_drift(mut self, drift: HealthDrift) -> Self {
        self.drift = drift;
        self
    }

    /// Sets the activity label strategy.
    pub fn with_activity(mut self, activity: impl Activity) -> Self {
        self.activity = Arc::new(activity);
        self
    }

    /// Sets the fault injection policy.
    pub fn with_faults(mut self, faults: impl FaultPolicy) -> Self {
        self.faults = Arc::new(faults);
        self
    }

    /// Builds the supervisor in the `Stopped` state.
    ///
    /// Validates the pool, wires the event bus to the subscriber set and spawns the
    /// event listener, so it must be called from within a tokio runtime.
    pub fn build(self) -> Result<Arc<Supervisor>, BuildError> {
        let defs = self.workers.unwrap_or_else(default_roster);
        validate(&defs)?;

        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let subs = SubscriberSet::new(self.subscribers, bus.clone());
        let lifetime = CancellationToken::new();
        spawn_event_listener(&bus, subs, lifetime.clone());

        let workers = defs.into_iter().map(WorkerRecord::new).collect();
        let shared = Arc::new(Shared::new(Snapshot::new(workers), bus));

        let drivers: Vec<Arc<dyn Driver>> = vec![
            Arc::new(WorkCycle::new(
                &self.cfg,
                self.drift,
                self.activity,
                self.faults,
            )),
            Arc::new(HealthMonitor::new(&self.cfg)),
            Arc::new(UptimeTracker::new(&self.cfg)),
            Arc::new(HeartbeatEmitter::new(&self.cfg)),
        ];

        Ok(Arc::new(Supervisor::new_internal(
            self.cfg, shared, drivers, lifetime,
        )))
    }
}

fn validate(defs: &[WorkerDef]) -> Result<(), BuildError> {
    if defs.is_empty() {
        return Err(BuildError::EmptyPool);
    }
    let mut seen = HashSet::with_capacity(defs.len());
    for def in defs {
        if !seen.insert(&*def.id) {
            return Err(BuildError::DuplicateWorker {
                id: def.id.to_string(),
            });
        }
    }
    Ok(())
}

/// Subscribes to the bus and forwards events to the subscriber set until `lifetime` ends.
fn spawn_event_listener(bus: &Bus, subs: SubscriberSet, lifetime: CancellationToken) {
    if subs.is_empty() {
        return;
    }
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                msg = rx.recv() => match msg {
                    Ok(ev) => subs.emit(ev),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "event listener lagged behind the bus");
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = lifetime.cancelled() => break,
            }
        }
        subs.shutdown().await;
    });
}
