//! # Driver: one periodically ticking unit of the runtime.
//!
//! Every driver (work cycle, health monitor, uptime tracker, heartbeat) runs as its
//! own tokio task built from the same loop:
//!
//! ```text
//! DriverSet::launch() ──► tokio::spawn(run(driver, shared, token))
//!
//! loop {
//!   ├─► select! (biased)
//!   │     ├─ token.cancelled() ─► exit
//!   │     └─ ticker.tick()     ─► continue below
//!   ├─► lock shared state, clone into a draft
//!   ├─► catch_unwind(driver.tick(&mut draft))
//!   │       ├─ Ok(events) ─► commit draft, notify watchers (if driver.notifies())
//!   │       │                publish events
//!   │       └─ Err(panic) ─► drop draft, log + publish DriverPanicked
//!   └─► next tick
//! }
//! ```
//!
//! ## Rules
//! - First tick fires one full period after launch (no immediate tick).
//! - Missed ticks are skipped, never burst.
//! - A panicking tick never kills the driver and never commits partial state.
//! - [`DriverSet::shutdown`] returns only after every driver task has exited, so no
//!   tick can run afterwards.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use crate::core::shared::Shared;
use crate::events::Event;
use crate::subscribers::panic_message;
use crate::workers::Snapshot;

/// A periodically ticking unit operating on the shared state.
pub(crate) trait Driver: Send + Sync + 'static {
    /// Stable name (for logs/events).
    fn name(&self) -> &'static str;

    /// Tick period.
    fn period(&self) -> Duration;

    /// Performs one tick on `state` and returns the events to publish once the
    /// tick is committed.
    fn tick(&self, state: &mut Snapshot) -> Vec<Event>;

    /// Whether watchers receive a fresh snapshot after each tick.
    fn notifies(&self) -> bool {
        false
    }
}

/// Runs one tick of `driver` against the shared state.
pub(crate) fn run_tick(driver: &dyn Driver, shared: &Shared) {
    let mut guard = shared.lock();
    let mut draft = guard.clone();

    match panic::catch_unwind(AssertUnwindSafe(|| driver.tick(&mut draft))) {
        Ok(events) => {
            *guard = draft;
            if driver.notifies() {
                shared.notify(&guard);
            }
            drop(guard);
            for ev in events {
                shared.publish(ev);
            }
        }
        Err(payload) => {
            drop(guard);
            let info = panic_message(&*payload);
            error!(driver = driver.name(), panic = %info, "driver tick panicked; state left unchanged");
            shared.publish(Event::driver_panicked(driver.name(), &info));
        }
    }
}

/// Driver task body: ticks until `token` is cancelled.
async fn run(driver: Arc<dyn Driver>, shared: Arc<Shared>, token: CancellationToken) {
    let period = driver.period();
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }
        run_tick(driver.as_ref(), &shared);
    }
}

/// Handles of one launched set of drivers.
pub(crate) struct DriverSet {
    token: CancellationToken,
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl DriverSet {
    /// Spawns one task per driver. Must be called from within a tokio runtime.
    pub(crate) fn launch(drivers: &[Arc<dyn Driver>], shared: &Arc<Shared>) -> Self {
        let token = CancellationToken::new();
        let handles = drivers
            .iter()
            .map(|driver| {
                let handle = tokio::spawn(run(
                    Arc::clone(driver),
                    Arc::clone(shared),
                    token.child_token(),
                ));
                (driver.name(), handle)
            })
            .collect();
        Self { token, handles }
    }

    /// Cancels every driver and waits until all of them have exited.
    pub(crate) async fn shutdown(mut self) {
        self.token.cancel();
        for (name, handle) in self.handles.drain(..) {
            if let Err(e) = handle.await {
                warn!(driver = name, error = %e, "driver task did not exit cleanly");
            }
        }
    }
}

impl Drop for DriverSet {
    fn drop(&mut self) {
        self.token.cancel();
        for (_, handle) in &self.handles {
            handle.abort();
        }
    }
}
