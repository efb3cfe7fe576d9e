//! # Supervisor: lifecycle state machine over the worker pool and its drivers.
//!
//! The [`Supervisor`] owns the shared pool state, the four periodic drivers and the
//! event listener that fans events out to the registered [`Subscribe`](crate::Subscribe) handlers.
//!
//! ## State machine
//! ```text
//!            start()              pause()
//! Stopped ───────────► Running ───────────► Running(paused)
//!    ▲                  │   ▲                    │
//!    │      stop()      │   └──── resume() ──────┘
//!    └──────────────────┴─────────── stop() ─────┘
//! ```
//!
//! | Command    | Valid from            | Rejection                      |
//! |------------|-----------------------|--------------------------------|
//! | `start`    | Stopped               | `AlreadyRunning`               |
//! | `pause`    | Running (unpaused)    | `NotRunning` / `AlreadyPaused` |
//! | `resume`   | Running (paused)      | `NotRunning` / `NotPaused`     |
//! | `stop`     | Running (any)         | `NotRunning`                   |
//! | `report_fault` | Running (any)     | `NotRunning` / `UnknownWorker` |
//!
//! A rejected command never mutates state.
//!
//! ## Stop guarantee
//! ```text
//! stop()
//!   ├─► DriverSet::shutdown(): cancel token, join every driver task
//!   └─► then: reset run flags, workers ─► inactive "System Stopped"
//! ```
//! Once `stop()` returns, no driver tick can run. Dropping the supervisor cancels
//! the drivers as well.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use workvisor::{Config, Supervisor, WorkerStatus};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = Config::default();
//!     cfg.work_period = Duration::from_millis(20);
//!
//!     let sup = Supervisor::builder(cfg).build()?;
//!     sup.start().await?;
//!     tokio::time::sleep(Duration::from_millis(50)).await;
//!
//!     let snap = sup.snapshot();
//!     assert!(snap.supervisor.total_changes >= 1);
//!
//!     sup.stop().await?;
//!     assert!(sup.snapshot().workers.iter().all(|w| w.status == WorkerStatus::Inactive));
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::driver::{Driver, DriverSet};
use crate::core::shared::Shared;
use crate::core::{shutdown, Config, SupervisorBuilder};
use crate::error::{ControlError, RuntimeError};
use crate::events::{Event, EventKind};
use crate::workers::Snapshot;

/// Coordinates the worker pool, its periodic drivers and event delivery.
pub struct Supervisor {
    cfg: Config,
    shared: Arc<Shared>,
    drivers: Vec<Arc<dyn Driver>>,
    /// Launched drivers; `Some` exactly while running.
    running: Mutex<Option<DriverSet>>,
    /// Cancels the event listener when the supervisor is dropped.
    lifetime: CancellationToken,
}

impl Supervisor {
    /// Returns a builder for the given configuration.
    pub fn builder(cfg: Config) -> SupervisorBuilder {
        SupervisorBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: Config,
        shared: Arc<Shared>,
        drivers: Vec<Arc<dyn Driver>>,
        lifetime: CancellationToken,
    ) -> Self {
        Self {
            cfg,
            shared,
            drivers,
            running: Mutex::new(None),
            lifetime,
        }
    }

    /// Runtime configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Activates every worker and launches the four drivers.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(&self) -> Result<(), ControlError> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return Err(ControlError::AlreadyRunning);
        }

        self.shared.apply(|s| {
            s.supervisor.is_running = true;
            s.supervisor.is_paused = false;
            s.workers.iter_mut().for_each(|w| w.activate());
            Ok(())
        })?;
        *running = Some(DriverSet::launch(&self.drivers, &self.shared));
        drop(running);

        info!(workers = self.shared.lock().workers.len(), "supervisor started");
        self.shared.publish(Event::new(EventKind::SupervisorStarted));
        Ok(())
    }

    /// Marks every worker inactive; work and uptime stop counting until `resume()`.
    pub fn pause(&self) -> Result<(), ControlError> {
        self.shared.apply(|s| {
            if !s.supervisor.is_running {
                return Err(ControlError::NotRunning);
            }
            if s.supervisor.is_paused {
                return Err(ControlError::AlreadyPaused);
            }
            s.supervisor.is_paused = true;
            s.workers.iter_mut().for_each(|w| w.suspend());
            Ok(())
        })?;

        info!("supervisor paused");
        self.shared.publish(Event::new(EventKind::SupervisorPaused));
        Ok(())
    }

    /// Reactivates every worker. Workers that were in `error` when paused stay in `error`.
    pub fn resume(&self) -> Result<(), ControlError> {
        self.shared.apply(|s| {
            if !s.supervisor.is_running {
                return Err(ControlError::NotRunning);
            }
            if !s.supervisor.is_paused {
                return Err(ControlError::NotPaused);
            }
            s.supervisor.is_paused = false;
            s.workers.iter_mut().for_each(|w| w.reactivate());
            Ok(())
        })?;

        info!("supervisor resumed");
        self.shared.publish(Event::new(EventKind::SupervisorResumed));
        Ok(())
    }

    /// Cancels and joins every driver, then resets the run state.
    pub async fn stop(&self) -> Result<(), ControlError> {
        let mut running = self.running.lock().await;
        let drivers = running.take().ok_or(ControlError::NotRunning)?;
        drivers.shutdown().await;

        let mut total_changes = 0;
        self.shared.apply(|s| {
            s.supervisor.reset_run();
            s.workers.iter_mut().for_each(|w| w.deactivate());
            total_changes = s.supervisor.total_changes;
            Ok(())
        })?;
        drop(running);

        info!(total_changes, "supervisor stopped");
        self.shared
            .publish(Event::new(EventKind::SupervisorStopped).with_value(total_changes as f64));
        Ok(())
    }

    /// Records a fault observed outside the work cycle.
    ///
    /// The worker enters `error` (`error_count += 1`) with its health set to
    /// `health` (clamped to 100). Whether it is later recovered depends only on the
    /// health monitor's rule. While paused the worker stays `inactive` and
    /// `resume()` puts it in `error`.
    ///
    /// Rejected with `NotRunning` while stopped, since `start()` resets every worker.
    pub fn report_fault(&self, id: &str, health: u8) -> Result<(), ControlError> {
        self.shared.apply(|s| {
            if !s.supervisor.is_running {
                return Err(ControlError::NotRunning);
            }
            let worker = s.worker_mut(id).ok_or_else(|| ControlError::UnknownWorker {
                id: id.to_string(),
            })?;
            worker.set_health(health);
            worker.record_fault();
            Ok(())
        })?;

        debug!(worker = id, health, "fault reported");
        self.shared.publish(
            Event::new(EventKind::WorkerFaulted)
                .with_worker(id)
                .with_reason("reported fault"),
        );
        Ok(())
    }

    /// Point-in-time copy of the pool and counters.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.snapshot()
    }

    /// Receiver that is updated after every work/health tick and every accepted command.
    pub fn watch(&self) -> watch::Receiver<Snapshot> {
        self.shared.watch()
    }

    /// True between a successful `start()` and the matching `stop()`.
    pub fn is_running(&self) -> bool {
        self.shared.lock().supervisor.is_running
    }

    /// Starts (if stopped), waits for an OS termination signal, then stops.
    ///
    /// Publishes [`EventKind::ShutdownRequested`] when the signal arrives.
    pub async fn run_until_shutdown(&self) -> Result<(), RuntimeError> {
        match self.start().await {
            Ok(()) | Err(ControlError::AlreadyRunning) => {}
            Err(e) => return Err(e.into()),
        }

        let signal = shutdown::wait_for_shutdown_signal().await;
        self.shared.publish(Event::new(EventKind::ShutdownRequested));

        match self.stop().await {
            Ok(()) | Err(ControlError::NotRunning) => {}
            Err(e) => return Err(e.into()),
        }
        signal.map_err(|source| RuntimeError::Signal { source })
    }
}

impl Drop for Supervisor {
    fn drop(&mut self) {
        // Dropping the set cancels and aborts every driver task.
        self.running.get_mut().take();
        self.lifetime.cancel();
    }
}
