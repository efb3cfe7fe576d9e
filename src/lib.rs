//! # workvisor
//!
//! **Workvisor** is a continuous, self-healing worker supervisor for tokio.
//!
//! It keeps a fixed pool of abstract workers busy through periodic drivers, tracks
//! their health, and automatically recovers degraded workers. The crate owns the
//! supervision contract (lifecycle, health, recovery, timing); what a "unit of
//! work" means is left to pluggable policies.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   start() / pause() / resume() / stop()        snapshot() / watch()
//!                  │                                    ▲
//!                  ▼                                    │
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Supervisor (lifecycle state machine)                             │
//! │  - Shared: Mutex<Snapshot> (workers + counters), watch sender     │
//! │  - DriverSet: one tokio task per driver, CancellationToken        │
//! │  - Bus ──► event listener ──► SubscriberSet                       │
//! └──────┬──────────────┬──────────────────┬──────────────────┬───────┘
//!        ▼              ▼                  ▼                  ▼
//!  ┌───────────┐  ┌──────────────┐  ┌───────────────┐  ┌──────────────┐
//!  │ WorkCycle │  │HealthMonitor │  │ UptimeTracker │  │  Heartbeat   │
//!  │  (2s)     │  │   (5s)       │  │    (1s)       │  │   (10s)      │
//!  │ respects  │  │ ignores      │  │ respects      │  │ ignores      │
//!  │ pause     │  │ pause        │  │ pause         │  │ pause        │
//!  └─────┬─────┘  └──────┬───────┘  └──────┬────────┘  └──────┬───────┘
//!        │ publish       │ publish         │                  │ publish
//!        ▼               ▼                 ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Bus (broadcast channel)                    │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                         SubscriberSet (per-sub queues)
//!                         ┌─────────┼─────────┐
//!                         ▼         ▼         ▼
//!                     LogWriter   sub2 ...   subN
//! ```
//!
//! ### Worker lifecycle
//! ```text
//!             start()/resume()               work tick ok
//! inactive ─────────────────────► active ─────────────────► working
//!    ▲                              ▲  │                      │
//!    │ pause()/stop()               │  └───── fault ──────────┤
//!    └──────────────────────────────┼──────────────────────► error
//!                                   │                         │
//!                                   └── recovery (health<50) ─┘
//! ```
//! `error` is left only through the health monitor's recovery rule.
//!
//! ## Features
//! | Area              | Description                                               | Key types / traits                          |
//! |-------------------|-----------------------------------------------------------|---------------------------------------------|
//! | **Supervision**   | Lifecycle commands, drivers, observation interface.       | [`Supervisor`], [`SupervisorBuilder`]       |
//! | **Data model**    | Worker records and point-in-time snapshots.               | [`WorkerRecord`], [`Snapshot`]              |
//! | **Policies**      | Health drift, activity labels, fault injection.           | [`HealthDrift`], [`Activity`], [`FaultPolicy`] |
//! | **Subscriber API**| Hook into runtime events (logging, metrics, alerts).      | [`Subscribe`]                               |
//! | **Errors**        | Typed rejections and faults.                              | [`ControlError`], [`WorkerFault`]           |
//! | **Configuration** | Periods, recovery rule, bus capacity.                     | [`Config`]                                  |
//!
//! ## Optional features
//! - `logging` (default): exports the built-in [`LogWriter`] subscriber.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use workvisor::{Config, Supervisor, WorkerStatus};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = Config::default();
//!     cfg.health_period = Duration::from_millis(30);
//!
//!     let sup = Supervisor::builder(cfg).build()?;
//!     sup.start().await?;
//!
//!     // An external collaborator reports a badly degraded worker.
//!     sup.report_fault("network-agent", 30)?;
//!     tokio::time::sleep(Duration::from_millis(50)).await;
//!
//!     let snap = sup.snapshot();
//!     let worker = snap.worker("network-agent").unwrap();
//!     assert_eq!(worker.status, WorkerStatus::Active);
//!     assert_eq!(worker.health, 75);
//!
//!     sup.stop().await?;
//!     Ok(())
//! }
//! ```

mod core;
mod drivers;
mod error;
mod events;
mod policies;
mod subscribers;
mod workers;

// ---- Public re-exports ----

pub use crate::core::{Config, Supervisor, SupervisorBuilder};
pub use error::{BuildError, ControlError, RuntimeError, WorkerFault};
pub use events::{Event, EventKind};
pub use policies::{Activity, ActivityCatalog, FaultPolicy, HealthDrift, NeverFault, RandomFault};
pub use subscribers::Subscribe;
pub use workers::{
    default_roster, labels, Snapshot, SupervisorState, WorkerDef, WorkerRecord, WorkerStatus,
    MAX_HEALTH,
};

// Optional: expose a simple built-in logger subscriber.
// Enabled by default; disable with `default-features = false`.
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
