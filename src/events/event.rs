//! # Runtime events emitted by the supervisor and its drivers.
//!
//! The [`EventKind`] enum classifies event types across four categories:
//! - **Lifecycle events**: supervisor state machine transitions
//! - **Driver events**: outcome of one driver tick
//! - **Worker events**: per-worker faults and recoveries
//! - **Subscriber events**: delivery problems in the fan-out layer
//!
//! The [`Event`] struct carries additional metadata such as timestamps, worker id,
//! reasons and a numeric value whose meaning depends on the kind.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are delivered out of order.
//!
//! ## Example
//! ```rust
//! use workvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::WorkerRecovered)
//!     .with_worker("ui-agent")
//!     .with_value(75.0);
//!
//! assert_eq!(ev.kind, EventKind::WorkerRecovered);
//! assert_eq!(ev.worker.as_deref(), Some("ui-agent"));
//! assert_eq!(ev.value, Some(75.0));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Lifecycle events ===
    /// `start()` succeeded; drivers launched.
    SupervisorStarted,

    /// `pause()` succeeded.
    SupervisorPaused,

    /// `resume()` succeeded.
    SupervisorResumed,

    /// `stop()` succeeded; every driver has terminated.
    ///
    /// Sets:
    /// - `value`: `total_changes` at stop time
    SupervisorStopped,

    /// OS termination signal observed by `run_until_shutdown`.
    ShutdownRequested,

    // === Driver events ===
    /// One work cycle tick completed.
    ///
    /// Sets:
    /// - `value`: `total_changes` after the tick
    WorkTick,

    /// One health monitor tick completed.
    ///
    /// Sets:
    /// - `value`: recomputed `system_health`
    HealthChecked,

    /// Liveness heartbeat.
    Heartbeat,

    /// A driver tick panicked; state was left in its last-good form.
    ///
    /// Sets:
    /// - `reason`: `driver=<name> panic=<message>`
    DriverPanicked,

    // === Worker events ===
    /// A worker entered `error` during a work tick or via `report_fault`.
    ///
    /// Sets:
    /// - `worker`: worker id
    /// - `reason`: fault message
    WorkerFaulted,

    /// The recovery rule returned a worker to `active`.
    ///
    /// Sets:
    /// - `worker`: worker id
    /// - `value`: restored health
    WorkerRecovered,

    // === Subscriber events ===
    /// Subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `worker`: subscriber name
    /// - `reason`: panic info/message
    SubscriberPanicked,

    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `worker`: subscriber name
    /// - `reason`: reason string (e.g., "full", "closed")
    SubscriberOverflow,
}

impl EventKind {
    /// Short stable label (kebab-case) for logs.
    pub fn as_label(self) -> &'static str {
        match self {
            EventKind::SupervisorStarted => "started",
            EventKind::SupervisorPaused => "paused",
            EventKind::SupervisorResumed => "resumed",
            EventKind::SupervisorStopped => "stopped",
            EventKind::ShutdownRequested => "shutdown-requested",
            EventKind::WorkTick => "work-tick",
            EventKind::HealthChecked => "health-checked",
            EventKind::Heartbeat => "heartbeat",
            EventKind::DriverPanicked => "driver-panicked",
            EventKind::WorkerFaulted => "worker-faulted",
            EventKind::WorkerRecovered => "worker-recovered",
            EventKind::SubscriberPanicked => "subscriber-panicked",
            EventKind::SubscriberOverflow => "subscriber-overflow",
        }
    }
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Worker id (or subscriber name for subscriber events).
    pub worker: Option<Arc<str>>,
    /// Human-readable reason (faults, panics, overflow details).
    pub reason: Option<Arc<str>>,
    /// Kind-specific numeric payload.
    pub value: Option<f64>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            worker: None,
            reason: None,
            value: None,
        }
    }

    /// Attaches a worker id.
    #[inline]
    pub fn with_worker(mut self, worker: impl Into<Arc<str>>) -> Self {
        self.worker = Some(worker.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a numeric payload.
    #[inline]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Creates a driver panic event.
    pub fn driver_panicked(driver: &'static str, info: &str) -> Self {
        Event::new(EventKind::DriverPanicked).with_reason(format!("driver={driver} panic={info}"))
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_worker(subscriber)
            .with_reason(format!("subscriber={subscriber} reason={reason}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_worker(subscriber)
            .with_reason(info)
    }
}
