//! # LogWriter: event printer over `tracing`
//!
//! A minimal subscriber that renders incoming [`Event`]s as `tracing` records
//! under the `workvisor::events` target. Install any `tracing` subscriber to see them.
//!
//! ## Example output
//! ```text
//! INFO  workvisor::events: [started]
//! DEBUG workvisor::events: [work-tick] total_changes=12
//! WARN  workvisor::events: [worker-faulted] worker="code-agent" reason="injected fault"
//! INFO  workvisor::events: [worker-recovered] worker="code-agent" health=75
//! DEBUG workvisor::events: [heartbeat]
//! ```

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let label = e.kind.as_label();
        let worker = e.worker.as_deref().unwrap_or("-");
        let reason = e.reason.as_deref().unwrap_or("-");

        match e.kind {
            EventKind::SupervisorStarted
            | EventKind::SupervisorPaused
            | EventKind::SupervisorResumed
            | EventKind::ShutdownRequested => {
                info!(target: "workvisor::events", "[{label}]");
            }
            EventKind::SupervisorStopped => {
                info!(target: "workvisor::events", "[{label}] total_changes={:?}", e.value);
            }
            EventKind::WorkTick => {
                debug!(target: "workvisor::events", "[{label}] total_changes={:?}", e.value);
            }
            EventKind::HealthChecked => {
                debug!(target: "workvisor::events", "[{label}] system_health={:?}", e.value);
            }
            EventKind::Heartbeat => {
                debug!(target: "workvisor::events", "[{label}]");
            }
            EventKind::WorkerFaulted => {
                warn!(target: "workvisor::events", "[{label}] worker={worker:?} reason={reason:?}");
            }
            EventKind::WorkerRecovered => {
                info!(target: "workvisor::events", "[{label}] worker={worker:?} health={:?}", e.value);
            }
            EventKind::SubscriberOverflow => {
                warn!(target: "workvisor::events", "[{label}] subscriber={worker:?} reason={reason:?}");
            }
            EventKind::DriverPanicked | EventKind::SubscriberPanicked => {
                error!(target: "workvisor::events", "[{label}] {reason}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
