//! # HeartbeatEmitter: liveness signal for the host process.
//!
//! Ignores pause. Touches only `last_heartbeat`; never a worker.

use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::core::driver::Driver;
use crate::core::Config;
use crate::events::{Event, EventKind};
use crate::workers::Snapshot;

pub(crate) struct HeartbeatEmitter {
    period: Duration,
}

impl HeartbeatEmitter {
    pub(crate) fn new(cfg: &Config) -> Self {
        Self {
            period: cfg.heartbeat_period(),
        }
    }
}

impl Driver for HeartbeatEmitter {
    fn name(&self) -> &'static str {
        "heartbeat"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&self, state: &mut Snapshot) -> Vec<Event> {
        let ev = Event::new(EventKind::Heartbeat);
        state.supervisor.last_heartbeat = Some(ev.at);
        debug!(
            uptime = %state.supervisor.uptime_display(),
            active = state.active_workers(),
            "heartbeat"
        );
        vec![ev]
    }
}
