//! # UptimeTracker: counts ticks while running and unpaused.

use std::time::Duration;

use crate::core::driver::Driver;
use crate::core::Config;
use crate::events::Event;
use crate::workers::Snapshot;

pub(crate) struct UptimeTracker {
    period: Duration,
}

impl UptimeTracker {
    pub(crate) fn new(cfg: &Config) -> Self {
        Self {
            period: cfg.uptime_period(),
        }
    }
}

impl Driver for UptimeTracker {
    fn name(&self) -> &'static str {
        "uptime-tracker"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&self, state: &mut Snapshot) -> Vec<Event> {
        if state.is_live() {
            let sup = &mut state.supervisor;
            sup.uptime_seconds = sup.uptime_seconds.saturating_add(1);
        }
        Vec::new()
    }
}
