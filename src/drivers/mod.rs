//! The four periodic drivers.
//!
//! | Driver            | Default period | Respects pause | Mutates                              |
//! |-------------------|----------------|----------------|--------------------------------------|
//! | [`WorkCycle`]     | 2s             | yes            | workers, `total_changes`             |
//! | [`HealthMonitor`] | 5s             | no             | error workers, `system_health`       |
//! | [`UptimeTracker`] | 1s             | yes            | `uptime_seconds`                     |
//! | [`HeartbeatEmitter`] | 10s         | no             | `last_heartbeat`                     |
//!
//! All of them run on the shared loop in `core::driver`.

mod health;
mod heartbeat;
mod uptime;
mod work;

pub(crate) use health::HealthMonitor;
pub(crate) use heartbeat::HeartbeatEmitter;
pub(crate) use uptime::UptimeTracker;
pub(crate) use work::WorkCycle;
