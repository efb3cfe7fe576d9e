//! Fixed `last_activity` markers written by lifecycle transitions and drivers.
//!
//! Work ticks record labels chosen by an [`Activity`](crate::Activity) strategy;
//! everything else uses one of these.

/// Initial activity of a freshly constructed worker.
pub const NOT_STARTED: &str = "Not started";
/// Set on every worker by `start()`.
pub const SYSTEM_STARTED: &str = "System Started";
/// Set on every worker by `pause()`.
pub const SYSTEM_PAUSED: &str = "System Paused";
/// Set on every worker by `resume()`.
pub const SYSTEM_RESUMED: &str = "System Resumed";
/// Set on every worker by `stop()`.
pub const SYSTEM_STOPPED: &str = "System Stopped";
/// Set when a worker enters `error`.
pub const ERROR_OCCURRED: &str = "Error occurred";
/// Set by the health monitor recovery rule.
pub const AUTO_RECOVERED: &str = "Auto-recovered";
