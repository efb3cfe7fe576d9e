//! # Global runtime configuration.
//!
//! Provides [`Config`], the centralized settings for the supervisor runtime.
//!
//! Config is consumed once, by [`SupervisorBuilder`](crate::SupervisorBuilder), and
//! shared read-only with every driver afterwards.
//!
//! ## Sentinel values
//! - a zero period is clamped to 1ms (a zero-period ticker is invalid)
//! - `max_change_step = 0` is treated as 1 (work always records at least one change)
//! - `bus_capacity = 0` is clamped to 1

use std::time::Duration;

/// Smallest period a driver may tick at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Global configuration for the supervisor runtime.
///
/// Defines:
/// - **Driver periods**: work, health, uptime and heartbeat tickers
/// - **Work shape**: upper bound of changes recorded per worker per tick
/// - **Recovery rule**: health threshold and restored health value
/// - **Event system**: bus capacity for event delivery
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Period of the work cycle.
    pub work_period: Duration,

    /// Period of the health monitor.
    pub health_period: Duration,

    /// Period of the uptime tracker. Each tick adds one to `uptime_seconds`.
    pub uptime_period: Duration,

    /// Period of the heartbeat emitter.
    pub heartbeat_period: Duration,

    /// Upper bound (inclusive) of changes a worker records in one tick.
    ///
    /// The lower bound is always 1.
    pub max_change_step: u64,

    /// Workers in `error` with health strictly below this value are recovered.
    pub recovery_threshold: u8,

    /// Health assigned to a recovered worker.
    pub recovery_health: u8,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Slow receivers that lag behind more than `bus_capacity` messages observe
    /// `Lagged` and skip older items.
    pub bus_capacity: usize,
}

impl Config {
    /// Work cycle period, clamped to a minimum of 1ms.
    #[inline]
    pub fn work_period(&self) -> Duration {
        self.work_period.max(MIN_PERIOD)
    }

    /// Health monitor period, clamped to a minimum of 1ms.
    #[inline]
    pub fn health_period(&self) -> Duration {
        self.health_period.max(MIN_PERIOD)
    }

    /// Uptime tracker period, clamped to a minimum of 1ms.
    #[inline]
    pub fn uptime_period(&self) -> Duration {
        self.uptime_period.max(MIN_PERIOD)
    }

    /// Heartbeat period, clamped to a minimum of 1ms.
    #[inline]
    pub fn heartbeat_period(&self) -> Duration {
        self.heartbeat_period.max(MIN_PERIOD)
    }

    /// Change step upper bound, at least 1.
    #[inline]
    pub fn max_change_step(&self) -> u64 {
        self.max_change_step.max(1)
    }

    /// Recovered health, clamped into `[0, 100]`.
    #[inline]
    pub fn recovery_health(&self) -> u8 {
        self.recovery_health.min(100)
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `work_period = 2s`, `health_period = 5s`
    /// - `uptime_period = 1s`, `heartbeat_period = 10s`
    /// - `max_change_step = 2`
    /// - `recovery_threshold = 50`, `recovery_health = 75`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            work_period: Duration::from_secs(2),
            health_period: Duration::from_secs(5),
            uptime_period: Duration::from_secs(1),
            heartbeat_period: Duration::from_secs(10),
            max_change_step: 2,
            recovery_threshold: 50,
            recovery_health: 75,
            bus_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_are_clamped() {
        let cfg = Config {
            work_period: Duration::ZERO,
            max_change_step: 0,
            recovery_health: 200,
            bus_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.work_period(), Duration::from_millis(1));
        assert_eq!(cfg.max_change_step(), 1);
        assert_eq!(cfg.recovery_health(), 100);
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }

    #[test]
    fn defaults_match_reference_timings() {
        let cfg = Config::default();
        assert_eq!(cfg.work_period(), Duration::from_secs(2));
        assert_eq!(cfg.health_period(), Duration::from_secs(5));
        assert_eq!(cfg.uptime_period(), Duration::from_secs(1));
        assert_eq!(cfg.heartbeat_period(), Duration::from_secs(10));
        assert_eq!(cfg.recovery_threshold, 50);
        assert_eq!(cfg.recovery_health(), 75);
    }
}
