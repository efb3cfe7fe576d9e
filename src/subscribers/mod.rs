//! # Event subscribers for the workvisor runtime.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out and
//! the built-in [`LogWriter`] for handling runtime events broadcast through the
//! [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Driver / Supervisor ── publish(Event) ──► Bus ──► event_listener ──► SubscriberSet
//!                                                                            │
//!                                                         ┌─────────┬────────┴┬───────┐
//!                                                         ▼         ▼         ▼       ▼
//!                                                      LogWriter  Metrics  Custom    ...
//! ```
//!
//! Subscribers observe *events*. Observers that want full state after every tick
//! should use [`Supervisor::watch`](crate::Supervisor::watch) instead.

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub(crate) use set::panic_message;
pub(crate) use set::SubscriberSet;
pub use subscribe::Subscribe;
