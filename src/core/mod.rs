//! Runtime core: orchestration and lifecycle.
//!
//! The public API from this module is [`Supervisor`], its [`SupervisorBuilder`] and
//! [`Config`].
//!
//! Internal modules:
//! - [`supervisor`]: lifecycle state machine and observation interface;
//! - [`builder`]: pool validation and wiring of bus, subscribers and drivers;
//! - [`driver`]: the shared periodic tick loop with panic isolation;
//! - [`shared`]: the single lock around pool state plus watch notifications;
//! - [`shutdown`]: cross-platform shutdown signal handling.

mod builder;
mod config;
pub(crate) mod driver;
mod shared;
mod shutdown;
mod supervisor;

pub use builder::SupervisorBuilder;
pub use config::Config;
pub use supervisor::Supervisor;
