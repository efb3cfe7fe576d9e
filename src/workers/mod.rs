//! Worker pool data model.
//!
//! ## Contents
//! - [`WorkerRecord`], [`WorkerStatus`], [`WorkerDef`] one worker's identity and state
//! - [`Snapshot`], [`SupervisorState`] the shared runtime state / observer copy
//! - [`default_roster`] the eight built-in workers
//! - [`labels`] fixed `last_activity` markers

pub mod labels;
mod record;
mod roster;
mod snapshot;

pub use record::{WorkerDef, WorkerRecord, WorkerStatus, MAX_HEALTH};
pub use roster::default_roster;
pub use snapshot::{Snapshot, SupervisorState};
