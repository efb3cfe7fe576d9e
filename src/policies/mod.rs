//! Work cycle policies.
//!
//! This module groups the knobs that shape **what happens to a worker** on a work
//! tick, as opposed to **when** ticks happen (that lives in [`Config`](crate::Config)).
//!
//! ## Contents
//! - [`HealthDrift`]   signed health step per successful tick
//! - [`Activity`]      label recorded as `last_activity` ([`ActivityCatalog`] by default)
//! - [`FaultPolicy`]   fault injection seam ([`NeverFault`] by default, [`RandomFault`])
//!
//! ## Quick wiring
//! ```text
//! SupervisorBuilder
//!   .with_drift(HealthDrift)
//!   .with_activity(impl Activity)
//!   .with_faults(impl FaultPolicy)
//!      └─► drivers::WorkCycle consults all three for every eligible worker
//! ```

mod activity;
mod drift;
mod fault;

pub use activity::{Activity, ActivityCatalog};
pub use drift::HealthDrift;
pub use fault::{FaultPolicy, NeverFault, RandomFault};
