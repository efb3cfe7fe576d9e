//! # Fault injection seam for the work cycle.
//!
//! A [`FaultPolicy`] is consulted once per eligible worker per work tick. Returning
//! `Err` models a failure of that worker for that tick; the work cycle records it
//! (`status = error`, `error_count += 1`, health unchanged) and continues with the
//! next worker. Nothing about the fault reaches the caller of a tick.
//!
//! - [`NeverFault`] no worker ever faults (default)
//! - [`RandomFault`] each worker faults with a fixed probability

use rand::Rng;

use crate::error::WorkerFault;
use crate::workers::WorkerRecord;

/// Decides whether a worker faults on the current work tick.
pub trait FaultPolicy: Send + Sync + 'static {
    /// Returns `Err` if `worker` faults on this tick.
    fn check(&self, worker: &WorkerRecord) -> Result<(), WorkerFault>;
}

/// Never injects faults.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverFault;

impl FaultPolicy for NeverFault {
    fn check(&self, _worker: &WorkerRecord) -> Result<(), WorkerFault> {
        Ok(())
    }
}

/// Faults each worker independently with the given probability.
#[derive(Clone, Copy, Debug)]
pub struct RandomFault {
    probability: f64,
}

impl RandomFault {
    /// Creates the policy; the probability is clamped to `[0, 1]` (non-finite → 0).
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { probability }
    }

    /// Effective fault probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl FaultPolicy for RandomFault {
    fn check(&self, worker: &WorkerRecord) -> Result<(), WorkerFault> {
        if rand::rng().random_bool(self.probability) {
            Err(WorkerFault::new(&*worker.id, "injected fault"))
        } else {
            Ok(())
        }
    }
}
