//! # Shared runtime state: the single synchronization point.
//!
//! Workers and supervisor counters live in one [`Snapshot`] behind one
//! `std::sync::Mutex`. Every mutation (lifecycle commands and driver ticks) goes
//! through this lock, so ticks of different drivers never interleave.
//!
//! ## Rules
//! - The lock is never held across an `.await`.
//! - Poisoning is recovered: a poisoned guard still holds last-good state because
//!   driver ticks only commit drafts that completed normally.
//! - Watchers are notified while the lock is held, so they never observe
//!   snapshots out of order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::error::ControlError;
use crate::events::{Bus, Event};
use crate::workers::Snapshot;

pub(crate) struct Shared {
    state: Mutex<Snapshot>,
    bus: Bus,
    watch_tx: watch::Sender<Snapshot>,
}

impl Shared {
    pub(crate) fn new(initial: Snapshot, bus: Bus) -> Self {
        let (watch_tx, _rx) = watch::channel(initial.clone());
        Self {
            state: Mutex::new(initial),
            bus,
            watch_tx,
        }
    }

    /// Locks the state, recovering from poison.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Point-in-time copy; the lock is held only for the clone.
    pub(crate) fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }

    /// Applies a command to the state and notifies watchers on success.
    ///
    /// `f` must check its preconditions before mutating anything.
    pub(crate) fn apply<F>(&self, f: F) -> Result<(), ControlError>
    where
        F: FnOnce(&mut Snapshot) -> Result<(), ControlError>,
    {
        let mut guard = self.lock();
        f(&mut guard)?;
        self.notify(&guard);
        Ok(())
    }

    /// Pushes a copy of `state` to watchers.
    pub(crate) fn notify(&self, state: &Snapshot) {
        self.watch_tx.send_replace(state.clone());
    }

    pub(crate) fn watch(&self) -> watch::Receiver<Snapshot> {
        self.watch_tx.subscribe()
    }

    pub(crate) fn bus(&self) -> &Bus {
        &self.bus
    }

    pub(crate) fn publish(&self, ev: Event) {
        self.bus.publish(ev);
    }
}
