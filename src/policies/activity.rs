//! # Action label strategy for work ticks.
//!
//! Every successful work tick records a human-readable `last_activity`. The
//! content is cosmetic; the contract is only that *some* label is always recorded.
//!
//! - [`Activity`] the pluggable strategy trait (closures implement it too)
//! - [`ActivityCatalog`] random pick from a fixed, non-empty catalogue (default)

use std::sync::Arc;

use rand::Rng;

use crate::workers::WorkerRecord;

/// Strategy that names the action a worker performed on a work tick.
pub trait Activity: Send + Sync + 'static {
    /// Returns the label to record for `worker`.
    fn label(&self, worker: &WorkerRecord) -> Arc<str>;
}

impl<F> Activity for F
where
    F: Fn(&WorkerRecord) -> Arc<str> + Send + Sync + 'static,
{
    fn label(&self, worker: &WorkerRecord) -> Arc<str> {
        self(worker)
    }
}

const DEFAULT_ACTIVITIES: [&str; 8] = [
    "Applied UI improvements",
    "Optimized styling",
    "Enhanced performance",
    "Updated code quality",
    "Monitored system health",
    "Optimized network",
    "Enhanced security",
    "Improved database performance",
];

/// Fixed, non-empty catalogue of labels picked uniformly at random.
#[derive(Clone, Debug)]
pub struct ActivityCatalog {
    entries: Arc<[Arc<str>]>,
}

impl ActivityCatalog {
    /// Creates a catalogue; returns `None` if `entries` is empty.
    ///
    /// # Example
    /// ```
    /// use workvisor::ActivityCatalog;
    ///
    /// assert!(ActivityCatalog::new(Vec::<String>::new()).is_none());
    /// assert_eq!(ActivityCatalog::new(["Rotated keys"]).unwrap().len(), 1);
    /// ```
    pub fn new<I, S>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let entries: Arc<[Arc<str>]> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    /// Number of labels in the catalogue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in catalogue order.
    pub fn entries(&self) -> &[Arc<str>] {
        &self.entries
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ACTIVITIES.iter().map(|s| Arc::from(*s)).collect(),
        }
    }
}

impl Activity for ActivityCatalog {
    fn label(&self, _worker: &WorkerRecord) -> Arc<str> {
        let idx = rand::rng().random_range(0..self.entries.len());
        Arc::clone(&self.entries[idx])
    }
}
