//! Error types used by the workvisor runtime.
//!
//! This module defines:
//!
//! - [`ControlError`]: rejections of lifecycle commands (`start`/`pause`/`resume`/`stop`).
//! - [`RuntimeError`]: failures of the signal-driven run loop.
//! - [`BuildError`]: invalid pool definitions caught by the builder.
//! - [`WorkerFault`]: a modeled per-worker failure raised during a work tick.
//!
//! Lifecycle rejections are the only errors a caller ever sees. Worker faults are
//! captured into the worker record (`status = error`) and never propagated.

use thiserror::Error;

/// # Rejected lifecycle commands.
///
/// Returned synchronously; a rejected command never mutates state.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    /// `start()` was called while the supervisor is already running.
    #[error("supervisor is already running")]
    AlreadyRunning,

    /// The command requires a running supervisor.
    #[error("supervisor is not running")]
    NotRunning,

    /// `pause()` was called while already paused.
    #[error("supervisor is already paused")]
    AlreadyPaused,

    /// `resume()` was called while not paused.
    #[error("supervisor is not paused")]
    NotPaused,

    /// No worker with the given id exists in the pool.
    #[error("unknown worker: {id}")]
    UnknownWorker {
        /// The id that was looked up.
        id: String,
    },
}

impl ControlError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use workvisor::ControlError;
    ///
    /// assert_eq!(ControlError::NotPaused.as_label(), "control_not_paused");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ControlError::AlreadyRunning => "control_already_running",
            ControlError::NotRunning => "control_not_running",
            ControlError::AlreadyPaused => "control_already_paused",
            ControlError::NotPaused => "control_not_paused",
            ControlError::UnknownWorker { .. } => "control_unknown_worker",
        }
    }
}

/// # Errors produced by the long-running entry point.
///
/// Returned by [`Supervisor::run_until_shutdown`](crate::Supervisor::run_until_shutdown).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A lifecycle command was rejected.
    #[error(transparent)]
    Control(#[from] ControlError),

    /// OS signal handlers could not be installed.
    #[error("failed to listen for shutdown signals: {source}")]
    Signal {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::Control(e) => e.as_label(),
            RuntimeError::Signal { .. } => "runtime_signal",
        }
    }
}

/// # Errors raised while assembling a supervisor.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The worker pool must contain at least one worker.
    #[error("worker pool is empty")]
    EmptyPool,

    /// Two workers share the same id.
    #[error("duplicate worker id: {id}")]
    DuplicateWorker {
        /// The offending id.
        id: String,
    },
}

impl BuildError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            BuildError::EmptyPool => "build_empty_pool",
            BuildError::DuplicateWorker { .. } => "build_duplicate_worker",
        }
    }
}

/// # A modeled failure of one worker during one work tick.
///
/// Produced by a [`FaultPolicy`](crate::FaultPolicy). The work cycle records it on the
/// worker (`status = error`, `error_count += 1`) and moves on to the next worker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("worker {worker} faulted: {reason}")]
pub struct WorkerFault {
    /// Id of the faulted worker.
    pub worker: String,
    /// Human-readable cause.
    pub reason: String,
}

impl WorkerFault {
    /// Creates a fault for the given worker.
    pub fn new(worker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            worker: worker.into(),
            reason: reason.into(),
        }
    }

    /// Returns a human-readable message with details about the fault.
    pub fn as_message(&self) -> String {
        format!("fault: {}", self.reason)
    }
}
