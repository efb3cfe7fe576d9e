//! # Example: continuous
//!
//! Runs the default eight-worker pool with random faults until Ctrl-C, printing a
//! status table every few seconds.
//!
//! Demonstrates how to:
//! - Install a `tracing` subscriber and the built-in [`LogWriter`].
//! - Inject faults with [`RandomFault`] and watch the health monitor recover workers.
//! - Observe the pool through [`Supervisor::watch`].
//! - Shut down cleanly on an OS signal with [`Supervisor::run_until_shutdown`].
//!
//! ## Flow
//! ```text
//! Supervisor::run_until_shutdown()
//!     ├─► start(): workers ─► active, drivers launched
//!     ├─► WorkCycle      every 2s  (faults ─► error)
//!     ├─► HealthMonitor  every 5s  (error && health<50 ─► active @75)
//!     ├─► UptimeTracker  every 1s
//!     ├─► Heartbeat      every 10s
//!     └─► SIGINT/SIGTERM ─► stop(): drivers joined, workers ─► inactive
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=info,workvisor=debug cargo run --example continuous
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use workvisor::{Config, HealthDrift, LogWriter, RandomFault, Snapshot, Subscribe, Supervisor};

fn print_table(snap: &Snapshot) {
    let sup = &snap.supervisor;
    println!(
        "uptime={} changes={} health={:.1}% active={}/{}",
        sup.uptime_display(),
        sup.total_changes,
        sup.system_health,
        snap.active_workers(),
        snap.workers.len(),
    );
    for w in &snap.workers {
        println!(
            "  {:<18} {:<8} health={:>3} changes={:>5} errors={:>3}  {}",
            w.name, w.status, w.health, w.change_count, w.error_count, w.last_activity
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];

    // Strong decay so degraded workers actually cross the recovery threshold.
    let drift = HealthDrift {
        decay_probability: 0.4,
        boost_probability: 0.1,
        step: 15,
    };

    let sup = Supervisor::builder(Config::default())
        .with_subscribers(subs)
        .with_drift(drift)
        .with_faults(RandomFault::new(0.05))
        .build()?;

    let mut rx = sup.watch();
    let printer = tokio::spawn(async move {
        let mut every = tokio::time::interval(Duration::from_secs(5));
        loop {
            every.tick().await;
            if rx.has_changed().is_err() {
                break;
            }
            print_table(&rx.borrow_and_update());
        }
    });

    sup.run_until_shutdown().await?;
    printer.abort();

    println!("final state:");
    print_table(&sup.snapshot());
    Ok(())
}
