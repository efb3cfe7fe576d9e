//! Termination signals for [`Supervisor::run_until_shutdown`](crate::Supervisor::run_until_shutdown).
//!
//! On unix the run loop ends on any of:
//!
//! | Signal    | Typical sender                          |
//! |-----------|-----------------------------------------|
//! | `SIGINT`  | Ctrl-C in the controlling terminal      |
//! | `SIGTERM` | service managers, `kill`, orchestrators |
//! | `SIGQUIT` | Ctrl-\ or an operator forcing a stop    |
//!
//! Ctrl-C arrives as `SIGINT` there, so no separate `ctrl_c()` listener is
//! registered. Other platforms only have [`tokio::signal::ctrl_c`].

#[cfg(unix)]
pub(crate) async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut listeners = [
        signal(SignalKind::interrupt())?,
        signal(SignalKind::terminate())?,
        signal(SignalKind::quit())?,
    ];
    let [interrupt, terminate, quit] = &mut listeners;

    tokio::select! {
        _ = interrupt.recv() => tracing::info!(signal = "SIGINT", "shutdown signal received"),
        _ = terminate.recv() => tracing::info!(signal = "SIGTERM", "shutdown signal received"),
        _ = quit.recv() => tracing::info!(signal = "SIGQUIT", "shutdown signal received"),
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!(signal = "ctrl-c", "shutdown signal received");
    Ok(())
}
