// Signal handling module
//
// SIGTERM and SIGINT stop the accept loop; in-flight connections finish
// in their own tasks.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn the signal listener and return the shutdown notifier.
#[cfg(unix)]
pub fn start_signal_handler() -> Arc<Notify> {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => crate::logger::log_shutdown("SIGTERM received"),
            _ = sigint.recv() => crate::logger::log_shutdown("SIGINT received"),
        }

        // notify_one stores a permit, so the signal is not lost even if
        // the accept loop is not parked on notified() yet
        notifier.notify_one();
    });

    shutdown
}

/// Windows fallback - only Ctrl+C is supported
#[cfg(not(unix))]
pub fn start_signal_handler() -> Arc<Notify> {
    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            crate::logger::log_shutdown("Ctrl+C received");
            notifier.notify_one();
        }
    });

    shutdown
}
