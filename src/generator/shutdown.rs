use super::state::GeneratorState;
use super::types::ShutdownReason;
use std::sync::Arc;
use tracing::{debug, error};

/// Forward SIGINT and SIGTERM to `state` as stop requests.
///
/// The handlers stay installed for the life of the runtime; signals after
/// the first are ignored by [`GeneratorState::request_stop`].
pub fn spawn_signal_handlers(state: Arc<GeneratorState>) {
    // Handle SIGTERM (docker stop, systemd) - Unix only
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    while sigterm.recv().await.is_some() {
                        debug!("Received SIGTERM signal");
                        state.request_stop(ShutdownReason::Signal("SIGTERM".to_string()));
                    }
                });
            }
            Err(e) => error!("Failed to register SIGTERM handler: {}", e),
        }
    }

    // Handle SIGINT (Ctrl+C) - Cross-platform
    tokio::spawn(async move {
        loop {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    debug!("Received SIGINT signal (Ctrl+C)");
                    state.request_stop(ShutdownReason::Signal("SIGINT".to_string()));
                }
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {}", e);
                    break;
                }
            }
        }
    });
}
