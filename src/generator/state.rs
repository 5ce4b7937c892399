use super::types::{LoopPhase, ShutdownReason};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// State shared between the generator loop and whoever may stop it.
///
/// The loop is the only writer of the counters; stop requests only flip the
/// phase and cancel the token, which the loop checks between iterations.
#[derive(Debug)]
pub struct GeneratorState {
    phase: Mutex<LoopPhase>,
    shutdown: CancellationToken,
    records_written: AtomicU64,
    write_failures: AtomicU64,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self {
            phase: Mutex::new(LoopPhase::Running),
            shutdown: CancellationToken::new(),
            records_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Move `Running` to `Stopping`. Returns false if a stop was already
    /// requested or the loop has finished.
    pub fn request_stop(&self, reason: ShutdownReason) -> bool {
        let mut phase = self.phase.lock();
        if *phase != LoopPhase::Running {
            debug!("Ignoring stop request ({}), phase is {:?}", reason, *phase);
            return false;
        }

        *phase = LoopPhase::Stopping;
        self.shutdown.cancel();
        info!("Received {}, shutting down gracefully...", reason);
        true
    }

    pub fn phase(&self) -> LoopPhase {
        *self.phase.lock()
    }

    pub fn is_running(&self) -> bool {
        self.phase() == LoopPhase::Running
    }

    /// Resolves once a stop has been requested
    pub async fn stop_requested(&self) {
        self.shutdown.cancelled().await
    }

    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Acquire)
    }

    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Acquire)
    }

    pub(super) fn record_success(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(super) fn record_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(super) fn mark_stopped(&self) {
        *self.phase.lock() = LoopPhase::Stopped;
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new()
    }
}
