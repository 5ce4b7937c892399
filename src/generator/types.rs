use crate::record::RecordKind;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Generator loop lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    Stopping,
    Stopped,
}

/// Why the generator was asked to stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownReason {
    Signal(String),
    UserRequest,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Signal(name) => write!(f, "signal {}", name),
            ShutdownReason::UserRequest => f.write_str("user request"),
        }
    }
}

/// Final report of a generator run
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub records_written: u64,
    pub write_failures: u64,
    pub written_by_kind: BTreeMap<RecordKind, u64>,
    pub elapsed: Duration,
}

impl GenerationSummary {
    /// Successful appends per second over the whole run
    pub fn effective_rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records_written as f64 / secs
        } else {
            0.0
        }
    }
}
