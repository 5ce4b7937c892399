use crate::config::target_interval;
use std::time::Duration;
use tokio::time::Instant;

/// Fixed-rate pacing with drift correction.
///
/// Each iteration sleeps for the interval minus the time the iteration
/// already spent. After a completed sleep the next iteration is measured
/// from the deadline it slept towards rather than from the wake-up instant,
/// so timer overshoot does not accumulate. An iteration that overruns the
/// interval skips its sleep and the schedule restarts from "now"; missed
/// iterations are never made up.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Pacer for `rate` records per second; non-positive rates fall back to
    /// one record per second.
    pub fn for_rate(rate: i64) -> Self {
        Self::new(target_interval(rate))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start instant of the iteration that begins now
    pub fn start_iteration(&mut self) -> Instant {
        let now = Instant::now();
        match self.deadline.take() {
            Some(deadline)
                if now
                    .checked_duration_since(deadline)
                    .is_some_and(|late| late < self.interval) =>
            {
                deadline
            }
            _ => now,
        }
    }

    /// How long to sleep before the next iteration, given this iteration's
    /// start instant. Zero when the iteration used up its whole interval.
    pub fn remaining(&mut self, start: Instant) -> Duration {
        let elapsed = start.elapsed();
        let remaining = self.interval.saturating_sub(elapsed);
        if !remaining.is_zero() {
            self.deadline = Some(start + self.interval);
        }
        remaining
    }
}
