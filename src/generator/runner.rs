use super::builder::LogGeneratorBuilder;
use super::pacing::Pacer;
use super::state::GeneratorState;
use super::types::{GenerationSummary, LoopPhase};
use crate::config::LoggenConfig;
use crate::error::{LoggenError, Result};
use crate::record::RecordSynthesizer;
use crate::sink::{FileSink, RecordSink};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// Rate-controlled loop that synthesizes records and appends them to a sink
/// until a stop is requested through its [`GeneratorState`].
pub struct LogGenerator<S: RecordSink> {
    pub(super) synthesizer: RecordSynthesizer,
    pub(super) sink: S,
    pub(super) pacer: Pacer,
    pub(super) rate: i64,
    pub(super) progress_interval: u64,
    pub(super) state: Arc<GeneratorState>,
}

impl LogGenerator<FileSink> {
    /// Generator writing to the file described by `config.output`
    pub fn from_config(config: &LoggenConfig) -> Result<Self> {
        LogGeneratorBuilder::new()
            .generation(config.generation.clone())
            .sink(FileSink::new(config.output.log_path()))
            .build()
    }
}

impl<S: RecordSink> LogGenerator<S> {
    pub fn builder() -> LogGeneratorBuilder<S> {
        LogGeneratorBuilder::new()
    }

    /// Shared state, for stop requests and live counters
    pub fn state(&self) -> Arc<GeneratorState> {
        Arc::clone(&self.state)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Run until a stop is requested, then report what was written.
    ///
    /// A stop request is honoured between iterations: the record being
    /// appended when it arrives is still written, no further record is
    /// synthesized afterwards.
    pub async fn run(&mut self) -> Result<GenerationSummary> {
        if self.state.phase() == LoopPhase::Stopped {
            return Err(LoggenError::system("Generator has already stopped"));
        }

        if self.rate > 0 {
            info!("Starting log generation at {} logs/second", self.rate);
        } else {
            warn!(
                "Configured rate {} is not positive, falling back to one log every {:?}",
                self.rate,
                self.pacer.interval()
            );
        }
        info!("Writing logs to: {}", self.sink.describe());

        let started = Instant::now();
        let mut written_by_kind = BTreeMap::new();

        while self.state.is_running() {
            let start = self.pacer.start_iteration();

            let record = self.synthesizer.synthesize();
            let kind = record.kind();

            match self.sink.append(record).await {
                Ok(()) => {
                    *written_by_kind.entry(kind).or_insert(0u64) += 1;
                    let total = self.state.record_success();
                    if total % self.progress_interval == 0 {
                        info!("Generated {} logs", total);
                    }
                }
                Err(e) => {
                    let failures = self.state.record_failure();
                    error!(
                        "Dropped {} record: {} ({} write failures so far)",
                        kind, e, failures
                    );
                }
            }

            let remaining = self.pacer.remaining(start);
            if !remaining.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(remaining) => {}
                    _ = self.state.stop_requested() => {
                        debug!("Stop requested while waiting for the next iteration");
                    }
                }
            }
        }

        self.state.mark_stopped();

        let summary = GenerationSummary {
            records_written: self.state.records_written(),
            write_failures: self.state.write_failures(),
            written_by_kind,
            elapsed: started.elapsed(),
        };

        info!(
            "Log generation stopped. Total logs generated: {}",
            summary.records_written
        );
        if summary.write_failures > 0 {
            warn!("{} records were dropped on write failure", summary.write_failures);
        }
        debug!(
            "Effective rate {:.2} logs/second over {:?}, by kind: {:?}",
            summary.effective_rate(),
            summary.elapsed,
            summary.written_by_kind
        );

        Ok(summary)
    }
}
