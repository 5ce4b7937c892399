use super::pacing::Pacer;
use super::runner::LogGenerator;
use super::state::GeneratorState;
use crate::config::GenerationConfig;
use crate::error::{LoggenError, Result};
use crate::record::RecordSynthesizer;
use crate::sink::RecordSink;
use std::sync::Arc;

/// Builder for [`LogGenerator`]
pub struct LogGeneratorBuilder<S: RecordSink> {
    generation: Option<GenerationConfig>,
    sink: Option<S>,
    synthesizer: Option<RecordSynthesizer>,
    state: Option<Arc<GeneratorState>>,
}

impl<S: RecordSink> LogGeneratorBuilder<S> {
    pub fn new() -> Self {
        Self {
            generation: None,
            sink: None,
            synthesizer: None,
            state: None,
        }
    }

    pub fn generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Use a specific synthesizer instead of one derived from the seed setting
    pub fn synthesizer(mut self, synthesizer: RecordSynthesizer) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Share an existing state, e.g. one already wired to signal handlers
    pub fn state(mut self, state: Arc<GeneratorState>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn build(self) -> Result<LogGenerator<S>> {
        let generation = self
            .generation
            .ok_or_else(|| LoggenError::system("Generation configuration must be specified"))?;
        let sink = self
            .sink
            .ok_or_else(|| LoggenError::system("Record sink must be specified"))?;

        if generation.progress_interval == 0 {
            return Err(LoggenError::system(
                "Progress interval must be greater than 0",
            ));
        }

        let synthesizer = self
            .synthesizer
            .unwrap_or_else(|| match generation.seed {
                Some(seed) => RecordSynthesizer::seeded(seed),
                None => RecordSynthesizer::from_entropy(),
            });

        Ok(LogGenerator {
            synthesizer,
            sink,
            pacer: Pacer::for_rate(generation.rate),
            rate: generation.rate,
            progress_interval: generation.progress_interval,
            state: self.state.unwrap_or_default(),
        })
    }
}

impl<S: RecordSink> Default for LogGeneratorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
