pub mod config;
pub mod error;
pub mod generator;
pub mod record;
pub mod sink;

pub use config::{GenerationConfig, LegacyEnv, LoggenConfig, OutputConfig};
pub use error::{LoggenError, Result};
pub use generator::{
    spawn_signal_handlers, GenerationSummary, GeneratorState, LogGenerator, LogGeneratorBuilder,
    LoopPhase, Pacer, ShutdownReason,
};
pub use record::{LogRecord, RecordKind, RecordPayload, RecordSynthesizer};
pub use sink::{FileSink, MemorySink, RecordSink};
