mod builder;
mod pacing;
mod runner;
mod shutdown;
mod state;
mod types;


pub use builder::LogGeneratorBuilder;
pub use pacing::Pacer;
pub use runner::LogGenerator;
pub use shutdown::spawn_signal_handlers;
pub use state::GeneratorState;
pub use types::{GenerationSummary, LoopPhase, ShutdownReason};
