mod file;
mod memory;
#[cfg(test)]
mod tests;

pub use file::FileSink;
pub use memory::MemorySink;

use crate::error::Result;
use crate::record::LogRecord;
use async_trait::async_trait;

/// Destination for synthesized records.
///
/// An append either lands completely or reports an error; sinks never retry
/// and never buffer a failed record for later.
#[async_trait]
pub trait RecordSink: Send {
    async fn append(&mut self, record: LogRecord) -> Result<()>;

    /// Human-readable target, used in status messages
    fn describe(&self) -> String;
}
