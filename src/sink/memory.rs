use super::RecordSink;
use crate::error::Result;
use crate::record::LogRecord;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps serialized lines in memory. Clones share the same buffer, so a
/// caller can hand one clone to a generator and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn append(&mut self, record: LogRecord) -> Result<()> {
        let line = record.to_json_line()?;
        self.lines.lock().push(line);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
