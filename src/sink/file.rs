use super::RecordSink;
use crate::error::{LoggenError, Result};
use crate::record::LogRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Append-only JSON-lines file shared with the log collector.
///
/// The file is reopened for every record so that a collector moving or
/// deleting it mid-run simply causes a fresh file to be started.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the containing directory ahead of the first append
    pub async fn prepare(&self) -> Result<()> {
        if let Some(dir) = self.directory() {
            fs::create_dir_all(dir).await?;
            info!("Log directory ready: {}", dir.display());
        }
        Ok(())
    }

    fn directory(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    async fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        if let Some(dir) = self.directory() {
            fs::create_dir_all(dir).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(line).await?;
        file.flush().await
    }
}

#[async_trait]
impl RecordSink for FileSink {
    async fn append(&mut self, record: LogRecord) -> Result<()> {
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        self.write_line(&line)
            .await
            .map_err(|e| LoggenError::sink(&self.path, e))?;

        debug!("Appended {} record {}", record.kind(), record.run_id);
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
