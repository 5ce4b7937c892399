use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggenError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to append to {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration serialization error: {0}")]
    ConfigSerialization(#[from] toml::ser::Error),

    #[error("System error: {message}")]
    System { message: String },
}

impl LoggenError {
    pub fn system<S: Into<String>>(message: S) -> Self {
        Self::System {
            message: message.into(),
        }
    }

    pub fn sink<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Sink {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoggenError>;
