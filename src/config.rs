use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Interval used when the configured rate is zero or negative.
pub const FALLBACK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggenConfig {
    pub output: OutputConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory holding the shared log file
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Name of the shared log file inside `log_dir`
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Target records per second
    #[serde(default = "default_rate")]
    pub rate: i64,

    /// Number of successful appends between progress messages
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,

    /// Seed for reproducible output; entropy-seeded when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// The environment keys the generator has always honoured, outside the
/// `LOGGEN_` namespace.
#[derive(Debug, Clone, Default)]
pub struct LegacyEnv {
    pub log_dir: Option<String>,
    pub rate: Option<String>,
}

impl LegacyEnv {
    pub fn from_process() -> Self {
        Self {
            log_dir: std::env::var("LOG_DIR").ok(),
            rate: std::env::var("LOG_RATE").ok(),
        }
    }
}

impl OutputConfig {
    pub fn log_path(&self) -> PathBuf {
        Path::new(&self.log_dir).join(&self.file_name)
    }
}

impl GenerationConfig {
    /// Time budget for a single iteration of the generator loop.
    pub fn target_interval(&self) -> Duration {
        target_interval(self.rate)
    }
}

/// `1 / rate` seconds for a positive rate, [`FALLBACK_INTERVAL`] otherwise.
/// Never shorter than one nanosecond, so rates above 1e9 still pace.
pub fn target_interval(rate: i64) -> Duration {
    if rate > 0 {
        Duration::from_nanos((1_000_000_000 / rate as u64).max(1))
    } else {
        FALLBACK_INTERVAL
    }
}

impl LoggenConfig {
    /// Load configuration from a specific file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_with_legacy_env(path, LegacyEnv::from_process())
    }

    /// Load configuration, applying `LOG_DIR` / `LOG_RATE` values on top of
    /// every other source.
    pub fn load_with_legacy_env<P: AsRef<Path>>(
        path: P,
        legacy: LegacyEnv,
    ) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy();
        debug!("Loading configuration from: {}", path_str);

        let settings = Config::builder()
            .set_default("output.log_dir", default_log_dir())?
            .set_default("output.file_name", default_file_name())?
            .set_default("generation.rate", default_rate())?
            .set_default(
                "generation.progress_interval",
                default_progress_interval() as i64,
            )?
            // Add configuration file (optional)
            .add_source(File::with_name(&path_str).required(false))
            // LOGGEN_GENERATION__RATE=20 etc.
            .add_source(
                Environment::with_prefix("LOGGEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("output.log_dir", legacy.log_dir)?
            .set_override_option("generation.rate", legacy.rate)?
            .build()?;

        let config: LoggenConfig = settings.try_deserialize()?;

        info!("Configuration loaded successfully");
        debug!("Final configuration: {:#?}", config);

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.log_dir.trim().is_empty() {
            return Err(ConfigError::Message(
                "Output log_dir must not be empty".to_string(),
            ));
        }

        if self.output.file_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "Output file_name must not be empty".to_string(),
            ));
        }

        if self.output.file_name.contains(['/', '\\']) {
            return Err(ConfigError::Message(format!(
                "Output file_name must be a bare file name, got '{}'",
                self.output.file_name
            )));
        }

        if self.generation.progress_interval == 0 {
            return Err(ConfigError::Message(
                "Generation progress_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LoggenConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                log_dir: default_log_dir(),
                file_name: default_file_name(),
            },
            generation: GenerationConfig {
                rate: default_rate(),
                progress_interval: default_progress_interval(),
                seed: None,
            },
        }
    }
}

// Default value functions
fn default_log_dir() -> String {
    "/shared-logs".to_string()
}
fn default_file_name() -> String {
    "aiscout.log".to_string()
}

fn default_rate() -> i64 {
    50
}
fn default_progress_interval() -> u64 {
    100
}
