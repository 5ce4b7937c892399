use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// One synthetic AiScout log line: the shared envelope plus a kind-specific
/// payload, flattened into a single JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub run_id: Uuid,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: RecordPayload,
}

/// Kind-specific fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordPayload {
    Detection(DetectionRecord),
    System(SystemRecord),
    Error(ErrorRecord),
    Performance(PerformanceRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub camera_id: String,
    pub objects_detected: u32,
    pub confidence_scores: Vec<f64>,
    pub processing_time_ms: u32,
    pub image_size: ImageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub temperature: f64,
    pub uptime_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error_code: String,
    pub error_message: String,
    pub severity: Severity,
    pub component: ErrorComponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Warning, Severity::Error, Severity::Critical];
}

/// Device subsystem an error record blames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorComponent {
    Camera,
    MlEngine,
    Network,
    Storage,
}

impl ErrorComponent {
    pub const ALL: [ErrorComponent; 4] = [
        ErrorComponent::Camera,
        ErrorComponent::MlEngine,
        ErrorComponent::Network,
        ErrorComponent::Storage,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub fps: f64,
    pub latency_ms: u32,
    pub queue_size: u32,
    pub batch_size: u32,
    pub model_inference_time: u32,
}

/// Record variant discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Detection,
    System,
    Error,
    Performance,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Detection,
        RecordKind::System,
        RecordKind::Error,
        RecordKind::Performance,
    ];

    /// The value written to the `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Detection => "detection",
            RecordKind::System => "system",
            RecordKind::Error => "error",
            RecordKind::Performance => "performance",
        }
    }

    /// Field names a record of this kind carries, envelope included
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Detection => &[
                "run_id",
                "timestamp",
                "type",
                "camera_id",
                "objects_detected",
                "confidence_scores",
                "processing_time_ms",
                "image_size",
            ],
            RecordKind::System => &[
                "run_id",
                "timestamp",
                "type",
                "cpu_usage",
                "memory_usage",
                "disk_usage",
                "temperature",
                "uptime_seconds",
            ],
            RecordKind::Error => &[
                "run_id",
                "timestamp",
                "type",
                "error_code",
                "error_message",
                "severity",
                "component",
            ],
            RecordKind::Performance => &[
                "run_id",
                "timestamp",
                "type",
                "fps",
                "latency_ms",
                "queue_size",
                "batch_size",
                "model_inference_time",
            ],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LogRecord {
    pub fn new(run_id: Uuid, timestamp: DateTime<Utc>, payload: RecordPayload) -> Self {
        Self {
            run_id,
            timestamp,
            payload,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self.payload {
            RecordPayload::Detection(_) => RecordKind::Detection,
            RecordPayload::System(_) => RecordKind::System,
            RecordPayload::Error(_) => RecordKind::Error,
            RecordPayload::Performance(_) => RecordKind::Performance,
        }
    }

    /// Compact single-line JSON, without the trailing newline
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// RFC 3339 with microseconds and a `Z` suffix, e.g. 2024-05-01T10:20:30.123456Z
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
}
