mod synth;
mod types;
#[cfg(test)]
mod tests;

pub use synth::{
    RecordSynthesizer, CAMERA_IDS, CONFIDENCE_RANGE, ERROR_MESSAGES, IMAGE_HEIGHT, IMAGE_WIDTH,
};
pub use types::{
    DetectionRecord, ErrorComponent, ErrorRecord, ImageSize, LogRecord, PerformanceRecord,
    RecordKind, RecordPayload, Severity, SystemRecord,
};
