use super::types::{
    DetectionRecord, ErrorComponent, ErrorRecord, ImageSize, LogRecord, PerformanceRecord,
    RecordKind, RecordPayload, Severity, SystemRecord,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use uuid::{Builder, Uuid};

/// Cameras a detection record can be attributed to
pub const CAMERA_IDS: [&str; 4] = ["cam_1", "cam_2", "cam_3", "cam_4"];

pub const ERROR_MESSAGES: [&str; 4] = [
    "Camera connection lost",
    "Insufficient memory for processing",
    "Network timeout",
    "Model loading failed",
];

pub const IMAGE_WIDTH: u32 = 1920;
pub const IMAGE_HEIGHT: u32 = 1080;

pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.50..=0.99;

const OBJECTS_DETECTED: RangeInclusive<u32> = 0..=5;
const CONFIDENCE_SCORE_COUNT: RangeInclusive<usize> = 1..=3;
const PROCESSING_TIME_MS: RangeInclusive<u32> = 50..=500;

const CPU_USAGE: RangeInclusive<f64> = 10.0..=80.0;
const MEMORY_USAGE: RangeInclusive<f64> = 30.0..=90.0;
const DISK_USAGE: RangeInclusive<f64> = 20.0..=70.0;
const TEMPERATURE: RangeInclusive<f64> = 35.0..=75.0;
const UPTIME_SECONDS: RangeInclusive<u32> = 1000..=86400;

const ERROR_CODE: RangeInclusive<u32> = 1000..=9999;

const FPS: RangeInclusive<f64> = 15.0..=30.0;
const LATENCY_MS: RangeInclusive<u32> = 20..=200;
const QUEUE_SIZE: RangeInclusive<u32> = 0..=10;
const BATCH_SIZE: RangeInclusive<u32> = 1..=8;
const MODEL_INFERENCE_TIME: RangeInclusive<u32> = 10..=100;

/// Produces random [`LogRecord`]s shaped like the AiScout device output.
///
/// All randomness, including the `run_id`, comes from the wrapped source, so
/// a seeded synthesizer yields the same sequence of records (timestamps
/// aside) on every run.
pub struct RecordSynthesizer<R: Rng = StdRng> {
    rng: R,
}

impl RecordSynthesizer<StdRng> {
    /// Synthesizer seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic synthesizer for reproducible streams
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RecordSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a record kind uniformly and fill it with random values.
    pub fn synthesize(&mut self) -> LogRecord {
        let kind = RecordKind::ALL[self.rng.gen_range(0..RecordKind::ALL.len())];
        self.synthesize_kind(kind)
    }

    pub fn synthesize_kind(&mut self, kind: RecordKind) -> LogRecord {
        let run_id = self.next_run_id();
        let timestamp = Utc::now();

        let payload = match kind {
            RecordKind::Detection => RecordPayload::Detection(self.detection()),
            RecordKind::System => RecordPayload::System(self.system()),
            RecordKind::Error => RecordPayload::Error(self.error()),
            RecordKind::Performance => RecordPayload::Performance(self.performance()),
        };

        LogRecord::new(run_id, timestamp, payload)
    }

    fn next_run_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn detection(&mut self) -> DetectionRecord {
        let camera_id = self.pick(&CAMERA_IDS).to_string();
        let objects_detected = self.rng.gen_range(OBJECTS_DETECTED);
        let score_count = self.rng.gen_range(CONFIDENCE_SCORE_COUNT);
        let confidence_scores = (0..score_count)
            .map(|_| self.uniform(CONFIDENCE_RANGE, 2))
            .collect();

        DetectionRecord {
            camera_id,
            objects_detected,
            confidence_scores,
            processing_time_ms: self.rng.gen_range(PROCESSING_TIME_MS),
            image_size: ImageSize {
                width: IMAGE_WIDTH,
                height: IMAGE_HEIGHT,
            },
        }
    }

    fn system(&mut self) -> SystemRecord {
        SystemRecord {
            cpu_usage: self.uniform(CPU_USAGE, 2),
            memory_usage: self.uniform(MEMORY_USAGE, 2),
            disk_usage: self.uniform(DISK_USAGE, 2),
            temperature: self.uniform(TEMPERATURE, 1),
            uptime_seconds: self.rng.gen_range(UPTIME_SECONDS),
        }
    }

    fn error(&mut self) -> ErrorRecord {
        ErrorRecord {
            error_code: format!("E{}", self.rng.gen_range(ERROR_CODE)),
            error_message: self.pick(&ERROR_MESSAGES).to_string(),
            severity: *self.pick(&Severity::ALL),
            component: *self.pick(&ErrorComponent::ALL),
        }
    }

    fn performance(&mut self) -> PerformanceRecord {
        PerformanceRecord {
            fps: self.uniform(FPS, 2),
            latency_ms: self.rng.gen_range(LATENCY_MS),
            queue_size: self.rng.gen_range(QUEUE_SIZE),
            batch_size: self.rng.gen_range(BATCH_SIZE),
            model_inference_time: self.rng.gen_range(MODEL_INFERENCE_TIME),
        }
    }

    fn pick<'a, T>(&mut self, choices: &'a [T]) -> &'a T {
        &choices[self.rng.gen_range(0..choices.len())]
    }

    fn uniform(&mut self, range: RangeInclusive<f64>, decimals: i32) -> f64 {
        round_to(self.rng.gen_range(range), decimals)
    }
}

/// Round half away from zero to `decimals` places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
