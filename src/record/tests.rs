use super::synth::round_to;
use super::*;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};

const DRAWS: usize = 2_000;

fn has_precision(value: f64, decimals: i32) -> bool {
    (round_to(value, decimals) - value).abs() < 1e-9
}

fn field_set(record: &LogRecord) -> BTreeSet<String> {
    match serde_json::to_value(record).unwrap() {
        Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("record serialized to non-object: {}", other),
    }
}

#[test]
fn test_field_set_matches_kind_schema() {
    let mut synthesizer = RecordSynthesizer::seeded(7);

    for _ in 0..DRAWS {
        let record = synthesizer.synthesize();
        let expected: BTreeSet<String> = record
            .kind()
            .field_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        assert_eq!(field_set(&record), expected, "kind {}", record.kind());
    }
}

#[test]
fn test_type_tag_matches_kind() {
    let mut synthesizer = RecordSynthesizer::seeded(11);

    for kind in RecordKind::ALL {
        let record = synthesizer.synthesize_kind(kind);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], kind.as_str());
        assert_eq!(record.kind(), kind);
    }
}

#[test]
fn test_all_kinds_are_drawn() {
    let mut synthesizer = RecordSynthesizer::seeded(3);
    let mut counts: HashMap<RecordKind, usize> = HashMap::new();

    for _ in 0..DRAWS {
        *counts.entry(synthesizer.synthesize().kind()).or_default() += 1;
    }

    // Uniform choice: expect ~500 of each, allow generous slack
    for kind in RecordKind::ALL {
        let count = counts.get(&kind).copied().unwrap_or(0);
        assert!(
            (350..=650).contains(&count),
            "{} drawn {} times out of {}",
            kind,
            count,
            DRAWS
        );
    }
}

#[test]
fn test_detection_ranges() {
    let mut synthesizer = RecordSynthesizer::seeded(21);

    for _ in 0..DRAWS {
        let record = synthesizer.synthesize_kind(RecordKind::Detection);
        let RecordPayload::Detection(detection) = record.payload else {
            panic!("expected detection payload");
        };

        assert!(CAMERA_IDS.contains(&detection.camera_id.as_str()));
        assert!(detection.objects_detected <= 5);
        assert!((1..=3).contains(&detection.confidence_scores.len()));
        for score in &detection.confidence_scores {
            assert!(CONFIDENCE_RANGE.contains(score), "score {}", score);
            assert!(has_precision(*score, 2), "score {}", score);
        }
        assert!((50..=500).contains(&detection.processing_time_ms));
        assert_eq!(
            detection.image_size,
            ImageSize {
                width: IMAGE_WIDTH,
                height: IMAGE_HEIGHT
            }
        );
    }
}

#[test]
fn test_system_ranges() {
    let mut synthesizer = RecordSynthesizer::seeded(22);

    for _ in 0..DRAWS {
        let record = synthesizer.synthesize_kind(RecordKind::System);
        let RecordPayload::System(system) = record.payload else {
            panic!("expected system payload");
        };

        assert!((10.0..=80.0).contains(&system.cpu_usage));
        assert!((30.0..=90.0).contains(&system.memory_usage));
        assert!((20.0..=70.0).contains(&system.disk_usage));
        assert!((35.0..=75.0).contains(&system.temperature));
        assert!(has_precision(system.cpu_usage, 2));
        assert!(has_precision(system.memory_usage, 2));
        assert!(has_precision(system.disk_usage, 2));
        assert!(has_precision(system.temperature, 1));
        assert!((1000..=86400).contains(&system.uptime_seconds));
    }
}

#[test]
fn test_error_values() {
    let mut synthesizer = RecordSynthesizer::seeded(23);

    for _ in 0..DRAWS {
        let record = synthesizer.synthesize_kind(RecordKind::Error);
        let value = serde_json::to_value(&record).unwrap();
        let RecordPayload::Error(error) = record.payload else {
            panic!("expected error payload");
        };

        let code = error.error_code.strip_prefix('E').unwrap();
        assert_eq!(code.len(), 4);
        assert!((1000..=9999).contains(&code.parse::<u32>().unwrap()));
        assert!(ERROR_MESSAGES.contains(&error.error_message.as_str()));

        let severity = value["severity"].as_str().unwrap();
        assert!(["WARNING", "ERROR", "CRITICAL"].contains(&severity));
        let component = value["component"].as_str().unwrap();
        assert!(["camera", "ml_engine", "network", "storage"].contains(&component));
    }
}

#[test]
fn test_performance_ranges() {
    let mut synthesizer = RecordSynthesizer::seeded(24);

    for _ in 0..DRAWS {
        let record = synthesizer.synthesize_kind(RecordKind::Performance);
        let RecordPayload::Performance(perf) = record.payload else {
            panic!("expected performance payload");
        };

        assert!((15.0..=30.0).contains(&perf.fps));
        assert!(has_precision(perf.fps, 2));
        assert!((20..=200).contains(&perf.latency_ms));
        assert!(perf.queue_size <= 10);
        assert!((1..=8).contains(&perf.batch_size));
        assert!((10..=100).contains(&perf.model_inference_time));
    }
}

#[test]
fn test_run_ids_are_unique_per_record() {
    let mut synthesizer = RecordSynthesizer::from_entropy();
    let ids: HashSet<_> = (0..DRAWS)
        .map(|_| synthesizer.synthesize().run_id)
        .collect();

    assert_eq!(ids.len(), DRAWS);
    assert!(ids
        .iter()
        .all(|id| id.get_version() == Some(uuid::Version::Random)));
}

#[test]
fn test_seeded_synthesizers_agree() {
    let mut first = RecordSynthesizer::seeded(99);
    let mut second = RecordSynthesizer::seeded(99);

    for _ in 0..50 {
        let a = first.synthesize();
        let b = second.synthesize();
        assert_eq!(a.run_id, b.run_id);
        assert_eq!(a.payload, b.payload);
    }
}

#[test]
fn test_json_line_shape() {
    let mut synthesizer = RecordSynthesizer::seeded(5);
    let record = synthesizer.synthesize_kind(RecordKind::Detection);
    let line = record.to_json_line().unwrap();

    assert!(!line.contains('\n'));
    assert!(!line.contains(": "));
    assert!(line.starts_with(&format!(
        "{{\"run_id\":\"{}\",\"timestamp\":\"",
        record.run_id
    )));
    assert!(line.contains("\"type\":\"detection\""));
    assert!(line.contains("\"image_size\":{\"width\":1920,\"height\":1080}"));

    let value: Value = serde_json::from_str(&line).unwrap();
    let timestamp = value["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'), "timestamp {}", timestamp);
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    let parsed: LogRecord = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed.run_id, record.run_id);
    assert_eq!(parsed.payload, record.payload);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.123, 2), 0.12);
    assert_eq!(round_to(42.04, 1), 42.0);
    assert_eq!(round_to(79.999, 2), 80.0);
}
