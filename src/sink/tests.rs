use super::*;
use crate::error::LoggenError;
use crate::record::{LogRecord, RecordKind, RecordSynthesizer};
use std::collections::HashSet;

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_thousand_appends_give_thousand_parseable_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aiscout.log");
    let mut sink = FileSink::new(&path);
    let mut synthesizer = RecordSynthesizer::seeded(1);

    let mut run_ids = Vec::new();
    for _ in 0..1000 {
        let record = synthesizer.synthesize();
        run_ids.push(record.run_id);
        sink.append(record).await.unwrap();
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1000);

    for (line, run_id) in lines.iter().zip(&run_ids) {
        let parsed: LogRecord = serde_json::from_str(line).unwrap();
        assert_eq!(&parsed.run_id, run_id);
    }

    let unique: HashSet<_> = run_ids.iter().collect();
    assert_eq!(unique.len(), 1000);
}

#[tokio::test]
async fn test_existing_content_is_never_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aiscout.log");
    std::fs::write(&path, "{\"existing\":true}\n").unwrap();

    let mut sink = FileSink::new(&path);
    let mut synthesizer = RecordSynthesizer::seeded(2);

    sink.append(synthesizer.synthesize()).await.unwrap();
    let after_one = std::fs::read_to_string(&path).unwrap();

    sink.append(synthesizer.synthesize()).await.unwrap();
    let after_two = std::fs::read_to_string(&path).unwrap();

    assert!(after_one.starts_with("{\"existing\":true}\n"));
    assert!(after_two.starts_with(&after_one));
    assert_eq!(read_lines(&path).len(), 3);
    assert!(after_two.ends_with('\n'));
}

#[tokio::test]
async fn test_missing_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared").join("logs").join("aiscout.log");
    let mut sink = FileSink::new(&path);

    sink.append(RecordSynthesizer::seeded(3).synthesize_kind(RecordKind::System))
        .await
        .unwrap();

    assert_eq!(read_lines(&path).len(), 1);
}

#[tokio::test]
async fn test_prepare_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("shared-logs");
    let sink = FileSink::new(log_dir.join("aiscout.log"));

    sink.prepare().await.unwrap();

    assert!(log_dir.is_dir());
    assert!(!sink.path().exists());
}

#[tokio::test]
async fn test_failed_append_reports_and_later_appends_recover() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aiscout.log");
    let mut sink = FileSink::new(&path);
    let mut synthesizer = RecordSynthesizer::seeded(4);

    // A directory squatting on the log path makes the open fail
    std::fs::create_dir(&path).unwrap();
    let err = sink.append(synthesizer.synthesize()).await.unwrap_err();
    match err {
        LoggenError::Sink { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {}", other),
    }

    std::fs::remove_dir(&path).unwrap();
    sink.append(synthesizer.synthesize()).await.unwrap();

    assert_eq!(read_lines(&path).len(), 1);
}

#[tokio::test]
async fn test_memory_sink_shares_lines_between_clones() {
    let sink = MemorySink::new();
    let mut writer = sink.clone();
    let mut synthesizer = RecordSynthesizer::seeded(5);

    assert!(sink.is_empty());
    for _ in 0..3 {
        writer.append(synthesizer.synthesize()).await.unwrap();
    }

    assert_eq!(sink.len(), 3);
    for line in sink.lines() {
        assert!(serde_json::from_str::<LogRecord>(&line).is_ok());
    }
    assert_eq!(writer.describe(), "memory");
}
