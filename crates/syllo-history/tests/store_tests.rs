//! Persistence round-trip tests for the history store.

use std::fs;
use syllo_domain::{HistoryRecord, ReasoningStep, StepStatus};
use syllo_history::HistoryStore;

fn record(id: &str, question: &str) -> HistoryRecord {
    HistoryRecord {
        id: id.to_string(),
        question: question.to_string(),
        result: "yes".to_string(),
        timestamp: "2026-08-24T10:00:00Z".to_string(),
        steps: vec![ReasoningStep {
            label: "ASP求解".to_string(),
            status: StepStatus::Success,
        }],
    }
}

#[test]
fn persist_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::new(&path);
    store.add(record("a", "first question"));
    store.add(record("b", "second question"));

    let mut reloaded = HistoryStore::new(&path);
    reloaded.load();
    assert_eq!(reloaded.records(), store.records());
    assert_eq!(reloaded.records()[0].id, "b");
}

#[test]
fn add_then_delete_restores_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::new(dir.path().join("history.json"));
    store.add(record("a", "kept"));
    let before = store.records().to_vec();

    store.add(record("b", "transient"));
    store.delete("b");

    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn delete_removes_all_matching_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::new(dir.path().join("history.json"));
    store.add(record("dup", "first copy"));
    store.add(record("other", "unrelated"));
    store.add(record("dup", "second copy"));

    store.delete("dup");

    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id, "other");
}

#[test]
fn delete_missing_id_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::new(dir.path().join("history.json"));
    store.add(record("a", "question"));

    store.delete("no-such-id");
    assert_eq!(store.len(), 1);
}

#[test]
fn clear_erases_the_storage_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::new(&path);
    store.add(record("a", "question"));
    assert!(path.exists());

    store.clear();
    assert!(store.is_empty());
    assert!(!path.exists());

    let mut reloaded = HistoryStore::new(&path);
    reloaded.load();
    assert!(reloaded.is_empty());
}

#[test]
fn load_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::new(dir.path().join("never-written.json"));
    store.load();
    assert!(store.is_empty());
}

#[test]
fn load_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ this is not json").unwrap();

    let mut store = HistoryStore::new(&path);
    store.load();
    assert!(store.is_empty());
}

#[test]
fn load_tolerates_missing_records_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, r#"{"lastUpdated": 1756000000000}"#).unwrap();

    let mut store = HistoryStore::new(&path);
    store.load();
    assert!(store.is_empty());
}

#[test]
fn persisted_slot_carries_last_updated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::new(&path);
    store.add(record("a", "question"));

    let contents = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(value.get("lastUpdated").and_then(|v| v.as_i64()).unwrap_or(0) > 0);
    assert_eq!(value.get("records").and_then(|v| v.as_array()).map(|a| a.len()), Some(1));
}
