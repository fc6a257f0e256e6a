//! Tests for publication tracking and the run lock.

use herald_core::PublicationRecord;
use herald_error::{HeraldErrorKind, StorageErrorKind};
use herald_storage::{PublicationTracker, RunLock};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = PublicationTracker::load(temp_dir.path().join("x-posted.json")).await;

    assert!(tracker.records().is_empty());
    assert!(!tracker.contains("1100-draw-analysis"));
}

#[tokio::test]
async fn test_corrupt_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("x-posted.json");
    std::fs::write(&path, "{\"posted\": [oops").unwrap();

    let tracker = PublicationTracker::load(&path).await;
    assert!(tracker.records().is_empty());
}

#[tokio::test]
async fn test_append_persists_across_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scripts").join("x-posted.json");

    let mut tracker = PublicationTracker::load(&path).await;
    tracker
        .append(PublicationRecord::new(
            "1100-draw-analysis",
            "1744000000000000000",
            "2024-01-06T21:00:00+09:00",
        ))
        .await
        .unwrap();

    let reloaded = PublicationTracker::load(&path).await;
    assert!(reloaded.contains("1100-draw-analysis"));
    assert_eq!(reloaded.records().len(), 1);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["posted"][0]["slug"], "1100-draw-analysis");
    assert_eq!(json["posted"][0]["tweetId"], "1744000000000000000");
    assert_eq!(json["posted"][0]["postedAt"], "2024-01-06T21:00:00+09:00");
}

#[tokio::test]
async fn test_reads_existing_tracker_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("x-posted.json");
    std::fs::write(
        &path,
        r#"{"posted":[{"slug":"a","tweetId":"1","postedAt":"2024-01-01T09:00:00+09:00"}]}"#,
    )
    .unwrap();

    let tracker = PublicationTracker::load(&path).await;
    assert!(tracker.contains("a"));
    assert!(!tracker.contains("b"));
}

#[tokio::test]
async fn test_duplicate_append_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut tracker = PublicationTracker::load(temp_dir.path().join("x-posted.json")).await;

    tracker.append(PublicationRecord::new("a", "1", "t")).await.unwrap();
    let err = tracker
        .append(PublicationRecord::new("a", "2", "t"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        HeraldErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::AlreadyExists(_))
    ));
    assert_eq!(tracker.records().len(), 1);
}

#[test]
fn test_run_lock_is_exclusive_and_released_on_drop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("herald.lock");

    let lock = RunLock::acquire(&path).unwrap();
    assert!(path.exists());

    let err = RunLock::acquire(&path).unwrap_err();
    assert!(matches!(
        err.kind(),
        HeraldErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::LockHeld(_))
    ));

    drop(lock);
    assert!(!path.exists());
    assert!(RunLock::acquire(&path).is_ok());
}

#[tokio::test]
async fn test_exclusive_load_sees_records_of_previous_holder() {
    let temp_dir = TempDir::new().unwrap();
    let tracking = temp_dir.path().join("x-posted.json");
    let lock_path = temp_dir.path().join(".herald-publish.lock");

    let (lock, mut first) = PublicationTracker::load_exclusive(&tracking, &lock_path)
        .await
        .unwrap();

    // A second run is turned away while the first one is publishing
    let err = PublicationTracker::load_exclusive(&tracking, &lock_path)
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        HeraldErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::LockHeld(_))
    ));

    first
        .append(PublicationRecord::new("1100-draw-analysis", "1", "t"))
        .await
        .unwrap();
    drop(lock);

    let (_lock, second) = PublicationTracker::load_exclusive(&tracking, &lock_path)
        .await
        .unwrap();
    assert!(second.contains("1100-draw-analysis"));
}
