//! Tests for dataset loading with backup fallback.

use herald_error::{DataErrorKind, HeraldErrorKind};
use herald_storage::DrawSource;
use tempfile::TempDir;

const DATASET: &str = r#"{
  "draws": [
    {"drwNo": 1, "drwNoDate": "2002-12-07", "drwtNo1": 10, "drwtNo2": 23, "drwtNo3": 29,
     "drwtNo4": 33, "drwtNo5": 37, "drwtNo6": 40, "bnusNo": 16, "firstPrzwnerCo": 0},
    {"drwNo": 2, "drwNoDate": "2002-12-14", "drwtNo1": 9, "drwtNo2": 13, "drwtNo3": 21,
     "drwtNo4": 25, "drwtNo5": 32, "drwtNo6": 42, "bnusNo": 2, "firstPrzwnerCo": 1}
  ]
}"#;

#[tokio::test]
async fn test_loads_primary_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    let primary = temp_dir.path().join("lotto.json");
    std::fs::write(&primary, DATASET).unwrap();

    let source = DrawSource::new(&primary, temp_dir.path().join("lotto.json.bak"));
    let dataset = source.load().await.unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(*dataset.latest().unwrap().round(), 2);
}

#[tokio::test]
async fn test_falls_back_to_backup() {
    let temp_dir = TempDir::new().unwrap();
    let primary = temp_dir.path().join("lotto.json");
    let backup = temp_dir.path().join("lotto.json.bak");
    std::fs::write(&primary, "{ truncated").unwrap();
    std::fs::write(&backup, DATASET).unwrap();

    let dataset = DrawSource::new(&primary, &backup).load().await.unwrap();
    assert_eq!(dataset.len(), 2);
}

#[tokio::test]
async fn test_empty_primary_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let primary = temp_dir.path().join("lotto.json");
    let backup = temp_dir.path().join("lotto.json.bak");
    std::fs::write(&primary, r#"{"draws": []}"#).unwrap();
    std::fs::write(&backup, DATASET).unwrap();

    let dataset = DrawSource::new(&primary, &backup).load().await.unwrap();
    assert!(!dataset.is_empty());
}

#[tokio::test]
async fn test_both_unusable_is_data_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = DrawSource::new(
        temp_dir.path().join("missing.json"),
        temp_dir.path().join("missing.json.bak"),
    );

    let err = source.load().await.unwrap_err();
    assert!(matches!(
        err.kind(),
        HeraldErrorKind::Data(e) if matches!(e.kind, DataErrorKind::Exhausted { .. })
    ));
}
