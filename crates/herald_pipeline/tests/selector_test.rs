//! Tests for topic selection.

use chrono::NaiveDate;
use herald_core::{Draw, DrawDataset};
use herald_pipeline::{TopicCatalog, TopicSelector};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn dataset(latest: u32) -> DrawDataset {
    let start = NaiveDate::from_ymd_opt(2002, 12, 7).unwrap();
    let draws = (1..=latest)
        .map(|round| {
            let date = start + chrono::Duration::weeks(i64::from(round) - 1);
            Draw::new(round, date.format("%Y-%m-%d").to_string(), [3, 11, 19, 27, 33, 41], 7, 1)
        })
        .collect();
    DrawDataset::new(draws)
}

fn selector() -> TopicSelector {
    TopicSelector::new(TopicCatalog::bundled().unwrap())
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_priority_topic_until_its_round_exists() {
    let mut rng = StdRng::seed_from_u64(7);
    let selection = selector()
        .select_with_rng(&dataset(100), false, day(2024, 1, 8), &mut rng)
        .unwrap();

    assert_eq!(selection.topic().id(), "draw-analysis");
    assert_eq!(selection.slug(), "100-draw-analysis");
    assert_eq!(selection.title(), "제100회 로또 당첨번호 분석");
    assert_eq!(selection.tags()[0], "100회");
    assert!(selection.prompt().contains("3, 11, 19, 27, 33, 41"));
    assert!(selection.prompt().contains("제101회"));
}

#[test]
fn test_rotation_follows_iso_week() {
    let selector = selector();
    let draws = dataset(100);
    let rotation: Vec<String> = selector
        .catalog()
        .rotation()
        .iter()
        .map(|t| t.id().clone())
        .collect();

    // Monday and Sunday of ISO week 2 agree; week 3 moves on
    let monday = selector.select(&draws, true, day(2024, 1, 8)).unwrap();
    let sunday = selector.select(&draws, true, day(2024, 1, 14)).unwrap();
    let next_week = selector.select(&draws, true, day(2024, 1, 15)).unwrap();

    assert_eq!(monday.topic().id(), &rotation[2 % rotation.len()]);
    assert_eq!(sunday.topic().id(), monday.topic().id());
    assert_eq!(next_week.topic().id(), &rotation[3 % rotation.len()]);
    assert_eq!(monday.slug(), &format!("{}-2024-01-08", monday.topic().id()));
    assert_ne!(monday.topic().id(), "draw-analysis");
}

#[test]
fn test_context_bindings() {
    let draws = dataset(100);
    let mut rng = StdRng::seed_from_u64(42);
    let context = TopicSelector::context(&draws, day(2024, 1, 8), &mut rng).unwrap();

    assert_eq!(*context.round(), 100);
    assert_eq!(*context.next_round(), 101);
    assert_eq!(*context.total_draws(), 100);
    assert_eq!(*context.recent_count(), 20);
    assert_eq!(*context.year(), 2024);
    assert!(context.numbers().contains(context.target_number()));

    let fifth = draws.draws()[4].date();
    let latest = draws.draws()[0].date();
    assert_eq!(context.date_range(), &format!("{fifth} ~ {latest}"));
}

#[test]
fn test_short_dataset_date_range_uses_oldest_draw() {
    let draws = dataset(2);
    let mut rng = StdRng::seed_from_u64(1);
    let context = TopicSelector::context(&draws, day(2024, 1, 8), &mut rng).unwrap();
    assert_eq!(context.date_range(), "2002-12-07 ~ 2002-12-14");
}

#[test]
fn test_empty_dataset_is_an_error() {
    let selector = selector();
    assert!(selector.select(&DrawDataset::default(), false, day(2024, 1, 8)).is_err());
    assert!(selector.priority_slug(&DrawDataset::default()).is_err());
}
