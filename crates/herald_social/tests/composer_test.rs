//! Tests for post composition under the weighted budget.

use chrono::NaiveDate;
use herald_core::ContentArtifact;
use herald_social::{DEFAULT_EMOJI, TweetComposer, weighted_len};

fn artifact(title: &str, description: &str, category: &str, tags: &[&str]) -> ContentArtifact {
    ContentArtifact::builder()
        .slug("1100-draw-analysis")
        .title(title)
        .description(description)
        .body("## 분석")
        .date(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())
        .category(category)
        .tags(tags.iter().map(|t| t.to_string()).collect::<Vec<_>>())
        .build()
        .unwrap()
}

fn composer() -> TweetComposer {
    TweetComposer::new("https://lottery.io.kr")
}

#[test]
fn test_layout_with_short_description() {
    let text = composer().compose(&artifact(
        "1100회 당첨번호 분석",
        "저번호대가 강세였습니다.",
        "당첨번호 분석",
        &["1100회", "당첨번호"],
    ));

    assert_eq!(
        text,
        "🎯 1100회 당첨번호 분석\n\n저번호대가 강세였습니다.\n\nhttps://lottery.io.kr/blog/1100-draw-analysis\n\n#로또 #1100회 #당첨번호"
    );
}

#[test]
fn test_unknown_category_uses_default_emoji() {
    let text = composer().compose(&artifact("제목", "설명", "통계", &[]));
    assert!(text.starts_with(&format!("{DEFAULT_EMOJI} 제목")));
    assert!(text.ends_with("\n\n#로또"));
}

#[test]
fn test_hashtags_strip_hash_skip_empty_and_cap_at_three() {
    let hashtags = composer().hashtags(&artifact(
        "t",
        "d",
        "c",
        &["#로또", "", "빈도", "분석", "추가"],
    ));
    // "#로또" duplicates the fixed tag; "" is skipped; only the first three tags are considered
    assert_eq!(hashtags, "#로또 #빈도");
}

#[test]
fn test_long_description_is_truncated_with_ellipsis() {
    let description = "가".repeat(200);
    let text = composer().compose(&artifact("1100회 당첨번호 분석", &description, "당첨번호 분석", &["1100회"]));

    assert!(weighted_len(&text) <= 280);
    assert!(text.contains("…\n\nhttps://lottery.io.kr/blog/1100-draw-analysis"));
    assert!(text.ends_with("#로또 #1100회"));
}

#[test]
fn test_truncation_fills_budget_tightly() {
    let description = "a".repeat(500);
    let text = composer().compose(&artifact("title", &description, "c", &[]));

    // Reserve of two units for the one-unit ellipsis leaves exactly one unit slack
    assert_eq!(weighted_len(&text), 279);
}

#[test]
fn test_oversized_title_drops_description() {
    let title = "가".repeat(140);
    let text = composer().compose(&artifact(&title, "설명", "당첨번호 분석", &[]));

    assert_eq!(
        text,
        format!("🎯 {title}\n\nhttps://lottery.io.kr/blog/1100-draw-analysis\n\n#로또")
    );
}

#[test]
fn test_custom_budget_and_hashtag() {
    let composer = TweetComposer::new("https://example.com/")
        .with_max_weight(100)
        .with_fixed_hashtag("#lotto")
        .with_emoji("stats", "📈");
    let text = composer.compose(&artifact("t", &"x".repeat(300), "stats", &[]));

    assert!(text.starts_with("📈 t\n\n"));
    assert!(text.contains("https://example.com/blog/1100-draw-analysis"));
    assert!(weighted_len(&text) <= 100);
}

#[test]
fn test_urls_in_description_stay_within_budget() {
    let composer = composer();
    for pad in 0..260 {
        let description = format!(
            "{} http://example.com/a/very/long/path {}",
            "a".repeat(pad),
            "b".repeat(200)
        );
        let text = composer.compose(&artifact("title", &description, "c", &[]));
        assert!(
            weighted_len(&text) <= 280,
            "padding {pad} gave weight {}",
            weighted_len(&text)
        );
    }

    // A short URL weighs more than its characters
    let text = composer.compose(&artifact("title", &format!("{}http://a.io", "가".repeat(120)), "c", &[]));
    assert!(weighted_len(&text) <= 280);
}

#[test]
fn test_composition_is_deterministic() {
    let artifact = artifact("1100회 당첨번호 분석", &"가".repeat(200), "당첨번호 분석", &["1100회"]);
    let composer = composer();
    assert_eq!(composer.compose(&artifact), composer.compose(&artifact));
}
