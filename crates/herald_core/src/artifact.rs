//! Generated articles as persisted by the write path.

use chrono::NaiveDate;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Maximum length of a derived description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 150;

/// A generated, validated article.
///
/// The slug is both the storage key and the publication idempotency key.
/// Created once by the write path and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use herald_core::ContentArtifact;
///
/// let artifact = ContentArtifact::builder()
///     .slug("1100-draw-analysis")
///     .title("제1100회 로또 당첨번호 분석")
///     .description("이번 회차는 저번호대가 강세였습니다.")
///     .body("## 요약\n이번 회차는 저번호대가 강세였습니다.")
///     .date(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())
///     .category("당첨번호 분석")
///     .tags(vec!["1100회".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(artifact.slug(), "1100-draw-analysis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ContentArtifact {
    /// Unique slug
    slug: String,
    /// Article title
    title: String,
    /// Short description (at most 150 characters)
    description: String,
    /// Full markdown body
    #[serde(rename = "content")]
    body: String,
    /// Creation day
    date: NaiveDate,
    /// Category label
    category: String,
    /// Rendered tags
    #[builder(default)]
    #[serde(default)]
    tags: Vec<String>,
}

impl ContentArtifact {
    /// Creates a new builder for `ContentArtifact`.
    pub fn builder() -> ContentArtifactBuilder {
        ContentArtifactBuilder::default()
    }
}

/// Derives the short description from a markdown body.
///
/// Takes the first non-blank line that is not a heading, strips `**`
/// emphasis, clips to [`DESCRIPTION_MAX_CHARS`] characters and trims. Falls
/// back to `fallback` (normally the title) when no such line exists.
///
/// # Examples
///
/// ```
/// use herald_core::derive_description;
///
/// let body = "## 개요\n\n**1100회** 당첨번호는 고르게 분포했습니다.\n## 상세";
/// assert_eq!(derive_description(body, "제목"), "1100회 당첨번호는 고르게 분포했습니다.");
/// assert_eq!(derive_description("# only headings", "제목"), "제목");
/// ```
pub fn derive_description(body: &str, fallback: &str) -> String {
    match body
        .lines()
        .find(|line| !line.trim().is_empty() && !line.starts_with('#'))
    {
        Some(line) => line
            .replace("**", "")
            .chars()
            .take(DESCRIPTION_MAX_CHARS)
            .collect::<String>()
            .trim()
            .to_string(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_clipped_by_characters() {
        let line = "가".repeat(200);
        let description = derive_description(&line, "fallback");
        assert_eq!(description.chars().count(), DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn serialized_body_field_is_named_content() {
        let artifact = ContentArtifact::builder()
            .slug("frequency-2024-01-08")
            .title("t")
            .description("d")
            .body("b")
            .date(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
            .category("c")
            .build()
            .unwrap();

        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["content"], "b");
        assert_eq!(json["date"], "2024-01-08");
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
