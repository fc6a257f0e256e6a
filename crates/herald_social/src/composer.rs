//! Post composition under the weighted length budget.

use crate::weight::{char_weight, weighted_len};
use herald_core::ContentArtifact;
use std::collections::BTreeMap;

/// Glyph used when an artifact's category has no mapping.
pub const DEFAULT_EMOJI: &str = "📊";

const DEFAULT_MAX_WEIGHT: usize = 280;
const DEFAULT_FIXED_HASHTAG: &str = "#로또";
const ELLIPSIS: char = '…';
const ELLIPSIS_RESERVE: usize = 2;
const MAX_DERIVED_HASHTAGS: usize = 3;

/// Renders artifacts into platform-ready post text.
///
/// Layout: `{emoji} {title}`, blank line, description, blank line,
/// `{site_url}/blog/{slug}`, blank line, hashtags. The description is the
/// only part that gets shortened; when even the skeleton exceeds the budget
/// it is dropped entirely.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use herald_core::ContentArtifact;
/// use herald_social::{TweetComposer, weighted_len};
///
/// let artifact = ContentArtifact::builder()
///     .slug("1100-draw-analysis")
///     .title("1100회 당첨번호 분석")
///     .description("저번호대가 강세였습니다.")
///     .body("## 분석")
///     .date(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())
///     .category("당첨번호 분석")
///     .tags(vec!["1100회".to_string()])
///     .build()
///     .unwrap();
///
/// let text = TweetComposer::new("https://lottery.io.kr").compose(&artifact);
/// assert!(text.starts_with("🎯 1100회 당첨번호 분석\n\n"));
/// assert!(text.ends_with("https://lottery.io.kr/blog/1100-draw-analysis\n\n#로또 #1100회"));
/// assert!(weighted_len(&text) <= 280);
/// ```
#[derive(Debug, Clone)]
pub struct TweetComposer {
    site_url: String,
    max_weight: usize,
    fixed_hashtag: String,
    emojis: BTreeMap<String, String>,
    default_emoji: String,
}

impl TweetComposer {
    /// Composer linking to `site_url` with the stock budget, hashtag and emoji map.
    pub fn new(site_url: impl Into<String>) -> Self {
        let emojis = [
            ("당첨번호 분석", "🎯"),
            ("예상번호", "🔮"),
            ("예상번호 분석", "🔮"),
        ]
        .into_iter()
        .map(|(category, emoji)| (category.to_string(), emoji.to_string()))
        .collect();

        Self {
            site_url: site_url.into().trim_end_matches('/').to_string(),
            max_weight: DEFAULT_MAX_WEIGHT,
            fixed_hashtag: DEFAULT_FIXED_HASHTAG.to_string(),
            emojis,
            default_emoji: DEFAULT_EMOJI.to_string(),
        }
    }

    /// Override the total weighted budget.
    pub fn with_max_weight(mut self, max_weight: usize) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Override the hashtag every post carries.
    pub fn with_fixed_hashtag(mut self, hashtag: impl Into<String>) -> Self {
        self.fixed_hashtag = hashtag.into();
        self
    }

    /// Map a category to a leading emoji.
    pub fn with_emoji(mut self, category: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.emojis.insert(category.into(), emoji.into());
        self
    }

    /// Canonical link to the artifact.
    pub fn link(&self, artifact: &ContentArtifact) -> String {
        format!("{}/blog/{}", self.site_url, artifact.slug())
    }

    /// Fixed hashtag plus up to three from the artifact's tags, deduplicated.
    pub fn hashtags(&self, artifact: &ContentArtifact) -> String {
        let mut tags: Vec<String> = vec![self.fixed_hashtag.clone()];
        for tag in artifact.tags().iter().take(MAX_DERIVED_HASHTAGS) {
            let cleaned = tag.strip_prefix('#').unwrap_or(tag);
            if cleaned.is_empty() {
                continue;
            }
            let hashtag = format!("#{cleaned}");
            if !tags.contains(&hashtag) {
                tags.push(hashtag);
            }
        }
        tags.join(" ")
    }

    /// Render the post text.
    pub fn compose(&self, artifact: &ContentArtifact) -> String {
        let emoji = self
            .emojis
            .get(artifact.category())
            .unwrap_or(&self.default_emoji);
        let prefix = format!("{} {}", emoji, artifact.title());
        let link = self.link(artifact);
        let hashtags = self.hashtags(artifact);

        let skeleton = format!("{prefix}\n\n\n\n{link}\n\n{hashtags}");
        let budget = self.max_weight as i64 - weighted_len(&skeleton) as i64;
        if budget <= 0 {
            tracing::debug!(slug = %artifact.slug(), "Skeleton fills the budget, dropping description");
            return format!("{prefix}\n\n{link}\n\n{hashtags}");
        }

        // URLs inside the description weigh a flat 23 no matter their length,
        // so the per-character fit is only a first guess.
        let mut description = fit_description(artifact.description(), budget as usize);
        while !description.is_empty() {
            let text = format!("{prefix}\n\n{description}\n\n{link}\n\n{hashtags}");
            if weighted_len(&text) <= self.max_weight {
                return text;
            }
            description = shorten(&description);
        }
        format!("{prefix}\n\n{link}\n\n{hashtags}")
    }
}

/// Longest prefix of `description` that leaves room for an ellipsis within
/// `budget`, ellipsis appended when anything was cut.
fn fit_description(description: &str, budget: usize) -> String {
    let limit = budget.saturating_sub(ELLIPSIS_RESERVE);
    let mut fitted = String::new();
    let mut used = 0;

    for c in description.chars() {
        let weight = char_weight(c);
        if used + weight > limit {
            fitted.push(ELLIPSIS);
            break;
        }
        fitted.push(c);
        used += weight;
    }
    fitted
}

/// Drop one more character from a fitted description, keeping the ellipsis.
fn shorten(description: &str) -> String {
    let base = description.strip_suffix(ELLIPSIS).unwrap_or(description);
    let mut chars = base.chars();
    if chars.next_back().is_none() {
        return String::new();
    }
    let mut shorter: String = chars.collect();
    shorter.push(ELLIPSIS);
    shorter
}
