//! Publication bookkeeping.

use chrono::{DateTime, FixedOffset, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Proof that an artifact was distributed.
///
/// One record exists per successfully posted slug; the set of recorded slugs
/// is the sole source of truth for "already published".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Slug of the published artifact
    slug: String,
    /// Identifier assigned by the platform
    #[serde(rename = "tweetId")]
    post_id: String,
    /// Publication time (KST, RFC 3339)
    posted_at: String,
}

impl PublicationRecord {
    /// Creates a record with an explicit timestamp.
    pub fn new(
        slug: impl Into<String>,
        post_id: impl Into<String>,
        posted_at: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            post_id: post_id.into(),
            posted_at: posted_at.into(),
        }
    }

    /// Creates a record stamped with `at`, rendered in Korea Standard Time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use herald_core::PublicationRecord;
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 1, 6, 12, 0, 0).unwrap();
    /// let record = PublicationRecord::published_at("1100-draw-analysis", "1744", at);
    /// assert_eq!(record.posted_at(), "2024-01-06T21:00:00+09:00");
    /// ```
    pub fn published_at(slug: impl Into<String>, post_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::new(slug, post_id, kst_timestamp(at))
    }
}

fn kst_timestamp(at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(KST_OFFSET_SECS) {
        Some(kst) => at.with_timezone(&kst).to_rfc3339(),
        None => at.to_rfc3339(),
    }
}
