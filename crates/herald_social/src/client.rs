//! Signed posting to the X API.

use crate::OAuthSigner;
use async_trait::async_trait;
use herald_error::{DistributionError, DistributionErrorKind, HeraldResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

/// Create-post endpoint of the X API v2.
pub const X_TWEETS_URL: &str = "https://api.x.com/2/tweets";

/// A platform that accepts text posts.
///
/// One call is one request; retry and deadlines are layered on by the caller.
#[async_trait]
pub trait Distributor: Send + Sync {
    /// Publish `text`, returning the identifier the platform assigned.
    async fn post(&self, text: &str) -> HeraldResult<String>;

    /// Platform name (e.g., "x").
    fn platform_name(&self) -> &'static str;
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    data: Option<CreatedPostData>,
}

#[derive(Debug, Deserialize)]
struct CreatedPostData {
    id: Option<String>,
}

/// X API client posting with OAuth 1.0a user context.
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    signer: OAuthSigner,
    endpoint: String,
}

impl XClient {
    /// Client posting to `endpoint`, usually [`X_TWEETS_URL`].
    pub fn new(signer: OAuthSigner, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            signer,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Distributor for XClient {
    #[instrument(skip(self, text), fields(endpoint = %self.endpoint, chars = text.chars().count()))]
    async fn post(&self, text: &str) -> HeraldResult<String> {
        let authorization = self.signer.authorization_header("POST", &self.endpoint)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", authorization)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to X API");
                DistributionError::new(DistributionErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read X API response");
            DistributionError::new(DistributionErrorKind::Request(e.to_string()))
        })?;

        if !status.is_success() {
            error!(status = %status, body = %body, "X API returned error");
            return Err(DistributionError::new(DistributionErrorKind::Rejected {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let id = serde_json::from_str::<CreatedPost>(&body)
            .ok()
            .and_then(|created| created.data)
            .and_then(|data| data.id)
            .filter(|id| !id.is_empty());

        match id {
            Some(id) => {
                debug!(post_id = %id, "X API accepted post");
                Ok(id)
            }
            None => {
                error!(status = %status, body = %body, "X API response carried no post id");
                Err(DistributionError::new(DistributionErrorKind::MissingPostId(body)).into())
            }
        }
    }

    fn platform_name(&self) -> &'static str {
        "x"
    }
}
