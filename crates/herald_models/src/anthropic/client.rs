use crate::{AnthropicRequest, AnthropicResponse, GenerationDriver};
use herald_core::{GenerateRequest, GenerateResponse};
use herald_error::{ConfigError, GenerationError, GenerationErrorKind, HeraldResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default Messages API endpoint.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `api_url` - Messages endpoint, usually [`ANTHROPIC_API_URL`]
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// Creates a client with the key from `ANTHROPIC_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or empty.
    pub fn from_env(api_url: impl Into<String>) -> HeraldResult<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key, api_url)),
            _ => Err(ConfigError::new(format!("{} is not set", API_KEY_VAR)).into()),
        }
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, GenerationError> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                GenerationError::new(GenerationErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            GenerationError::new(GenerationErrorKind::Parse(e.to_string()))
        })?;

        debug!(
            response_id = %anthropic_response.id(),
            stop_reason = ?anthropic_response.stop_reason(),
            "Received response from Anthropic"
        );
        Ok(anthropic_response)
    }
}

#[async_trait::async_trait]
impl GenerationDriver for AnthropicClient {
    #[instrument(skip(self, request), fields(max_tokens = request.max_tokens()))]
    async fn generate(&self, request: &GenerateRequest) -> HeraldResult<GenerateResponse> {
        let anthropic_request = AnthropicRequest::from(request);
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;
        Ok(anthropic_response.into())
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
