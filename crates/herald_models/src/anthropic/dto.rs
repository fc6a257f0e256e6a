//! Anthropic Messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use herald_core::{GenerateRequest, GenerateResponse, Output};
use serde::{Deserialize, Serialize};

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role ("user" or "assistant")
    role: String,
    /// Plain text content
    content: String,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Conversation so far
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

impl From<&GenerateRequest> for AnthropicRequest {
    fn from(request: &GenerateRequest) -> Self {
        Self {
            model: request.model().clone(),
            max_tokens: *request.max_tokens(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.prompt().clone(),
            }],
        }
    }
}

/// One content block of a response.
///
/// Only `text` blocks carry `text`; other block types are kept by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicContentBlock {
    /// Block type ("text", "tool_use", ...)
    #[serde(rename = "type")]
    kind: String,
    /// Text of a text block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Response body of `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Message id
    id: String,
    /// Model that produced the message
    #[serde(default)]
    model: String,
    /// Content blocks in order
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
}

impl From<AnthropicResponse> for GenerateResponse {
    fn from(response: AnthropicResponse) -> Self {
        let outputs = response
            .content
            .into_iter()
            .map(|block| {
                if block.kind == "text" {
                    Output::Text(block.text.unwrap_or_default())
                } else {
                    Output::Other(block.kind)
                }
            })
            .collect();
        GenerateResponse { outputs }
    }
}
