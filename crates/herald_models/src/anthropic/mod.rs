//! Anthropic Messages API driver.

mod client;
mod dto;

pub use client::{ANTHROPIC_API_URL, AnthropicClient};
pub use dto::{
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse,
};
