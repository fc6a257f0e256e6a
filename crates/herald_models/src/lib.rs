//! Generative text service drivers for herald.
//!
//! The pipeline treats the generation service as an opaque boundary: one
//! request in, one response out. [`GenerationDriver`] is that boundary;
//! [`AnthropicClient`] implements it over the Anthropic Messages API.
//!
//! ```no_run
//! use herald_core::GenerateRequest;
//! use herald_models::{AnthropicClient, GenerationDriver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::from_env("https://api.anthropic.com/v1/messages")?;
//! let request = GenerateRequest::builder()
//!     .model("claude-haiku-4-5-20251001")
//!     .prompt("최근 10회차 당첨번호를 분석해 주세요.")
//!     .build()?;
//! let text = client.generate(&request).await?.into_text()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod driver;

pub use anthropic::{
    ANTHROPIC_API_URL, AnthropicClient, AnthropicContentBlock, AnthropicMessage,
    AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
};
pub use driver::GenerationDriver;
