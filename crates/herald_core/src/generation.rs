//! Driver-agnostic generation request and response types.

use derive_builder::Builder;
use derive_getters::Getters;
use herald_error::{GenerationError, GenerationErrorKind};
use serde::{Deserialize, Serialize};

/// A single-turn generation request.
///
/// # Examples
///
/// ```
/// use herald_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .model("claude-haiku-4-5-20251001")
///     .max_tokens(4000u32)
///     .prompt("Write about round 1100.")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.max_tokens(), 4000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Model identifier
    model: String,
    /// Maximum number of tokens to generate
    #[builder(default = "4000")]
    max_tokens: u32,
    /// Full user prompt (grounding context plus topic instructions)
    prompt: String,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// One content element returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
    /// Any non-text element, identified by its wire type.
    Other(String),
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs, in service order
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Creates a response holding a single text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// Extracts the article text.
    ///
    /// The first element must exist and be non-empty text; anything else is a
    /// hard error.
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_core::{GenerateResponse, Output};
    ///
    /// assert_eq!(GenerateResponse::text("## 본문").into_text().unwrap(), "## 본문");
    ///
    /// let tool = GenerateResponse { outputs: vec![Output::Other("tool_use".into())] };
    /// assert!(tool.into_text().is_err());
    /// ```
    pub fn into_text(self) -> Result<String, GenerationError> {
        match self.outputs.into_iter().next() {
            None => Err(GenerationError::new(GenerationErrorKind::MissingContent)),
            Some(Output::Other(kind)) => Err(GenerationError::new(
                GenerationErrorKind::UnexpectedContentType(kind),
            )),
            Some(Output::Text(text)) if text.is_empty() => {
                Err(GenerationError::new(GenerationErrorKind::EmptyText))
            }
            Some(Output::Text(text)) => Ok(text),
        }
    }
}
