//! The generation service boundary.

use async_trait::async_trait;
use herald_core::{GenerateRequest, GenerateResponse};
use herald_error::HeraldResult;

/// Anything that can turn a prompt into generated content.
///
/// Implementations perform exactly one service call per invocation; retry and
/// deadlines are layered on by the caller.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate content for `req`.
    async fn generate(&self, req: &GenerateRequest) -> HeraldResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;
}
