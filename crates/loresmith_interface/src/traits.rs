//! Trait definitions for external service clients.

use crate::PinnedContent;
use async_trait::async_trait;
use loresmith_core::{GenerateRequest, GenerateResponse};
use loresmith_error::LoresmithResult;

/// Core trait that every LLM backend implements.
///
/// One call, one completion: implementations do not retry.
#[async_trait]
pub trait LoresmithDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> LoresmithResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}

/// Pins JSON documents to IPFS.
#[async_trait]
pub trait MetadataPinner: Send + Sync {
    /// Pin `content` under a human-readable `name`.
    async fn pin_json(
        &self,
        name: &str,
        content: &serde_json::Value,
    ) -> LoresmithResult<PinnedContent>;
}
