//! Build-then-pin flow for token metadata.

use crate::MetadataRequest;
use loresmith_error::{JsonError, LoresmithResult, PromptError, PromptErrorKind};
use loresmith_interface::{BackstoryRepository, MetadataPinner, PinnedContent};
use tracing::{info, instrument};

/// Build metadata for a token and pin it.
///
/// The description falls back to the token's active backstory.
///
/// # Errors
///
/// Returns a validation error for an empty token id, or the store's or
/// pinning service's error.
#[instrument(skip_all, fields(token_id = %request.token_id))]
pub async fn pin_token_metadata<R>(
    repo: &R,
    pinner: &dyn MetadataPinner,
    request: &MetadataRequest,
) -> LoresmithResult<PinnedContent>
where
    R: BackstoryRepository + ?Sized,
{
    let token_id = request.token_id.trim();
    if token_id.is_empty() {
        return Err(PromptError::new(PromptErrorKind::Validation(
            "tokenId must not be empty".into(),
        ))
        .into());
    }

    let backstory = match request.description {
        Some(_) => None,
        None => repo.active_backstory(token_id).await?,
    };
    let metadata = request.to_metadata(backstory.as_ref());
    let content = serde_json::to_value(&metadata)
        .map_err(|e| JsonError::new(format!("Failed to serialize metadata: {e}")))?;

    let pinned = pinner
        .pin_json(&format!("token-{token_id}-metadata"), &content)
        .await?;
    info!(cid = %pinned.cid, "Pinned token metadata");
    Ok(pinned)
}
