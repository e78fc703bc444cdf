//! Bundled starter prompts.

use loresmith_core::{NewPrompt, Prompt};
use loresmith_error::{ConfigError, LoresmithResult};
use loresmith_interface::PromptRepository;
use serde::Deserialize;
use tracing::{debug, info, instrument};

const DEFAULT_PROMPTS_TOML: &str = include_str!("../defaults/prompts.toml");

#[derive(Debug, Deserialize)]
struct DefaultPrompts {
    prompt: Vec<NewPrompt>,
}

/// The bundled starter prompt for each content kind.
///
/// # Errors
///
/// Returns a configuration error if the bundled file fails to parse.
pub fn default_prompts() -> LoresmithResult<Vec<NewPrompt>> {
    let parsed: DefaultPrompts = toml::from_str(DEFAULT_PROMPTS_TOML)
        .map_err(|e| ConfigError::new(format!("Failed to parse default prompts: {e}")))?;
    Ok(parsed.prompt)
}

/// Insert the bundled prompt for every content kind that has no prompt yet.
///
/// Types that already have prompts, active or not, are left alone.
/// Returns the prompts that were inserted.
#[instrument(skip(repo))]
pub async fn seed_default_prompts<R>(repo: &R) -> LoresmithResult<Vec<Prompt>>
where
    R: PromptRepository + ?Sized,
{
    let mut inserted = Vec::new();
    for new_prompt in default_prompts()? {
        if !repo.list_prompts(Some(&new_prompt.prompt_type)).await?.is_empty() {
            debug!(prompt_type = %new_prompt.prompt_type, "Prompts exist, skipping");
            continue;
        }
        inserted.push(repo.create_prompt(new_prompt).await?);
    }
    info!(count = inserted.len(), "Seeded default prompts");
    Ok(inserted)
}
