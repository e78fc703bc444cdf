//! Active prompt lookup and rendering.

use crate::{TemplateVars, render_template};
use loresmith_core::{Prompt, RenderedPrompt};
use loresmith_error::{LoresmithResult, PromptError, PromptErrorKind};
use loresmith_interface::PromptRepository;
use tracing::{debug, instrument};

/// Fetch the prompt flagged active for `prompt_type`.
///
/// There is no fallback template: a type with no active prompt is a
/// request error.
///
/// # Errors
///
/// Returns [`PromptErrorKind::NoActivePrompt`] when no prompt of the type is
/// active, or the store's error if the lookup fails.
#[instrument(skip(repo))]
pub async fn resolve<R>(repo: &R, prompt_type: &str) -> LoresmithResult<Prompt>
where
    R: PromptRepository + ?Sized,
{
    let prompt = repo
        .active_prompt(prompt_type)
        .await?
        .ok_or_else(|| PromptError::new(PromptErrorKind::NoActivePrompt(prompt_type.into())))?;
    debug!(id = %prompt.id, version = prompt.version, "Resolved active prompt");
    Ok(prompt)
}

/// The prompt's system context and rendered content template.
pub fn render(prompt: &Prompt, vars: &TemplateVars) -> RenderedPrompt {
    RenderedPrompt {
        prompt_version: prompt.version,
        system: prompt.system_context.clone(),
        user: render_template(&prompt.content_template, vars),
    }
}
