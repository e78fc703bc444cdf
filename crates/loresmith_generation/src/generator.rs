//! Content generators.
//!
//! Each generator resolves the active prompt for its content kind, renders
//! it with request-derived variables, calls the driver once and stores or
//! shapes the result.

use crate::names::{DEFAULT_NAME_COUNT, MAX_NAME_COUNT, parse_names};
use crate::{NamesRequest, StoryElementRequest, TemplateVars, TweetRequest, render, resolve};
use loresmith_core::{
    Backstory, CharacterProfile, ContentKind, GenerateRequest, Message, NewBackstory,
    NewStoryElement, NewTweet, RefinementStage, RenderedPrompt, SourceKind, StoryElement, Tweet,
};
use loresmith_error::{
    LoresmithResult, ModelsError, ModelsErrorKind, PromptError, PromptErrorKind,
};
use loresmith_interface::{LoreRepository, LoresmithDriver};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Generates and stores lore through a driver and a document store.
#[derive(Clone)]
pub struct LoreGenerator {
    repo: Arc<dyn LoreRepository>,
    driver: Arc<dyn LoresmithDriver>,
}

impl std::fmt::Debug for LoreGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoreGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish()
    }
}

impl LoreGenerator {
    /// Create a generator over a store and a driver.
    pub fn new(repo: Arc<dyn LoreRepository>, driver: Arc<dyn LoresmithDriver>) -> Self {
        Self { repo, driver }
    }

    /// Generate a backstory for a character and make it the token's active one.
    #[instrument(skip(self, profile), fields(token_id = %profile.token_id))]
    pub async fn backstory(&self, profile: &CharacterProfile) -> LoresmithResult<Backstory> {
        let token_id = require_token_id(&profile.token_id)?;

        let mut vars = trait_vars(&profile.traits);
        vars.insert("tokenId".into(), token_id.to_string());
        vars.insert("name".into(), profile.name.clone().unwrap_or_default());

        let prompt = resolve(&*self.repo, ContentKind::Backstory.prompt_type()).await?;
        let rendered = render(&prompt, &vars);
        let text = self.complete(&rendered).await?;

        let backstory = self
            .repo
            .insert_backstory(NewBackstory {
                token_id: token_id.to_string(),
                backstory: text,
                prompt_version: Some(rendered.prompt_version),
            })
            .await?;
        info!(id = %backstory.id, short_id = %backstory.short_id, "Stored backstory");
        Ok(backstory)
    }

    /// Generate candidate names. Nothing is stored.
    #[instrument(skip(self, request), fields(count = ?request.count))]
    pub async fn names(&self, request: &NamesRequest) -> LoresmithResult<Vec<String>> {
        let count = request.count.unwrap_or(DEFAULT_NAME_COUNT);
        if count == 0 || count > MAX_NAME_COUNT {
            return Err(PromptError::new(PromptErrorKind::Validation(format!(
                "count must be between 1 and {MAX_NAME_COUNT}"
            )))
            .into());
        }

        let mut vars = trait_vars(&request.traits);
        vars.insert("count".into(), count.to_string());

        let prompt = resolve(&*self.repo, ContentKind::Names.prompt_type()).await?;
        let text = self.complete(&render(&prompt, &vars)).await?;

        let names = parse_names(&text, count);
        debug!(parsed = names.len(), "Parsed names");
        Ok(names)
    }

    /// Generate a story element from the token's active backstory.
    #[instrument(skip(self, request), fields(token_id = %request.token_id))]
    pub async fn story_element(
        &self,
        request: &StoryElementRequest,
    ) -> LoresmithResult<StoryElement> {
        let token_id = require_token_id(&request.token_id)?;
        let backstory = self.repo.active_backstory(token_id).await?;

        let mut vars = TemplateVars::new();
        vars.insert("tokenId".into(), token_id.to_string());
        vars.insert(
            "backstory".into(),
            backstory
                .as_ref()
                .map(|b| b.backstory.clone())
                .unwrap_or_default(),
        );

        let prompt = resolve(&*self.repo, ContentKind::StoryElement.prompt_type()).await?;
        let text = self.complete(&render(&prompt, &vars)).await?;

        let element = self
            .repo
            .insert_story_element(NewStoryElement {
                token_id: token_id.to_string(),
                story_element: text,
                refinement_stage: RefinementStage::Unrefined,
                backstory_id: backstory.map(|b| b.id),
            })
            .await?;
        info!(id = %element.id, "Stored story element");
        Ok(element)
    }

    /// Generate a tweet from a stored backstory or story element.
    #[instrument(
        skip(self, request),
        fields(token_id = %request.token_id, source = %request.source.kind)
    )]
    pub async fn tweet(&self, request: &TweetRequest) -> LoresmithResult<Tweet> {
        let token_id = require_token_id(&request.token_id)?;
        let source_text = self.source_text(request).await?;

        let mut vars = TemplateVars::new();
        vars.insert("tokenId".into(), token_id.to_string());
        vars.insert("source".into(), source_text);

        let prompt = resolve(&*self.repo, ContentKind::Tweet.prompt_type()).await?;
        let text = self.complete(&render(&prompt, &vars)).await?;

        let tweet = self
            .repo
            .insert_tweet(NewTweet {
                token_id: token_id.to_string(),
                tweet: text,
                source: request.source,
            })
            .await?;
        info!(id = %tweet.id, "Stored tweet");
        Ok(tweet)
    }

    async fn source_text(&self, request: &TweetRequest) -> LoresmithResult<String> {
        let id = request.source.id;
        let text = match request.source.kind {
            SourceKind::Backstory => self
                .repo
                .get_backstory(id)
                .await?
                .map(|b| b.backstory),
            SourceKind::StoryElement => self
                .repo
                .get_story_element(id)
                .await?
                .map(|e| e.story_element),
        };
        text.ok_or_else(|| {
            PromptError::new(PromptErrorKind::NotFound(format!(
                "{} {id}",
                request.source.kind
            )))
            .into()
        })
    }

    /// Send a rendered prompt and return the trimmed text of the completion.
    async fn complete(&self, rendered: &RenderedPrompt) -> LoresmithResult<String> {
        let system = (!rendered.system.is_empty()).then(|| rendered.system.clone());
        let request = GenerateRequest::builder()
            .system(system)
            .messages(vec![Message::user(rendered.user.clone())])
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

        let response = self.driver.generate(&request).await?;
        let text = response.text();
        if text.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyCompletion(
                self.driver.model_name().to_string(),
            ))
            .into());
        }
        Ok(text)
    }
}

fn require_token_id(token_id: &str) -> LoresmithResult<&str> {
    let trimmed = token_id.trim();
    if trimmed.is_empty() {
        return Err(PromptError::new(PromptErrorKind::Validation(
            "tokenId must not be empty".into(),
        ))
        .into());
    }
    Ok(trimmed)
}

/// `traits` as `key: value` lines plus each trait under its own key.
fn trait_vars(traits: &BTreeMap<String, String>) -> TemplateVars {
    let lines = traits
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut vars: TemplateVars = traits.clone();
    vars.insert("traits".into(), lines);
    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_vars_include_lines_and_keys() {
        let mut traits = BTreeMap::new();
        traits.insert("Class".to_string(), "Ranger".to_string());
        traits.insert("Eyes".to_string(), "Grey".to_string());

        let vars = trait_vars(&traits);
        assert_eq!(vars["traits"], "Class: Ranger\nEyes: Grey");
        assert_eq!(vars["Class"], "Ranger");
        assert_eq!(vars["Eyes"], "Grey");
    }

    #[test]
    fn blank_token_id_is_rejected() {
        assert!(require_token_id("  ").is_err());
        assert_eq!(require_token_id(" 42 ").unwrap(), "42");
    }
}
