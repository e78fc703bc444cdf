//! Repository traits for the document store.

use async_trait::async_trait;
use loresmith_core::{
    Backstory, NewBackstory, NewPrompt, NewStoryElement, NewTweet, Prompt, PromptUpdate,
    RefinementStage, StoryElement, StoryElementFilter, Tweet,
};
use loresmith_error::LoresmithResult;
use uuid::Uuid;

/// Storage for prompt templates.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// The prompt flagged active for `prompt_type`, if any.
    async fn active_prompt(&self, prompt_type: &str) -> LoresmithResult<Option<Prompt>>;

    /// Prompts ordered by type, then newest version first.
    async fn list_prompts(&self, prompt_type: Option<&str>) -> LoresmithResult<Vec<Prompt>>;

    /// Load a prompt by id.
    async fn get_prompt(&self, id: Uuid) -> LoresmithResult<Option<Prompt>>;

    /// Insert a prompt with the next version number for its type.
    ///
    /// When `new_prompt.active` is set, the new prompt is activated as by
    /// [`PromptRepository::activate_prompt`].
    async fn create_prompt(&self, new_prompt: NewPrompt) -> LoresmithResult<Prompt>;

    /// Apply a partial update. Fails with a not-found error for unknown ids.
    async fn update_prompt(&self, id: Uuid, update: PromptUpdate) -> LoresmithResult<Prompt>;

    /// Clear `active` on every other prompt of the same type, then set it on
    /// this one. Fails with a not-found error for unknown ids.
    async fn activate_prompt(&self, id: Uuid) -> LoresmithResult<Prompt>;

    /// Delete a prompt. Returns whether a document was removed.
    async fn delete_prompt(&self, id: Uuid) -> LoresmithResult<bool>;
}

/// Storage for character backstories.
#[async_trait]
pub trait BackstoryRepository: Send + Sync {
    /// Insert a backstory as the token's active one, clearing the flag on
    /// its older backstories.
    async fn insert_backstory(&self, new_backstory: NewBackstory) -> LoresmithResult<Backstory>;

    /// The token's active backstory, if any.
    async fn active_backstory(&self, token_id: &str) -> LoresmithResult<Option<Backstory>>;

    /// Backstories, newest first, optionally for one token.
    async fn list_backstories(&self, token_id: Option<&str>) -> LoresmithResult<Vec<Backstory>>;

    /// Load a backstory by id.
    async fn get_backstory(&self, id: Uuid) -> LoresmithResult<Option<Backstory>>;

    /// Make a specific backstory the token's active one.
    async fn activate_backstory(&self, id: Uuid) -> LoresmithResult<Backstory>;
}

/// Storage for story elements.
#[async_trait]
pub trait StoryElementRepository: Send + Sync {
    /// Insert a story element.
    async fn insert_story_element(
        &self,
        new_element: NewStoryElement,
    ) -> LoresmithResult<StoryElement>;

    /// Story elements matching `filter`, newest first.
    async fn list_story_elements(
        &self,
        filter: &StoryElementFilter,
    ) -> LoresmithResult<Vec<StoryElement>>;

    /// Load a story element by id.
    async fn get_story_element(&self, id: Uuid) -> LoresmithResult<Option<StoryElement>>;

    /// Overwrite the stage label. No transition rules are applied.
    async fn set_stage(&self, id: Uuid, stage: RefinementStage) -> LoresmithResult<StoryElement>;
}

/// Storage for tweets.
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Insert a tweet.
    async fn insert_tweet(&self, new_tweet: NewTweet) -> LoresmithResult<Tweet>;

    /// Tweets, newest first, optionally for one token.
    async fn list_tweets(&self, token_id: Option<&str>) -> LoresmithResult<Vec<Tweet>>;

    /// Load a tweet by id.
    async fn get_tweet(&self, id: Uuid) -> LoresmithResult<Option<Tweet>>;
}

/// A store that holds every document collection.
pub trait LoreRepository:
    PromptRepository + BackstoryRepository + StoryElementRepository + TweetRepository
{
}

impl<T> LoreRepository for T where
    T: PromptRepository + BackstoryRepository + StoryElementRepository + TweetRepository
{
}
