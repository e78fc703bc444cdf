//! In-memory implementation of the repository traits.
//!
//! Used by tests and by development runs without a database. Each
//! collection is a vector in insertion order; everything sits behind one
//! lock so the activate pattern is atomic here too.

use crate::store::not_found;
use async_trait::async_trait;
use chrono::Utc;
use loresmith_core::{
    Backstory, NewBackstory, NewPrompt, NewStoryElement, NewTweet, Prompt, PromptUpdate,
    RefinementStage, StoryElement, StoryElementFilter, Tweet,
};
use loresmith_error::LoresmithResult;
use loresmith_interface::{
    BackstoryRepository, PromptRepository, StoryElementRepository, TweetRepository,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory document store.
///
/// All data is lost when the last clone is dropped.
///
/// # Example
/// ```no_run
/// use loresmith_database::InMemoryStore;
/// use loresmith_interface::PromptRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStore::new();
///     assert!(store.active_prompt("backstory").await.unwrap().is_none());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<Collections>>,
}

#[derive(Debug, Default)]
struct Collections {
    prompts: Vec<Prompt>,
    backstories: Vec<Backstory>,
    story_elements: Vec<StoryElement>,
    tweets: Vec<Tweet>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored prompts (for testing).
    pub async fn prompt_count(&self) -> usize {
        self.collections.read().await.prompts.len()
    }

    /// Number of stored backstories (for testing).
    pub async fn backstory_count(&self) -> usize {
        self.collections.read().await.backstories.len()
    }
}

impl Collections {
    fn activate_prompt(&mut self, id: Uuid) -> LoresmithResult<Prompt> {
        let prompt_type = self
            .prompts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.prompt_type.clone())
            .ok_or_else(|| not_found("prompt", id))?;

        let now = Utc::now();
        for prompt in self
            .prompts
            .iter_mut()
            .filter(|p| p.prompt_type == prompt_type)
        {
            prompt.active = prompt.id == id;
            if prompt.active {
                prompt.updated_at = now;
            }
        }
        self.prompts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("prompt", id).into())
    }
}

#[async_trait]
impl PromptRepository for InMemoryStore {
    async fn active_prompt(&self, prompt_type: &str) -> LoresmithResult<Option<Prompt>> {
        let collections = self.collections.read().await;
        Ok(collections
            .prompts
            .iter()
            .find(|p| p.active && p.prompt_type == prompt_type)
            .cloned())
    }

    async fn list_prompts(&self, prompt_type: Option<&str>) -> LoresmithResult<Vec<Prompt>> {
        let collections = self.collections.read().await;
        let mut prompts: Vec<Prompt> = collections
            .prompts
            .iter()
            .filter(|p| prompt_type.is_none_or(|t| p.prompt_type == t))
            .cloned()
            .collect();
        prompts.sort_by(|a, b| {
            a.prompt_type
                .cmp(&b.prompt_type)
                .then(b.version.cmp(&a.version))
        });
        Ok(prompts)
    }

    async fn get_prompt(&self, id: Uuid) -> LoresmithResult<Option<Prompt>> {
        let collections = self.collections.read().await;
        Ok(collections.prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn create_prompt(&self, new_prompt: NewPrompt) -> LoresmithResult<Prompt> {
        let mut collections = self.collections.write().await;
        let version = collections
            .prompts
            .iter()
            .filter(|p| p.prompt_type == new_prompt.prompt_type)
            .map(|p| p.version)
            .max()
            .unwrap_or(0)
            + 1;
        let now = Utc::now();
        let prompt = Prompt {
            id: Uuid::new_v4(),
            prompt_type: new_prompt.prompt_type,
            version,
            active: false,
            name: new_prompt.name,
            system_context: new_prompt.system_context,
            content_template: new_prompt.content_template,
            created_at: now,
            updated_at: now,
        };
        collections.prompts.push(prompt.clone());
        if new_prompt.active {
            collections.activate_prompt(prompt.id)
        } else {
            Ok(prompt)
        }
    }

    async fn update_prompt(&self, id: Uuid, update: PromptUpdate) -> LoresmithResult<Prompt> {
        let mut collections = self.collections.write().await;
        let prompt = collections
            .prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("prompt", id))?;
        if let Some(name) = update.name {
            prompt.name = name;
        }
        if let Some(system_context) = update.system_context {
            prompt.system_context = system_context;
        }
        if let Some(content_template) = update.content_template {
            prompt.content_template = content_template;
        }
        prompt.updated_at = Utc::now();
        Ok(prompt.clone())
    }

    async fn activate_prompt(&self, id: Uuid) -> LoresmithResult<Prompt> {
        self.collections.write().await.activate_prompt(id)
    }

    async fn delete_prompt(&self, id: Uuid) -> LoresmithResult<bool> {
        let mut collections = self.collections.write().await;
        let before = collections.prompts.len();
        collections.prompts.retain(|p| p.id != id);
        Ok(collections.prompts.len() < before)
    }
}

#[async_trait]
impl BackstoryRepository for InMemoryStore {
    async fn insert_backstory(&self, new_backstory: NewBackstory) -> LoresmithResult<Backstory> {
        let mut collections = self.collections.write().await;
        for existing in collections
            .backstories
            .iter_mut()
            .filter(|b| b.token_id == new_backstory.token_id)
        {
            existing.is_active = false;
        }
        let backstory = Backstory {
            id: Uuid::new_v4(),
            short_id: new_backstory.short_id(),
            token_id: new_backstory.token_id,
            backstory: new_backstory.backstory,
            is_active: true,
            prompt_version: new_backstory.prompt_version,
            created_at: Utc::now(),
        };
        collections.backstories.push(backstory.clone());
        Ok(backstory)
    }

    async fn active_backstory(&self, token_id: &str) -> LoresmithResult<Option<Backstory>> {
        let collections = self.collections.read().await;
        Ok(collections
            .backstories
            .iter()
            .rev()
            .find(|b| b.is_active && b.token_id == token_id)
            .cloned())
    }

    async fn list_backstories(&self, token_id: Option<&str>) -> LoresmithResult<Vec<Backstory>> {
        let collections = self.collections.read().await;
        Ok(collections
            .backstories
            .iter()
            .rev()
            .filter(|b| token_id.is_none_or(|t| b.token_id == t))
            .cloned()
            .collect())
    }

    async fn get_backstory(&self, id: Uuid) -> LoresmithResult<Option<Backstory>> {
        let collections = self.collections.read().await;
        Ok(collections.backstories.iter().find(|b| b.id == id).cloned())
    }

    async fn activate_backstory(&self, id: Uuid) -> LoresmithResult<Backstory> {
        let mut collections = self.collections.write().await;
        let token_id = collections
            .backstories
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.token_id.clone())
            .ok_or_else(|| not_found("backstory", id))?;
        let mut activated = None;
        for backstory in collections
            .backstories
            .iter_mut()
            .filter(|b| b.token_id == token_id)
        {
            backstory.is_active = backstory.id == id;
            if backstory.is_active {
                activated = Some(backstory.clone());
            }
        }
        activated.ok_or_else(|| not_found("backstory", id).into())
    }
}

#[async_trait]
impl StoryElementRepository for InMemoryStore {
    async fn insert_story_element(
        &self,
        new_element: NewStoryElement,
    ) -> LoresmithResult<StoryElement> {
        let now = Utc::now();
        let element = StoryElement {
            id: Uuid::new_v4(),
            token_id: new_element.token_id,
            story_element: new_element.story_element,
            refinement_stage: new_element.refinement_stage,
            backstory_id: new_element.backstory_id,
            created_at: now,
            updated_at: now,
        };
        self.collections
            .write()
            .await
            .story_elements
            .push(element.clone());
        Ok(element)
    }

    async fn list_story_elements(
        &self,
        filter: &StoryElementFilter,
    ) -> LoresmithResult<Vec<StoryElement>> {
        let collections = self.collections.read().await;
        let limit = filter
            .limit
            .map_or(usize::MAX, |l| l as usize);
        Ok(collections
            .story_elements
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_story_element(&self, id: Uuid) -> LoresmithResult<Option<StoryElement>> {
        let collections = self.collections.read().await;
        Ok(collections
            .story_elements
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn set_stage(&self, id: Uuid, stage: RefinementStage) -> LoresmithResult<StoryElement> {
        let mut collections = self.collections.write().await;
        let element = collections
            .story_elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found("story element", id))?;
        element.refinement_stage = stage;
        element.updated_at = Utc::now();
        Ok(element.clone())
    }
}

#[async_trait]
impl TweetRepository for InMemoryStore {
    async fn insert_tweet(&self, new_tweet: NewTweet) -> LoresmithResult<Tweet> {
        let tweet = Tweet {
            id: Uuid::new_v4(),
            token_id: new_tweet.token_id,
            tweet: new_tweet.tweet,
            source: new_tweet.source,
            created_at: Utc::now(),
        };
        self.collections.write().await.tweets.push(tweet.clone());
        Ok(tweet)
    }

    async fn list_tweets(&self, token_id: Option<&str>) -> LoresmithResult<Vec<Tweet>> {
        let collections = self.collections.read().await;
        Ok(collections
            .tweets
            .iter()
            .rev()
            .filter(|t| token_id.is_none_or(|id| t.token_id == id))
            .cloned()
            .collect())
    }

    async fn get_tweet(&self, id: Uuid) -> LoresmithResult<Option<Tweet>> {
        let collections = self.collections.read().await;
        Ok(collections.tweets.iter().find(|t| t.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loresmith_error::LoresmithErrorKind;

    fn new_prompt(prompt_type: &str, active: bool) -> NewPrompt {
        NewPrompt {
            prompt_type: prompt_type.into(),
            name: format!("{prompt_type} prompt"),
            system_context: "You are a chronicler.".into(),
            content_template: "Write about {{tokenId}}".into(),
            active,
        }
    }

    #[tokio::test]
    async fn versions_increase_per_type() {
        let store = InMemoryStore::new();
        let first = store.create_prompt(new_prompt("backstory", false)).await.unwrap();
        let second = store.create_prompt(new_prompt("backstory", false)).await.unwrap();
        let other = store.create_prompt(new_prompt("tweet", false)).await.unwrap();

        assert_eq!(first.version, 1);
        assert_eq!(second.version, 2);
        assert_eq!(other.version, 1);
        assert!(!first.active);
    }

    #[tokio::test]
    async fn activation_leaves_one_active_prompt_per_type() {
        let store = InMemoryStore::new();
        let first = store.create_prompt(new_prompt("backstory", true)).await.unwrap();
        let second = store.create_prompt(new_prompt("backstory", true)).await.unwrap();
        let tweet = store.create_prompt(new_prompt("tweet", true)).await.unwrap();

        let active = store.active_prompt("backstory").await.unwrap().unwrap();
        assert_eq!(active.id, second.id);

        store.activate_prompt(first.id).await.unwrap();
        let prompts = store.list_prompts(Some("backstory")).await.unwrap();
        let active: Vec<_> = prompts.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, first.id);

        // Other types are untouched
        let still = store.get_prompt(tweet.id).await.unwrap().unwrap();
        assert!(still.active);
    }

    #[tokio::test]
    async fn activating_unknown_prompt_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.activate_prompt(Uuid::new_v4()).await.unwrap_err();
        match err.kind() {
            LoresmithErrorKind::Database(e) => assert!(e.is_not_found()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn latest_backstory_is_active() {
        let store = InMemoryStore::new();
        let old = store
            .insert_backstory(NewBackstory {
                token_id: "1".into(),
                backstory: "First telling.".into(),
                prompt_version: Some(1),
            })
            .await
            .unwrap();
        let new = store
            .insert_backstory(NewBackstory {
                token_id: "1".into(),
                backstory: "Second telling.".into(),
                prompt_version: Some(1),
            })
            .await
            .unwrap();

        let active = store.active_backstory("1").await.unwrap().unwrap();
        assert_eq!(active.id, new.id);
        let old = store.get_backstory(old.id).await.unwrap().unwrap();
        assert!(!old.is_active);

        store.activate_backstory(old.id).await.unwrap();
        let active = store.active_backstory("1").await.unwrap().unwrap();
        assert_eq!(active.id, old.id);
        assert_eq!(store.list_backstories(Some("1")).await.unwrap()[0].id, new.id);
    }

    #[tokio::test]
    async fn story_elements_filter_by_token_and_stage() {
        let store = InMemoryStore::new();
        for (token, text) in [("1", "a"), ("1", "b"), ("2", "c")] {
            store
                .insert_story_element(NewStoryElement {
                    token_id: token.into(),
                    story_element: text.into(),
                    refinement_stage: RefinementStage::Unrefined,
                    backstory_id: None,
                })
                .await
                .unwrap();
        }
        let all_one = store
            .list_story_elements(&StoryElementFilter {
                token_id: Some("1".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all_one.len(), 2);
        assert_eq!(all_one[0].story_element, "b");

        store
            .set_stage(all_one[0].id, RefinementStage::IpaReady)
            .await
            .unwrap();
        let ready = store
            .list_story_elements(&StoryElementFilter {
                stage: Some(RefinementStage::IpaReady),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].id, all_one[0].id);

        let newest = store
            .list_story_elements(&StoryElementFilter {
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].story_element, "c");
    }
}
