//! Tests for the content generators against the in-memory store.

mod test_utils;

use loresmith_core::{CharacterProfile, RefinementStage, SourceKind, TweetSource};
use loresmith_database::InMemoryStore;
use loresmith_error::{LoresmithError, LoresmithErrorKind, ModelsErrorKind, PromptErrorKind};
use loresmith_generation::{
    LoreGenerator, NamesRequest, StoryElementRequest, TweetRequest, seed_default_prompts,
};
use loresmith_interface::{
    BackstoryRepository, PromptRepository, StoryElementRepository, TweetRepository,
};
use std::sync::Arc;
use test_utils::{MockBehavior, MockDriver, seed_prompt};
use uuid::Uuid;

fn setup(driver: MockDriver) -> (LoreGenerator, InMemoryStore, Arc<MockDriver>) {
    let store = InMemoryStore::new();
    let driver = Arc::new(driver);
    let generator = LoreGenerator::new(Arc::new(store.clone()), driver.clone());
    (generator, store, driver)
}

fn prompt_kind(err: &LoresmithError) -> Option<&PromptErrorKind> {
    match err.kind() {
        LoresmithErrorKind::Prompt(e) => Some(&e.kind),
        _ => None,
    }
}

fn ranger(token_id: &str) -> CharacterProfile {
    let mut profile = CharacterProfile::new(token_id);
    profile.name = Some("Ysolde".into());
    profile.traits.insert("Class".into(), "Ranger".into());
    profile.traits.insert("Home".into(), "Saltmarsh".into());
    profile
}

#[tokio::test]
async fn test_missing_active_prompt_is_a_request_error() {
    let (generator, store, driver) = setup(MockDriver::new_success("unused"));

    let err = generator.backstory(&ranger("1")).await.unwrap_err();

    assert_eq!(
        prompt_kind(&err),
        Some(&PromptErrorKind::NoActivePrompt("backstory".into()))
    );
    assert!(err.to_string().contains("No active prompt found for type 'backstory'"));
    assert_eq!(driver.call_count(), 0);
    assert_eq!(store.backstory_count().await, 0);
}

#[tokio::test]
async fn test_backstory_renders_profile_and_becomes_active() -> anyhow::Result<()> {
    let (generator, store, driver) = setup(MockDriver::new_success("  A ranger of the marsh.  "));
    seed_prompt(
        &store,
        "backstory",
        "#{{tokenId}} {{name}} the {{Class}}\n{{traits}}\n{{unknown}}",
    )
    .await;

    let first = generator.backstory(&ranger("7")).await?;
    assert_eq!(first.backstory, "A ranger of the marsh.");
    assert_eq!(first.prompt_version, Some(1));
    assert_eq!(first.short_id.len(), 8);

    let request = driver.last_request().expect("driver was called");
    assert_eq!(request.system().as_deref(), Some("You are a test chronicler."));
    assert_eq!(
        request.messages()[0].content(),
        "#7 Ysolde the Ranger\nClass: Ranger\nHome: Saltmarsh\n{{unknown}}"
    );

    let second = generator.backstory(&ranger("7")).await?;
    let active = store.active_backstory("7").await?.expect("active backstory");
    assert_eq!(active.id, second.id);
    let first = store.get_backstory(first.id).await?.expect("first backstory");
    assert!(!first.is_active);
    Ok(())
}

#[tokio::test]
async fn test_names_are_parsed_and_not_stored() -> anyhow::Result<()> {
    let (generator, store, driver) =
        setup(MockDriver::new_success("1. Ash\n2. \"Birch\"\n3. Cedar\n4. Dusk"));
    seed_prompt(&store, "names", "Give {{count}} names for:\n{{traits}}").await;

    let mut request = NamesRequest {
        count: Some(3),
        ..Default::default()
    };
    request.traits.insert("Class".into(), "Bard".into());

    let names = generator.names(&request).await?;
    assert_eq!(names, vec!["Ash", "Birch", "Cedar"]);
    assert_eq!(
        driver.last_request().expect("driver was called").messages()[0].content(),
        "Give 3 names for:\nClass: Bard"
    );
    assert_eq!(store.backstory_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_names_count_out_of_range_is_rejected() {
    let (generator, store, driver) = setup(MockDriver::new_success("Ash"));
    seed_prompt(&store, "names", "{{count}}").await;

    for count in [0, 51] {
        let err = generator
            .names(&NamesRequest {
                count: Some(count),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(prompt_kind(&err), Some(PromptErrorKind::Validation(_))));
    }
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_story_element_draws_on_active_backstory() -> anyhow::Result<()> {
    let (generator, store, driver) = setup(MockDriver::new_success("The bell rang."));
    seed_prompt(&store, "story_element", "[{{backstory}}]").await;

    let without = generator
        .story_element(&StoryElementRequest {
            token_id: "4".into(),
        })
        .await?;
    assert_eq!(without.backstory_id, None);
    assert_eq!(
        driver.last_request().expect("driver was called").messages()[0].content(),
        "[]"
    );

    let backstory = store
        .insert_backstory(loresmith_core::NewBackstory {
            token_id: "4".into(),
            backstory: "Raised in a bell tower.".into(),
            prompt_version: None,
        })
        .await?;

    let element = generator
        .story_element(&StoryElementRequest {
            token_id: "4".into(),
        })
        .await?;
    assert_eq!(element.backstory_id, Some(backstory.id));
    assert_eq!(element.refinement_stage, RefinementStage::Unrefined);
    assert_eq!(
        driver.last_request().expect("driver was called").messages()[0].content(),
        "[Raised in a bell tower.]"
    );
    assert!(store.get_story_element(element.id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_tweet_references_its_source() -> anyhow::Result<()> {
    let (generator, store, driver) = setup(MockDriver::new_success("Bells at midnight."));
    seed_prompt(&store, "tweet", "{{tokenId}}: {{source}}").await;

    let backstory = store
        .insert_backstory(loresmith_core::NewBackstory {
            token_id: "5".into(),
            backstory: "Keeper of the bells.".into(),
            prompt_version: None,
        })
        .await?;
    let source = TweetSource {
        kind: SourceKind::Backstory,
        id: backstory.id,
    };

    let tweet = generator
        .tweet(&TweetRequest {
            token_id: "5".into(),
            source,
        })
        .await?;
    assert_eq!(tweet.source, source);
    assert_eq!(tweet.tweet, "Bells at midnight.");
    assert_eq!(
        driver.last_request().expect("driver was called").messages()[0].content(),
        "5: Keeper of the bells."
    );
    assert_eq!(store.list_tweets(Some("5")).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_tweet_with_unknown_source_is_not_found() {
    let (generator, store, driver) = setup(MockDriver::new_success("unused"));
    seed_prompt(&store, "tweet", "{{source}}").await;

    let err = generator
        .tweet(&TweetRequest {
            token_id: "5".into(),
            source: TweetSource {
                kind: SourceKind::StoryElement,
                id: Uuid::new_v4(),
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(prompt_kind(&err), Some(PromptErrorKind::NotFound(_))));
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_empty_completion_is_an_error() {
    let (generator, store, _driver) = setup(MockDriver::new_success("   \n"));
    seed_prompt(&store, "backstory", "{{tokenId}}").await;

    let err = generator.backstory(&ranger("9")).await.unwrap_err();
    match err.kind() {
        LoresmithErrorKind::Models(e) => {
            assert!(matches!(e.kind, ModelsErrorKind::EmptyCompletion(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.backstory_count().await, 0);
}

#[tokio::test]
async fn test_driver_failure_is_not_retried() {
    let (generator, store, driver) = setup(MockDriver::new_with_behavior(MockBehavior::Error(
        ModelsErrorKind::MissingConfiguration("no key".into()),
    )));
    seed_prompt(&store, "backstory", "{{tokenId}}").await;

    assert!(generator.backstory(&ranger("9")).await.is_err());
    assert_eq!(driver.call_count(), 1);
    assert_eq!(store.backstory_count().await, 0);
}

#[tokio::test]
async fn test_seed_default_prompts_fills_empty_types_once() -> anyhow::Result<()> {
    let store = InMemoryStore::new();
    seed_prompt(&store, "tweet", "custom {{source}}").await;

    let inserted = seed_default_prompts(&store).await?;
    let types: Vec<_> = inserted.iter().map(|p| p.prompt_type.as_str()).collect();
    assert_eq!(types, vec!["backstory", "names", "story_element"]);
    assert!(inserted.iter().all(|p| p.active));

    assert!(seed_default_prompts(&store).await?.is_empty());
    let tweet = store.active_prompt("tweet").await?.expect("tweet prompt");
    assert_eq!(tweet.content_template, "custom {{source}}");
    Ok(())
}
