//! Conversions between Diesel rows and document types.

use crate::DatabaseResult;
use crate::models::{BackstoryRow, NewPromptRow, PromptRow, StoryElementRow, TweetRow};
use chrono::{DateTime, Utc};
use loresmith_core::{
    Backstory, NewBackstory, NewPrompt, NewStoryElement, NewTweet, Prompt, RefinementStage,
    SourceKind, StoryElement, Tweet, TweetSource,
};
use loresmith_error::{DatabaseError, DatabaseErrorKind};
use std::str::FromStr;
use uuid::Uuid;

pub fn prompt_from_row(row: PromptRow) -> Prompt {
    Prompt {
        id: row.id,
        prompt_type: row.prompt_type,
        version: row.version,
        active: row.active,
        name: row.name,
        system_context: row.system_context,
        content_template: row.content_template,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub fn new_prompt_row(new_prompt: NewPrompt, version: i32, now: DateTime<Utc>) -> NewPromptRow {
    NewPromptRow {
        id: Uuid::new_v4(),
        prompt_type: new_prompt.prompt_type,
        version,
        active: false,
        name: new_prompt.name,
        system_context: new_prompt.system_context,
        content_template: new_prompt.content_template,
        created_at: now,
        updated_at: now,
    }
}

pub fn backstory_from_row(row: BackstoryRow) -> Backstory {
    Backstory {
        id: row.id,
        token_id: row.token_id,
        short_id: row.short_id,
        backstory: row.backstory,
        is_active: row.is_active,
        prompt_version: row.prompt_version,
        created_at: row.created_at,
    }
}

pub fn new_backstory_row(new_backstory: NewBackstory, now: DateTime<Utc>) -> BackstoryRow {
    BackstoryRow {
        id: Uuid::new_v4(),
        short_id: new_backstory.short_id(),
        token_id: new_backstory.token_id,
        backstory: new_backstory.backstory,
        is_active: true,
        prompt_version: new_backstory.prompt_version,
        created_at: now,
    }
}

pub fn story_element_from_row(row: StoryElementRow) -> DatabaseResult<StoryElement> {
    Ok(StoryElement {
        id: row.id,
        refinement_stage: parse_stage(&row.refinement_stage)?,
        token_id: row.token_id,
        story_element: row.story_element,
        backstory_id: row.backstory_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub fn new_story_element_row(new_element: NewStoryElement, now: DateTime<Utc>) -> StoryElementRow {
    StoryElementRow {
        id: Uuid::new_v4(),
        token_id: new_element.token_id,
        story_element: new_element.story_element,
        refinement_stage: new_element.refinement_stage.to_string(),
        backstory_id: new_element.backstory_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn tweet_from_row(row: TweetRow) -> DatabaseResult<Tweet> {
    let kind = SourceKind::from_str(&row.source_kind).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
            "unknown tweet source kind '{}'",
            row.source_kind
        )))
    })?;
    Ok(Tweet {
        id: row.id,
        token_id: row.token_id,
        tweet: row.tweet,
        source: TweetSource {
            kind,
            id: row.source_id,
        },
        created_at: row.created_at,
    })
}

pub fn new_tweet_row(new_tweet: NewTweet, now: DateTime<Utc>) -> TweetRow {
    TweetRow {
        id: Uuid::new_v4(),
        token_id: new_tweet.token_id,
        tweet: new_tweet.tweet,
        source_kind: new_tweet.source.kind.to_string(),
        source_id: new_tweet.source.id,
        created_at: now,
    }
}

fn parse_stage(label: &str) -> DatabaseResult<RefinementStage> {
    RefinementStage::from_str(label).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
            "unknown refinement stage '{label}'"
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_stage_labels_round_trip() {
        let now = Utc::now();
        let row = new_story_element_row(
            NewStoryElement {
                token_id: "3".into(),
                story_element: "The tower fell.".into(),
                refinement_stage: RefinementStage::LoreReviewed,
                backstory_id: None,
            },
            now,
        );
        assert_eq!(row.refinement_stage, "lore_reviewed");
        let element = story_element_from_row(row).unwrap();
        assert_eq!(element.refinement_stage, RefinementStage::LoreReviewed);
    }

    #[test]
    fn unknown_stored_stage_is_an_error() {
        let now = Utc::now();
        let mut row = new_story_element_row(
            NewStoryElement {
                token_id: "3".into(),
                story_element: "x".into(),
                refinement_stage: RefinementStage::Unrefined,
                backstory_id: None,
            },
            now,
        );
        row.refinement_stage = "polished".into();
        let err = story_element_from_row(row).unwrap_err();
        assert!(matches!(err.kind, DatabaseErrorKind::InvalidValue(_)));
    }

    #[test]
    fn new_backstory_rows_start_active_with_short_id() {
        let row = new_backstory_row(
            NewBackstory {
                token_id: "9".into(),
                backstory: "A quiet smith.".into(),
                prompt_version: Some(2),
            },
            Utc::now(),
        );
        assert!(row.is_active);
        assert_eq!(row.short_id, loresmith_core::short_id("9", "A quiet smith."));
    }
}
