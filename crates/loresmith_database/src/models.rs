//! Diesel row types for the lore tables.
//!
//! These mirror the SQL schema and are converted to the document types in
//! `loresmith_core` by the `conversions` module.

use crate::schema::{backstories, prompts, story_elements, tweets};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the prompts table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = prompts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PromptRow {
    pub id: Uuid,
    pub prompt_type: String,
    pub version: i32,
    pub active: bool,
    pub name: String,
    pub system_context: String,
    pub content_template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable prompt row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = prompts)]
pub struct NewPromptRow {
    pub id: Uuid,
    pub prompt_type: String,
    pub version: i32,
    pub active: bool,
    pub name: String,
    pub system_context: String,
    pub content_template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a prompt's editable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = prompts)]
pub struct PromptChangeset {
    pub name: Option<String>,
    pub system_context: Option<String>,
    pub content_template: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the backstories table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Insertable)]
#[diesel(table_name = backstories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BackstoryRow {
    pub id: Uuid,
    pub token_id: String,
    pub short_id: String,
    pub backstory: String,
    pub is_active: bool,
    pub prompt_version: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Database row for the story_elements table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Insertable)]
#[diesel(table_name = story_elements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoryElementRow {
    pub id: Uuid,
    pub token_id: String,
    pub story_element: String,
    pub refinement_stage: String,
    pub backstory_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the tweets table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Insertable)]
#[diesel(table_name = tweets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TweetRow {
    pub id: Uuid,
    pub token_id: String,
    pub tweet: String,
    pub source_kind: String,
    pub source_id: Uuid,
    pub created_at: DateTime<Utc>,
}
