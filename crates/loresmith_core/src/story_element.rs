//! Story element (lore fragment) documents.

use crate::RefinementStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A lore fragment for a token, labelled with its refinement stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryElement {
    /// Document id
    pub id: Uuid,
    /// Token id within the collection
    pub token_id: String,
    /// Lore text
    pub story_element: String,
    /// Editorial pipeline label
    pub refinement_stage: RefinementStage,
    /// Backstory the element was generated from
    pub backstory_id: Option<Uuid>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last stage change
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when storing a story element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStoryElement {
    /// Token id
    pub token_id: String,
    /// Lore text
    pub story_element: String,
    /// Initial stage
    #[serde(default)]
    pub refinement_stage: RefinementStage,
    /// Source backstory
    #[serde(default)]
    pub backstory_id: Option<Uuid>,
}

/// Query filter for listing story elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryElementFilter {
    /// Restrict to one token
    #[serde(default)]
    pub token_id: Option<String>,
    /// Restrict to one stage
    #[serde(default)]
    pub stage: Option<RefinementStage>,
    /// Maximum number of results
    #[serde(default)]
    pub limit: Option<u32>,
}

impl StoryElementFilter {
    /// Whether an element passes this filter (ignoring `limit`).
    pub fn matches(&self, element: &StoryElement) -> bool {
        if let Some(token_id) = &self.token_id
            && &element.token_id != token_id
        {
            return false;
        }
        if let Some(stage) = self.stage
            && element.refinement_stage != stage
        {
            return false;
        }
        true
    }
}
