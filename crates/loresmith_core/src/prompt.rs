//! Prompt template documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A versioned prompt template for one content type.
///
/// At most one prompt per `prompt_type` carries `active = true`; activation
/// clears the flag on every other prompt of the same type first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    /// Document id
    pub id: Uuid,
    /// Content type this prompt generates (e.g. "backstory")
    #[serde(rename = "type")]
    pub prompt_type: String,
    /// Monotonic version within the type
    pub version: i32,
    /// Whether this is the prompt resolved for its type
    pub active: bool,
    /// Human-readable label
    pub name: String,
    /// System context sent with every request
    pub system_context: String,
    /// User message template with `{{placeholder}}` markers
    pub content_template: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a prompt.
///
/// The version is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrompt {
    /// Content type
    #[serde(rename = "type")]
    pub prompt_type: String,
    /// Human-readable label
    pub name: String,
    /// System context
    pub system_context: String,
    /// User message template
    pub content_template: String,
    /// Activate immediately after creation
    #[serde(default)]
    pub active: bool,
}

/// Partial update of a prompt's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptUpdate {
    /// New label
    #[serde(default)]
    pub name: Option<String>,
    /// New system context
    #[serde(default)]
    pub system_context: Option<String>,
    /// New user message template
    #[serde(default)]
    pub content_template: Option<String>,
}

impl PromptUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.system_context.is_none() && self.content_template.is_none()
    }
}

/// A prompt after placeholder substitution, ready to send to a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPrompt {
    /// Version of the prompt that was rendered
    pub prompt_version: i32,
    /// System context
    pub system: String,
    /// Rendered user message
    pub user: String,
}
