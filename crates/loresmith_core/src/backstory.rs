//! Character backstory documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A generated backstory for one token.
///
/// The most recently generated (or explicitly activated) backstory of a
/// token is the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backstory {
    /// Document id
    pub id: Uuid,
    /// Token id within the collection
    pub token_id: String,
    /// Short content hash for display and links
    pub short_id: String,
    /// Backstory text
    pub backstory: String,
    /// Whether this is the token's current backstory
    pub is_active: bool,
    /// Version of the prompt that produced it
    pub prompt_version: Option<i32>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when storing a backstory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBackstory {
    /// Token id
    pub token_id: String,
    /// Backstory text
    pub backstory: String,
    /// Version of the prompt that produced it
    pub prompt_version: Option<i32>,
}

impl NewBackstory {
    /// Short id derived from the token and text.
    pub fn short_id(&self) -> String {
        short_id(&self.token_id, &self.backstory)
    }
}

/// First eight hex digits of the SHA-256 of `token_id` and `text`.
///
/// # Examples
///
/// ```
/// use loresmith_core::short_id;
///
/// let id = short_id("7", "Born under a red moon.");
/// assert_eq!(id.len(), 8);
/// assert_eq!(id, short_id("7", "Born under a red moon."));
/// assert_ne!(id, short_id("8", "Born under a red moon."));
/// ```
pub fn short_id(token_id: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token_id.as_bytes());
    hasher.update(b":");
    hasher.update(text.as_bytes());
    hasher
        .finalize()
        .iter()
        .take(4)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
