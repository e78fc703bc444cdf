//! Tweet documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of document a tweet was generated from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    /// A backstory document
    Backstory,
    /// A story element document
    StoryElement,
}

/// Reference to the source document of a tweet.
///
/// The reference is not enforced: the source may be deleted later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetSource {
    /// Source collection
    pub kind: SourceKind,
    /// Source document id
    pub id: Uuid,
}

/// Generated tweet text for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Document id
    pub id: Uuid,
    /// Token id within the collection
    pub token_id: String,
    /// Tweet text
    pub tweet: String,
    /// Source document
    pub source: TweetSource,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when storing a tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTweet {
    /// Token id
    pub token_id: String,
    /// Tweet text
    pub tweet: String,
    /// Source document
    pub source: TweetSource,
}
