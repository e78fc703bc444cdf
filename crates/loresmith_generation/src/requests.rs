//! Request bodies accepted by the generators.

use loresmith_core::TweetSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ask for candidate character names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamesRequest {
    /// Trait name to trait value
    #[serde(default)]
    pub traits: BTreeMap<String, String>,
    /// Number of names wanted (default 10, at most 50)
    #[serde(default)]
    pub count: Option<usize>,
}

/// Ask for a story element for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryElementRequest {
    /// Token id
    pub token_id: String,
}

/// Ask for a tweet drawn from a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetRequest {
    /// Token id
    pub token_id: String,
    /// Backstory or story element the tweet is based on
    pub source: TweetSource,
}
