//! Character profiles supplied by generation requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The on-chain identity and traits of a character.
///
/// Traits are kept ordered by key so rendered prompts are stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    /// Token id within the collection
    pub token_id: String,
    /// Character name, when one has been chosen
    #[serde(default)]
    pub name: Option<String>,
    /// Trait name to trait value
    #[serde(default)]
    pub traits: BTreeMap<String, String>,
}

impl CharacterProfile {
    /// Create a profile with no name and no traits.
    pub fn new(token_id: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            ..Self::default()
        }
    }
}
