//! ERC-721 token metadata.

use loresmith_core::Backstory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `{trait_type, value}` entry of the metadata `attributes` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    /// Trait name
    pub trait_type: String,
    /// Trait value
    pub value: String,
}

/// Token metadata in the shape marketplaces read.
///
/// # Examples
///
/// ```
/// use loresmith_ipfs::MetadataRequest;
///
/// let request = MetadataRequest {
///     token_id: "7".into(),
///     image: Some("ipfs://bafyimage".into()),
///     ..Default::default()
/// };
/// let metadata = request.to_metadata(None);
///
/// assert_eq!(metadata.name(), "#7");
/// assert!(metadata.attributes().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TokenMetadata {
    /// Display name
    name: String,
    /// Long-form description
    description: String,
    /// Image URI
    image: String,
    /// Traits
    attributes: Vec<MetadataAttribute>,
}

/// Request to build and pin metadata for a token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRequest {
    /// Token id
    pub token_id: String,
    /// Display name; defaults to `#<tokenId>`
    #[serde(default)]
    pub name: Option<String>,
    /// Description; defaults to the token's active backstory
    #[serde(default)]
    pub description: Option<String>,
    /// Image URI
    #[serde(default)]
    pub image: Option<String>,
    /// Trait name to trait value
    #[serde(default)]
    pub traits: BTreeMap<String, String>,
}

impl MetadataRequest {
    /// Build metadata, falling back to `backstory` for the description.
    pub fn to_metadata(&self, backstory: Option<&Backstory>) -> TokenMetadata {
        let description = self
            .description
            .clone()
            .or_else(|| backstory.map(|b| b.backstory.clone()))
            .unwrap_or_default();
        TokenMetadata {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.token_id)),
            description,
            image: self.image.clone().unwrap_or_default(),
            attributes: self
                .traits
                .iter()
                .map(|(trait_type, value)| MetadataAttribute {
                    trait_type: trait_type.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}
