//! Shared value types for the interface traits.

use serde::{Deserialize, Serialize};

/// Result of pinning a document to IPFS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedContent {
    /// IPFS content identifier
    pub cid: String,
    /// `ipfs://` URI for the content
    pub uri: String,
    /// HTTP gateway URL for the content
    pub gateway_url: String,
}
