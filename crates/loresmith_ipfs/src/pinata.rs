//! Pinata pinning client.

use async_trait::async_trait;
use loresmith_error::{LoresmithResult, PinningError, PinningErrorKind};
use loresmith_interface::{MetadataPinner, PinnedContent};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error, instrument};

/// Base URL of the Pinata API.
pub const DEFAULT_PINATA_API_URL: &str = "https://api.pinata.cloud";
/// Gateway used to build browsable URLs for pinned content.
pub const DEFAULT_IPFS_GATEWAY_URL: &str = "https://gateway.pinata.cloud/ipfs";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PinResponse {
    ipfs_hash: String,
    #[serde(default)]
    pin_size: Option<u64>,
}

/// Pins JSON documents through Pinata's `pinJSONToIPFS` endpoint.
#[derive(Debug, Clone)]
pub struct PinataClient {
    client: Client,
    jwt: String,
    api_url: String,
    gateway_url: String,
}

impl PinataClient {
    /// Create a client authenticating with a Pinata JWT.
    pub fn new(jwt: impl Into<String>) -> Self {
        debug!("Creating new Pinata client");
        Self {
            client: Client::new(),
            jwt: jwt.into(),
            api_url: DEFAULT_PINATA_API_URL.to_string(),
            gateway_url: DEFAULT_IPFS_GATEWAY_URL.to_string(),
        }
    }

    /// Creates a client from the `PINATA_JWT` environment variable.
    pub fn from_env() -> Result<Self, PinningError> {
        let jwt = std::env::var("PINATA_JWT").map_err(|_| {
            PinningError::new(PinningErrorKind::NotConfigured(
                "PINATA_JWT environment variable not set".to_string(),
            ))
        })?;
        Ok(Self::new(jwt))
    }

    /// Point the client at a different API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different gateway for `gateway_url` in results.
    pub fn with_gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = gateway_url.into().trim_end_matches('/').to_string();
        self
    }

    fn pinned(&self, cid: String) -> PinnedContent {
        PinnedContent {
            uri: format!("ipfs://{cid}"),
            gateway_url: format!("{}/{cid}", self.gateway_url),
            cid,
        }
    }
}

#[async_trait]
impl MetadataPinner for PinataClient {
    #[instrument(skip(self, content))]
    async fn pin_json(&self, name: &str, content: &Value) -> LoresmithResult<PinnedContent> {
        let url = format!("{}/pinning/pinJSONToIPFS", self.api_url);
        let body = json!({
            "pinataContent": content,
            "pinataMetadata": { "name": name },
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.jwt)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Pinata");
                PinningError::new(PinningErrorKind::Http(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Pinata returned error");
            return Err(PinningError::new(PinningErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let parsed: PinResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Pinata response");
            PinningError::new(PinningErrorKind::Parse(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        debug!(cid = %parsed.ipfs_hash, size = ?parsed.pin_size, "Pinned JSON");
        Ok(self.pinned(parsed.ipfs_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_content_uses_ipfs_scheme_and_gateway() {
        let client = PinataClient::new("jwt").with_gateway_url("https://gw.example/ipfs/");
        let pinned = client.pinned("bafycid".into());
        assert_eq!(pinned.cid, "bafycid");
        assert_eq!(pinned.uri, "ipfs://bafycid");
        assert_eq!(pinned.gateway_url, "https://gw.example/ipfs/bafycid");
    }
}
