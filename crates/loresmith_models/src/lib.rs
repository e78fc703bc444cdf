//! LLM provider integrations for Loresmith.
//!
//! Currently ships the Anthropic Messages API client.
//!
//! # Example
//!
//! ```no_run
//! use loresmith_models::AnthropicClient;
//! use loresmith_interface::LoresmithDriver;
//! use loresmith_core::{GenerateRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::from_env("claude-sonnet-4-20250514")?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Name three dragons")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
    DEFAULT_ANTHROPIC_API_URL, DEFAULT_MAX_TOKENS,
};
