//! Anthropic Messages API client.

mod client;
mod dto;

pub use client::{AnthropicClient, DEFAULT_ANTHROPIC_API_URL, DEFAULT_MAX_TOKENS};
pub use dto::{
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
