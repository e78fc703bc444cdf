//! Core data types for the Loresmith service.
//!
//! This crate provides the documents persisted by the service (prompts,
//! backstories, story elements, tweets), the refinement stage vocabulary,
//! and the provider-neutral LLM request and response types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backstory;
mod character;
mod content;
mod message;
mod output;
mod prompt;
mod refinement;
mod request;
mod role;
mod story_element;
mod tweet;

pub use backstory::{Backstory, NewBackstory, short_id};
pub use character::CharacterProfile;
pub use content::ContentKind;
pub use message::Message;
pub use output::Output;
pub use prompt::{NewPrompt, Prompt, PromptUpdate, RenderedPrompt};
pub use refinement::RefinementStage;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
pub use story_element::{NewStoryElement, StoryElement, StoryElementFilter};
pub use tweet::{NewTweet, SourceKind, Tweet, TweetSource};
