//! Trait definitions for the Loresmith service.
//!
//! Route handlers and generators depend only on these traits. The LLM
//! provider, the document store and the pinning service are supplied as
//! trait objects, so tests can swap in mocks and in-memory stores.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod repository;
mod traits;
mod types;

pub use repository::{
    BackstoryRepository, LoreRepository, PromptRepository, StoryElementRepository,
    TweetRepository,
};
pub use traits::{LoresmithDriver, MetadataPinner};
pub use types::PinnedContent;
