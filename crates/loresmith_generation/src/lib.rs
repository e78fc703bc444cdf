//! Prompt resolution and lore generation.
//!
//! A generator looks up the active prompt for its content kind, fills the
//! template's `{{placeholder}}` markers from the request, sends the result
//! to a [`LoresmithDriver`](loresmith_interface::LoresmithDriver) and
//! stores the completion through a
//! [`LoreRepository`](loresmith_interface::LoreRepository).
//!
//! # Example
//!
//! ```rust,ignore
//! use loresmith_core::CharacterProfile;
//! use loresmith_generation::LoreGenerator;
//!
//! let generator = LoreGenerator::new(repo, driver);
//! let mut profile = CharacterProfile::new("42");
//! profile.traits.insert("Class".into(), "Ranger".into());
//! let backstory = generator.backstory(&profile).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod defaults;
mod generator;
mod names;
mod requests;
mod resolver;
mod template;

pub use defaults::{default_prompts, seed_default_prompts};
pub use generator::LoreGenerator;
pub use names::{DEFAULT_NAME_COUNT, MAX_NAME_COUNT, parse_names};
pub use requests::{NamesRequest, StoryElementRequest, TweetRequest};
pub use resolver::{render, resolve};
pub use template::{TemplateVars, render_template};
