//! Content kinds produced by the generators.

use serde::{Deserialize, Serialize};

/// The kinds of content the service generates.
///
/// Each kind resolves its prompt through the prompt `type` given by
/// [`ContentKind::prompt_type`]. Prompts of other types may exist in the
/// store; they are simply never resolved by a generator.
///
/// # Examples
///
/// ```
/// use loresmith_core::ContentKind;
///
/// assert_eq!(ContentKind::StoryElement.prompt_type(), "story_element");
/// assert_eq!("tweet".parse::<ContentKind>().unwrap(), ContentKind::Tweet);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentKind {
    /// Character backstory
    Backstory,
    /// Character name suggestions
    Names,
    /// Lore fragment for a token
    StoryElement,
    /// Tweet text
    Tweet,
}

impl ContentKind {
    /// The prompt `type` this kind resolves.
    pub fn prompt_type(&self) -> &'static str {
        match self {
            ContentKind::Backstory => "backstory",
            ContentKind::Names => "names",
            ContentKind::StoryElement => "story_element",
            ContentKind::Tweet => "tweet",
        }
    }
}
