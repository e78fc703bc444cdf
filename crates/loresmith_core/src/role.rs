//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Participant roles in a Messages API conversation.
///
/// System context travels separately on [`crate::GenerateRequest`], so only
/// the two conversational roles exist here.
///
/// # Examples
///
/// ```
/// use loresmith_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Messages written by the caller
    #[display("user")]
    User,
    /// Messages written by the model
    #[display("assistant")]
    Assistant,
}
