//! Top-level error wrapper types.

use crate::{
    ConfigError, DatabaseError, HttpError, JsonError, ModelsError, PinningError, PromptError,
};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use loresmith_error::{LoresmithError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: LoresmithError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LoresmithErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// LLM provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Prompt resolution or request validation error
    #[from(PromptError)]
    Prompt(PromptError),
    /// IPFS pinning error
    #[from(PinningError)]
    Pinning(PinningError),
}

/// Loresmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use loresmith_error::{LoresmithError, LoresmithResult, ConfigError};
///
/// fn might_fail() -> LoresmithResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Loresmith Error: {}", _0)]
pub struct LoresmithError(Box<LoresmithErrorKind>);

impl LoresmithError {
    /// Create a new error from a kind.
    pub fn new(kind: LoresmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LoresmithErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LoresmithErrorKind
impl<T> From<T> for LoresmithError
where
    T: Into<LoresmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Loresmith operations.
pub type LoresmithResult<T> = std::result::Result<T, LoresmithError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatabaseErrorKind, PromptErrorKind};

    #[test]
    fn prompt_error_converts_into_top_level_kind() {
        let err: LoresmithError =
            PromptError::new(PromptErrorKind::NoActivePrompt("names".into())).into();
        match err.kind() {
            LoresmithErrorKind::Prompt(inner) => {
                assert_eq!(inner.kind, PromptErrorKind::NoActivePrompt("names".into()));
            }
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn location_is_captured_at_construction() {
        let err = DatabaseError::new(DatabaseErrorKind::Query("boom".into()));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
