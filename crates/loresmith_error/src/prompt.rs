//! Prompt resolution and request validation errors.

/// Prompt and request error conditions.
///
/// These are the errors a caller can fix by changing the request or the
/// prompt configuration, and map to client error responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PromptErrorKind {
    /// No prompt is flagged active for the content type
    #[display("No active prompt found for type '{}'", _0)]
    NoActivePrompt(String),
    /// Request failed validation
    #[display("Invalid request: {}", _0)]
    Validation(String),
    /// Referenced document does not exist
    #[display("{} not found", _0)]
    NotFound(String),
}

/// Prompt error with location tracking.
///
/// # Examples
///
/// ```
/// use loresmith_error::{PromptError, PromptErrorKind};
///
/// let err = PromptError::new(PromptErrorKind::NoActivePrompt("tweet".into()));
/// assert!(err.to_string().contains("No active prompt found for type 'tweet'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", kind, line, file)]
pub struct PromptError {
    /// The kind of error that occurred
    pub kind: PromptErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
