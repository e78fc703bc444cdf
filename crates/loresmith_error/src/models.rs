//! Model provider errors.

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnthropicErrorKind {
    /// Request could not be sent
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body did not match the expected shape
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Request could not be expressed in the Messages API
    #[display("Conversion error: {}", _0)]
    ConversionError(String),

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Anthropic-specific error
    #[display("Anthropic: {}", _0)]
    #[from]
    Anthropic(AnthropicErrorKind),

    /// Model returned no usable text
    #[display("Empty completion from {}", _0)]
    EmptyCompletion(String),

    /// Provider-neutral request could not be built
    #[display("Builder error: {}", _0)]
    Builder(String),

    /// API key or model configuration missing
    #[display("Missing configuration: {}", _0)]
    MissingConfiguration(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
