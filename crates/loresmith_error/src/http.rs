//! HTTP listener errors.

/// The API server could not bind its address or stopped serving.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} ({}:{})", message, file, line)]
pub struct HttpError {
    /// Listener failure
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl HttpError {
    /// Record a listener failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use loresmith_error::HttpError;
    ///
    /// let err = HttpError::new("Failed to bind 0.0.0.0:3000");
    /// assert!(err.to_string().contains("0.0.0.0:3000"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
