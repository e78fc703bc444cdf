//! Configuration errors.

/// A settings file, environment override or bundled asset could not be
/// loaded or parsed.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What could not be loaded
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use loresmith_error::ConfigError;
    ///
    /// let err = ConfigError::new("LORESMITH__SERVER__PORT is not a port number");
    /// assert!(err.to_string().starts_with("Configuration Error: LORESMITH__SERVER__PORT"));
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
