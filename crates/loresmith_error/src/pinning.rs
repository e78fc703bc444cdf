//! IPFS pinning errors.

/// Pinning service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PinningErrorKind {
    /// Request could not be sent
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Pinning service answered with a non-success status
    #[display("Pinning service error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body could not be parsed
    #[display("Parse error: {}", _0)]
    Parse(String),
    /// JWT not configured
    #[display("Pinning service not configured: {}", _0)]
    NotConfigured(String),
}

/// Pinning error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pinning Error: {} at line {} in {}", kind, line, file)]
pub struct PinningError {
    /// The kind of error that occurred
    pub kind: PinningErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PinningError {
    /// Create a new PinningError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PinningErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
