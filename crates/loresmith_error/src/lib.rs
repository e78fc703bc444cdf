//! Error types for the Loresmith service.
//!
//! This crate provides the foundation error types used throughout the Loresmith workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use loresmith_error::{LoresmithResult, PromptError, PromptErrorKind};
//!
//! fn resolve() -> LoresmithResult<String> {
//!     Err(PromptError::new(PromptErrorKind::NoActivePrompt("backstory".to_string())))?
//! }
//!
//! assert!(resolve().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod http;
mod json;
mod models;
mod pinning;
mod prompt;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{LoresmithError, LoresmithErrorKind, LoresmithResult};
pub use http::HttpError;
pub use json::JsonError;
pub use models::{AnthropicErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
pub use pinning::{PinningError, PinningErrorKind};
pub use prompt::{PromptError, PromptErrorKind};
