//! HTTP API for the Loresmith content generation service.
//!
//! Handlers validate the request, call a generator or the document store,
//! and answer with camelCase JSON. Failures are answered as
//! `{"error": "<message>"}`: request and lookup errors with their message,
//! upstream failures with a generic one after logging the detail.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod observability;
mod routes;
mod server;
mod state;

pub use config::{
    AnthropicSection, DatabaseSection, IpfsSection, LoggingSection, LoresmithConfig,
    ServerSection,
};
pub use error::{ApiError, parse_id};
pub use extract::{ApiJson, ApiQuery};
pub use observability::{SERVICE_NAME, init_tracing};
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
