//! PostgreSQL document store for Loresmith.
//!
//! Prompts, backstories, story elements and tweets live in four tables
//! managed by embedded Diesel migrations. [`LoreStore`] implements every
//! repository trait from `loresmith_interface` over an r2d2 pool;
//! [`InMemoryStore`] implements the same traits without a database.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backstory_repository;
mod connection;
mod conversions;
mod in_memory;
mod models;
mod prompt_repository;
pub mod schema;
mod store;
mod story_element_repository;
mod tweet_repository;

pub use connection::{DbPool, MIGRATIONS, create_pool, database_url_from_env, run_migrations};
pub use in_memory::InMemoryStore;
pub use store::LoreStore;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, loresmith_error::DatabaseError>;
