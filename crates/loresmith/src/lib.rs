//! Loresmith - lore generation for NFT character collections
//!
//! Loresmith generates character backstories, names, story elements and
//! tweets through an LLM, keeps them in a document store, manages the
//! prompt templates that drive generation, and pins token metadata to IPFS.
//!
//! # Architecture
//!
//! - `loresmith_error` - Error types
//! - `loresmith_core` - Documents, stage vocabulary, LLM request types
//! - `loresmith_interface` - Driver, pinner and repository traits
//! - `loresmith_models` - Anthropic Messages API client
//! - `loresmith_database` - PostgreSQL and in-memory stores
//! - `loresmith_generation` - Prompt resolution and generators
//! - `loresmith_ipfs` - Token metadata and Pinata client
//! - `loresmith_server` - HTTP API, configuration and logging
//!
//! This crate (`loresmith`) re-exports everything for convenience.

pub use loresmith_core::*;
pub use loresmith_database::{
    DbPool, InMemoryStore, LoreStore, create_pool, database_url_from_env, run_migrations,
};
pub use loresmith_error::*;
pub use loresmith_generation::*;
pub use loresmith_interface::*;
pub use loresmith_ipfs::*;
pub use loresmith_models::*;
pub use loresmith_server::*;
