//! IPFS metadata pinning for Loresmith.
//!
//! [`MetadataRequest`] becomes ERC-721 style [`TokenMetadata`], which
//! [`PinataClient`] pins through the Pinata API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metadata;
mod pin;
mod pinata;

pub use metadata::{MetadataAttribute, MetadataRequest, TokenMetadata};
pub use pin::pin_token_metadata;
pub use pinata::{DEFAULT_IPFS_GATEWAY_URL, DEFAULT_PINATA_API_URL, PinataClient};
