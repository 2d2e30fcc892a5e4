//! JSON-RPC implementation of the protocol ports.
//!
//! Contract bindings are generated with `sol!`; raw ABI values are mapped to
//! domain types in [`convert`] and never leave this module.

pub mod client;
pub mod contracts;
pub mod convert;

pub use client::{ChainFetcher, ChainProtocol, ChainVaultFactory};
