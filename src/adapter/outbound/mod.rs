//! Outbound adapters (driven side).

#[cfg(feature = "rpc")]
pub mod chain;
