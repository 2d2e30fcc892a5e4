//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`ContractHandle`] - identity of a deployed contract
//! - [`VaultFactory`] - vault enumeration
//! - [`FetchService`] - one-round-trip aggregate reads per vault

pub mod outbound;

pub use outbound::protocol::{
    ContractHandle, ContractRef, DynamicReadout, FetchService, Readout, StaticReadout,
    VaultFactory,
};
