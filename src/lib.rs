//! Vaultsnap - point-in-time snapshots of on-chain vault and market state.
//!
//! Reads every vault of a protocol deployment through an aggregate fetcher
//! contract and assembles typed, immutable bundles for off-chain consumers.
//!
//! # Architecture
//!
//! - **`domain`** - Snapshot value types: vault and market bundles,
//!   super-bundles, identifiers, chain time
//! - **`port`** - Traits for the remote read services (fetch service,
//!   vault factory, contract handles)
//! - **`application::snapshot`** - `SnapshotAggregator`, the sequential
//!   per-vault read loop
//! - **`adapter::outbound::chain`** - JSON-RPC implementation of the ports
//!   via alloy (requires `rpc` feature)
//! - **`adapter::inbound::cli`** - The `vaultsnap` command line
//! - **`infrastructure::config`** - TOML configuration, logging and the
//!   network-keyed address registry
//!
//! # Features
//!
//! - `rpc` (default) - Chain adapter and the `fetch` command
//! - `testkit` - In-memory protocol mocks for integration tests
//!
//! # Example
//!
//! ```no_run
//! use vaultsnap::adapter::outbound::chain::ChainProtocol;
//! use vaultsnap::infrastructure::config::settings::Config;
//!
//! # async fn run() -> vaultsnap::error::Result<()> {
//! let config = Config::load("config.toml")?.with_process_env()?;
//! let protocol = ChainProtocol::from_config(&config)?;
//! let snapshot = protocol.aggregator().fetch_static().await?;
//! println!("{} vaults at {:?}", snapshot.len(), snapshot.timestamp);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
