//! Read-only protocol ports.
//!
//! The aggregator only ever sees these traits. The chain adapter implements
//! them over JSON-RPC; the testkit implements them in memory.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::{
    DynamicMarketBundle, DynamicVaultBundle, StaticMarketBundle, StaticVaultBundle, SuperBundle,
    Timestamp, VaultId,
};
use crate::error::Result;

/// Typed result of one aggregate read.
///
/// Mirrors the `(vault, markets[], timestamp)` triple returned on chain,
/// already validated and mapped into domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout<V, M> {
    pub vault: V,
    pub markets: Vec<M>,
    /// Chain time at which the read was served.
    pub timestamp: Timestamp,
}

impl<V, M> Readout<V, M> {
    /// Split into the super-bundle and the observed time.
    pub fn into_parts(self) -> (SuperBundle<V, M>, Timestamp) {
        (SuperBundle::new(self.vault, self.markets), self.timestamp)
    }
}

pub type StaticReadout = Readout<StaticVaultBundle, StaticMarketBundle>;
pub type DynamicReadout = Readout<DynamicVaultBundle, DynamicMarketBundle>;

/// A deployed contract, identified by its address.
pub trait ContractHandle: Send + Sync {
    fn address(&self) -> Address;
}

/// Handle for contracts the aggregator only needs the address of
/// (controller, market manager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractRef(Address);

impl ContractRef {
    pub const fn new(address: Address) -> Self {
        Self(address)
    }
}

impl ContractHandle for ContractRef {
    fn address(&self) -> Address {
        self.0
    }
}

/// The vault factory.
///
/// # Errors
///
/// Methods return [`Result`] for transport failures and for counts that do
/// not fit the domain type.
#[async_trait]
pub trait VaultFactory: ContractHandle {
    /// Number of vaults created so far. Vault ids are `1..=count`.
    async fn num_vaults(&self) -> Result<u64>;
}

/// The aggregate read endpoint.
///
/// Each call performs the multi-field read for one vault in a single round
/// trip. `offset` selects the first market to include; `0` means all.
#[async_trait]
pub trait FetchService: ContractHandle {
    /// Read configuration-like state of a vault and its markets.
    async fn fetch_initial(
        &self,
        controller: Address,
        market_manager: Address,
        vault_id: VaultId,
        offset: u64,
    ) -> Result<StaticReadout>;

    /// Read balances, phases and resolution state of a vault and its markets.
    async fn fetch_dynamic(
        &self,
        controller: Address,
        market_manager: Address,
        vault_id: VaultId,
        offset: u64,
    ) -> Result<DynamicReadout>;
}
