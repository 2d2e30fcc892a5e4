//! RPC-backed fetch service and vault factory.

use std::fmt::Display;
use std::future::IntoFuture;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use super::contracts::{IFetcher, IVaultFactory};
use super::convert;
use crate::application::snapshot::SnapshotAggregator;
use crate::domain::VaultId;
use crate::error::{Result, TransportError};
use crate::infrastructure::config::registry::ReaderAddresses;
use crate::infrastructure::config::settings::Config;
use crate::port::{
    ContractHandle, ContractRef, DynamicReadout, FetchService, StaticReadout, VaultFactory,
};

/// Run a remote call with an upper time bound.
///
/// Failures and timeouts both surface as [`TransportError`]; neither is ever
/// turned into a default value.
async fn bounded<T, E, F>(call: &'static str, timeout: Duration, fut: F) -> Result<T>
where
    E: Display,
    F: IntoFuture<Output = std::result::Result<T, E>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(TransportError::CallFailed {
            call,
            reason: e.to_string(),
        }
        .into()),
        Err(_) => Err(TransportError::Timeout {
            call,
            timeout_secs: timeout.as_secs(),
        }
        .into()),
    }
}

/// Vault factory contract reached over JSON-RPC.
pub struct ChainVaultFactory {
    provider: DynProvider,
    address: Address,
    timeout: Duration,
}

impl ChainVaultFactory {
    pub fn new(provider: DynProvider, address: Address, timeout: Duration) -> Self {
        Self {
            provider,
            address,
            timeout,
        }
    }
}

impl ContractHandle for ChainVaultFactory {
    fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl VaultFactory for ChainVaultFactory {
    async fn num_vaults(&self) -> Result<u64> {
        let factory = IVaultFactory::new(self.address, self.provider.clone());
        let call = factory.numVaults();
        let raw: U256 = bounded("numVaults", self.timeout, call.call()).await?;
        Ok(convert::vault_count(raw)?)
    }
}

/// Fetcher contract reached over JSON-RPC.
pub struct ChainFetcher {
    provider: DynProvider,
    address: Address,
    timeout: Duration,
}

impl ChainFetcher {
    pub fn new(provider: DynProvider, address: Address, timeout: Duration) -> Self {
        Self {
            provider,
            address,
            timeout,
        }
    }
}

impl ContractHandle for ChainFetcher {
    fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl FetchService for ChainFetcher {
    async fn fetch_initial(
        &self,
        controller: Address,
        market_manager: Address,
        vault_id: VaultId,
        offset: u64,
    ) -> Result<StaticReadout> {
        let fetcher = IFetcher::new(self.address, self.provider.clone());
        let call = fetcher.fetchInitial(
            controller,
            market_manager,
            U256::from(vault_id.get()),
            U256::from(offset),
        );
        let raw = bounded("fetchInitial", self.timeout, call.call()).await?;
        debug!(vault_id = %vault_id, markets = raw.marketBundles.len(), "fetchInitial returned");
        Ok(convert::static_readout(raw)?)
    }

    async fn fetch_dynamic(
        &self,
        controller: Address,
        market_manager: Address,
        vault_id: VaultId,
        offset: u64,
    ) -> Result<DynamicReadout> {
        let fetcher = IFetcher::new(self.address, self.provider.clone());
        let call = fetcher.fetchDynamic(
            controller,
            market_manager,
            U256::from(vault_id.get()),
            U256::from(offset),
        );
        let raw = bounded("fetchDynamic", self.timeout, call.call()).await?;
        debug!(vault_id = %vault_id, markets = raw.marketBundles.len(), "fetchDynamic returned");
        Ok(convert::dynamic_readout(raw)?)
    }
}

/// The four protocol handles of one deployment, sharing a provider.
pub struct ChainProtocol {
    pub fetcher: ChainFetcher,
    pub vault_factory: ChainVaultFactory,
    pub controller: ContractRef,
    pub market_manager: ContractRef,
}

impl ChainProtocol {
    /// Build handles for the given addresses.
    pub fn new(rpc_url: Url, readers: ReaderAddresses, timeout: Duration) -> Self {
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();

        Self {
            fetcher: ChainFetcher::new(provider.clone(), readers.fetcher, timeout),
            vault_factory: ChainVaultFactory::new(provider, readers.vault_factory, timeout),
            controller: ContractRef::new(readers.controller),
            market_manager: ContractRef::new(readers.market_manager),
        }
    }

    /// Build handles for the configured chain.
    ///
    /// No network traffic happens here; the first call is made by the
    /// aggregator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the chain is unknown, a reader
    /// address is unset, or no RPC endpoint is available.
    pub fn from_config(config: &Config) -> Result<Self> {
        let chain_id = config.network.chain_id;
        let readers = config.registry.get(chain_id)?.readers(chain_id)?;
        let rpc_url = config.rpc_url()?;
        let timeout = Duration::from_secs(config.network.request_timeout_secs);

        info!(
            chain_id,
            rpc_url = %rpc_url,
            fetcher = %readers.fetcher,
            vault_factory = %readers.vault_factory,
            "Protocol handles ready"
        );

        Ok(Self::new(rpc_url, readers, timeout))
    }

    /// Aggregator over these handles.
    pub fn aggregator(&self) -> SnapshotAggregator<'_> {
        SnapshotAggregator::new(
            &self.fetcher,
            &self.controller,
            &self.vault_factory,
            &self.market_manager,
        )
    }
}
