//! Instrumented in-memory protocol.
//!
//! [`ScriptedProtocol`] plays the vault factory and the fetch service at
//! once. Every remote call is appended to a log so tests can assert on call
//! count and order.
//!
//! Reads that were not scripted explicitly are synthesised from the vault id,
//! the configured per-vault timestamp and `markets_per_vault`.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy_primitives::Address;
use async_trait::async_trait;

use super::domain::{address, dynamic_readout, static_readout};
use crate::domain::VaultId;
use crate::error::{Result, TransportError};
use crate::port::{ContractHandle, DynamicReadout, FetchService, StaticReadout, VaultFactory};

/// One recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    NumVaults,
    FetchInitial {
        controller: Address,
        market_manager: Address,
        vault_id: u64,
        offset: u64,
    },
    FetchDynamic {
        controller: Address,
        market_manager: Address,
        vault_id: u64,
        offset: u64,
    },
}

impl RemoteCall {
    /// Vault id for per-vault reads, `None` for the count query.
    pub fn vault_id(&self) -> Option<u64> {
        match self {
            Self::NumVaults => None,
            Self::FetchInitial { vault_id, .. } | Self::FetchDynamic { vault_id, .. } => {
                Some(*vault_id)
            }
        }
    }
}

/// Scripted vault factory + fetch service.
pub struct ScriptedProtocol {
    address: Address,
    timestamps: Vec<u64>,
    markets_per_vault: usize,
    count_failure: Option<TransportError>,
    failures: HashMap<u64, TransportError>,
    static_reads: HashMap<u64, StaticReadout>,
    dynamic_reads: HashMap<u64, DynamicReadout>,
    calls: Mutex<Vec<RemoteCall>>,
}

impl ScriptedProtocol {
    /// A protocol with no vaults.
    pub fn new() -> Self {
        Self {
            address: address(0xfe7c4),
            timestamps: Vec::new(),
            markets_per_vault: 2,
            count_failure: None,
            failures: HashMap::new(),
            static_reads: HashMap::new(),
            dynamic_reads: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `timestamps.len()` vaults; the read for vault `i` reports
    /// `timestamps[i - 1]`.
    pub fn with_vault_timestamps(mut self, timestamps: &[u64]) -> Self {
        self.timestamps = timestamps.to_vec();
        self
    }

    /// `count` vaults with timestamps `1000 + i`.
    pub fn with_vaults(self, count: u64) -> Self {
        let timestamps: Vec<u64> = (1..=count).map(|i| 1_000 + i).collect();
        self.with_vault_timestamps(&timestamps)
    }

    pub fn with_markets_per_vault(mut self, markets: usize) -> Self {
        self.markets_per_vault = markets;
        self
    }

    /// Make the count query fail.
    pub fn with_count_failure(mut self, error: TransportError) -> Self {
        self.count_failure = Some(error);
        self
    }

    /// Make every read for `vault_id` fail.
    pub fn with_failure(mut self, vault_id: u64, error: TransportError) -> Self {
        self.failures.insert(vault_id, error);
        self
    }

    /// Serve `readout` for the given vault id instead of the synthesised one.
    pub fn with_static_readout(mut self, vault_id: u64, readout: StaticReadout) -> Self {
        self.static_reads.insert(vault_id, readout);
        self
    }

    /// Serve `readout` for the given vault id instead of the synthesised one.
    pub fn with_dynamic_readout(mut self, vault_id: u64, readout: DynamicReadout) -> Self {
        self.dynamic_reads.insert(vault_id, readout);
        self
    }

    /// Snapshot of the call log.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.lock_calls().clone()
    }

    /// Vault ids of per-vault reads in issue order.
    pub fn fetched_vault_ids(&self) -> Vec<u64> {
        self.lock_calls()
            .iter()
            .filter_map(RemoteCall::vault_id)
            .collect()
    }

    pub fn count_queries(&self) -> usize {
        self.lock_calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::NumVaults))
            .count()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<RemoteCall>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: RemoteCall) {
        self.lock_calls().push(call);
    }

    fn timestamp_for(&self, vault_id: u64) -> u64 {
        let index = usize::try_from(vault_id - 1).unwrap_or(usize::MAX);
        self.timestamps.get(index).copied().unwrap_or(0)
    }

    fn check_failure(&self, vault_id: u64) -> Result<()> {
        match self.failures.get(&vault_id) {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }
}

impl Default for ScriptedProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractHandle for ScriptedProtocol {
    fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl VaultFactory for ScriptedProtocol {
    async fn num_vaults(&self) -> Result<u64> {
        self.record(RemoteCall::NumVaults);
        match &self.count_failure {
            Some(error) => Err(error.clone().into()),
            None => Ok(self.timestamps.len() as u64),
        }
    }
}

#[async_trait]
impl FetchService for ScriptedProtocol {
    async fn fetch_initial(
        &self,
        controller: Address,
        market_manager: Address,
        vault_id: VaultId,
        offset: u64,
    ) -> Result<StaticReadout> {
        let id = vault_id.get();
        self.record(RemoteCall::FetchInitial {
            controller,
            market_manager,
            vault_id: id,
            offset,
        });
        self.check_failure(id)?;
        Ok(self.static_reads.get(&id).cloned().unwrap_or_else(|| {
            static_readout(id, self.markets_per_vault, self.timestamp_for(id))
        }))
    }

    async fn fetch_dynamic(
        &self,
        controller: Address,
        market_manager: Address,
        vault_id: VaultId,
        offset: u64,
    ) -> Result<DynamicReadout> {
        let id = vault_id.get();
        self.record(RemoteCall::FetchDynamic {
            controller,
            market_manager,
            vault_id: id,
            offset,
        });
        self.check_failure(id)?;
        Ok(self.dynamic_reads.get(&id).cloned().unwrap_or_else(|| {
            dynamic_readout(id, self.markets_per_vault, self.timestamp_for(id))
        }))
    }
}
