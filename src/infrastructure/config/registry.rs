//! Network-keyed registry of deployed contract addresses.
//!
//! Built once at startup from the built-in table and the `[deployments]`
//! section of the config file, then handed to whoever needs it. Nothing
//! mutates it after [`Config`](super::settings::Config) is loaded.

use std::collections::BTreeMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Polygon mainnet.
pub const POLYGON: u64 = 137;

/// Polygon Mumbai testnet.
pub const MUMBAI: u64 = 80001;

/// Public RPC endpoint for a known chain.
#[must_use]
pub const fn default_rpc_url(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        POLYGON => Some("https://polygon-rpc.com"),
        MUMBAI => Some("https://rpc-mumbai.maticvigil.com"),
        _ => None,
    }
}

/// Addresses of one protocol deployment.
///
/// Unset contracts are the zero address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deployment {
    #[serde(default)]
    pub reputation_token: Address,
    #[serde(default)]
    pub controller: Address,
    #[serde(default)]
    pub market_manager: Address,
    #[serde(default)]
    pub vault_factory: Address,
    #[serde(default)]
    pub synthetic_zcb_factory: Address,
    #[serde(default)]
    pub fetcher: Address,
}

/// The four addresses snapshot aggregation reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderAddresses {
    pub fetcher: Address,
    pub controller: Address,
    pub vault_factory: Address,
    pub market_manager: Address,
}

impl Deployment {
    /// `(name, address)` for every contract, in display order.
    #[must_use]
    pub fn contracts(&self) -> [(&'static str, Address); 6] {
        [
            ("controller", self.controller),
            ("market_manager", self.market_manager),
            ("vault_factory", self.vault_factory),
            ("fetcher", self.fetcher),
            ("reputation_token", self.reputation_token),
            ("synthetic_zcb_factory", self.synthetic_zcb_factory),
        ]
    }

    /// Addresses needed for aggregation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsetAddress`] for the first of them that is
    /// still the zero address.
    pub fn readers(&self, chain_id: u64) -> Result<ReaderAddresses> {
        let require = |contract: &'static str, address: Address| {
            if address.is_zero() {
                Err(ConfigError::UnsetAddress { chain_id, contract })
            } else {
                Ok(address)
            }
        };

        Ok(ReaderAddresses {
            fetcher: require("fetcher", self.fetcher)?,
            controller: require("controller", self.controller)?,
            vault_factory: require("vault_factory", self.vault_factory)?,
            market_manager: require("market_manager", self.market_manager)?,
        })
    }
}

/// Deployments keyed by chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRegistry {
    deployments: BTreeMap<u64, Deployment>,
}

impl AddressRegistry {
    /// Registry with the known chains, all addresses unset.
    #[must_use]
    pub fn builtin() -> Self {
        let deployments = [POLYGON, MUMBAI]
            .into_iter()
            .map(|chain_id| (chain_id, Deployment::default()))
            .collect();
        Self { deployments }
    }

    /// Add or replace the deployment for a chain.
    pub fn merge(&mut self, chain_id: u64, deployment: Deployment) {
        self.deployments.insert(chain_id, deployment);
    }

    /// Deployment for a chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownChain`] if the chain is not registered.
    pub fn get(&self, chain_id: u64) -> Result<&Deployment> {
        self.deployments
            .get(&chain_id)
            .ok_or_else(|| ConfigError::UnknownChain { chain_id }.into())
    }

    /// Registered chain ids in ascending order.
    pub fn chains(&self) -> impl Iterator<Item = u64> + '_ {
        self.deployments.keys().copied()
    }
}

impl Default for AddressRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloy_primitives::address;

    fn full_deployment() -> Deployment {
        Deployment {
            reputation_token: address!("0x0000000000000000000000000000000000000001"),
            controller: address!("0x0000000000000000000000000000000000000002"),
            market_manager: address!("0x0000000000000000000000000000000000000003"),
            vault_factory: address!("0x0000000000000000000000000000000000000004"),
            synthetic_zcb_factory: address!("0x0000000000000000000000000000000000000005"),
            fetcher: address!("0x0000000000000000000000000000000000000006"),
        }
    }

    #[test]
    fn builtin_registers_polygon_and_mumbai() {
        let registry = AddressRegistry::builtin();
        assert_eq!(registry.chains().collect::<Vec<_>>(), vec![POLYGON, MUMBAI]);
        assert_eq!(registry.get(POLYGON).ok(), Some(&Deployment::default()));
    }

    #[test]
    fn unknown_chain_is_an_error() {
        let registry = AddressRegistry::builtin();
        assert!(matches!(
            registry.get(1),
            Err(Error::Config(ConfigError::UnknownChain { chain_id: 1 }))
        ));
    }

    #[test]
    fn merge_replaces_builtin_entry() {
        let mut registry = AddressRegistry::builtin();
        registry.merge(POLYGON, full_deployment());

        let readers = registry
            .get(POLYGON)
            .and_then(|d| d.readers(POLYGON))
            .expect("complete deployment");
        assert_eq!(readers.fetcher, full_deployment().fetcher);
        assert_eq!(readers.market_manager, full_deployment().market_manager);
    }

    #[test]
    fn readers_reject_unset_fetcher_first() {
        let result = Deployment::default().readers(MUMBAI);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnsetAddress {
                chain_id: MUMBAI,
                contract: "fetcher",
            }))
        ));
    }

    #[test]
    fn readers_ignore_contracts_aggregation_does_not_use() {
        let deployment = Deployment {
            reputation_token: Address::ZERO,
            synthetic_zcb_factory: Address::ZERO,
            ..full_deployment()
        };
        assert!(deployment.readers(POLYGON).is_ok());
    }

    #[test]
    fn default_rpc_urls_cover_builtin_chains() {
        for chain_id in AddressRegistry::builtin().chains() {
            assert!(default_rpc_url(chain_id).is_some());
        }
        assert_eq!(default_rpc_url(1), None);
    }
}
