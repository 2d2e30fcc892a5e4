//! Per-vault bundles.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::id::{MarketId, VaultId};
use super::market::MarketParameters;

/// Identity and display metadata of a collateral asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralBundle {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// Slow-changing configuration of a vault plus the markets it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticVaultBundle {
    pub vault_id: VaultId,
    pub market_ids: Vec<MarketId>,
    pub only_verified: bool,
    pub default_params: MarketParameters,
    pub r: U256,
    pub asset_limit: U256,
    pub total_asset_limit: U256,
    pub collateral: CollateralBundle,
}

/// Frequently-changing state of a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicVaultBundle {
    pub vault_id: VaultId,
    pub total_supply: U256,
}
