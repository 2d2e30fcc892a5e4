//! Builders for domain primitives used across tests.

use alloy_primitives::{Address, U256};

use crate::domain::{
    CollateralBundle, DynamicMarketBundle, DynamicVaultBundle, InstrumentData, MarketId,
    MarketParameters, MarketPhaseData, StaticMarketBundle, StaticVaultBundle, Timestamp, VaultId,
};
use crate::port::{DynamicReadout, StaticReadout};

/// Vault id from a literal. Panics on zero, which is a test bug.
pub fn vault_id(id: u64) -> VaultId {
    VaultId::try_new(id).expect("vault ids in tests start at 1")
}

/// Deterministic address derived from a small integer.
pub fn address(seed: u64) -> Address {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&seed.to_be_bytes());
    Address::from(bytes)
}

/// Market ids owned by a vault: `vault * 100 + 1 ..= vault * 100 + count`.
pub fn market_ids(vault: u64, count: usize) -> Vec<MarketId> {
    (1..=count as u64)
        .map(|j| MarketId::from(vault * 100 + j))
        .collect()
}

pub fn parameters(seed: u64) -> MarketParameters {
    MarketParameters {
        n: U256::from(seed),
        sigma: U256::from(seed + 1),
        omega: U256::from(seed + 2),
        delta: U256::from(seed + 3),
        r: U256::from(seed + 4),
        s: U256::from(seed + 5),
    }
}

pub fn static_vault(vault: u64, market_ids: Vec<MarketId>) -> StaticVaultBundle {
    StaticVaultBundle {
        vault_id: vault_id(vault),
        market_ids,
        only_verified: vault % 2 == 0,
        default_params: parameters(vault),
        r: U256::from(vault),
        asset_limit: U256::from(1_000 * vault),
        total_asset_limit: U256::from(10_000 * vault),
        collateral: CollateralBundle {
            address: address(vault + 10_000),
            symbol: "USDC".to_string(),
            decimals: 6,
        },
    }
}

pub fn static_market(market: MarketId) -> StaticMarketBundle {
    StaticMarketBundle {
        market_id: market,
        creation_timestamp: Timestamp::from_secs(1_000),
        long: address(market.get().to::<u64>() * 2),
        short: address(market.get().to::<u64>() * 2 + 1),
        parameters: parameters(market.get().to::<u64>()),
    }
}

pub fn dynamic_vault(vault: u64, total_supply: u64) -> DynamicVaultBundle {
    DynamicVaultBundle {
        vault_id: vault_id(vault),
        total_supply: U256::from(total_supply),
    }
}

pub fn dynamic_market(market: MarketId) -> DynamicMarketBundle {
    DynamicMarketBundle {
        market_id: market,
        phase: MarketPhaseData {
            alive: true,
            ..Default::default()
        },
        long_zcb: U256::from(500u64),
        short_zcb: U256::from(250u64),
        instrument: InstrumentData {
            trusted: true,
            market_id: market.get(),
            description: format!("instrument for market {market}"),
            ..Default::default()
        },
        approved_principal: U256::from(100u64),
        approved_yield: U256::from(7u64),
    }
}

/// Static readout for `vault` with `markets` markets observed at `timestamp`.
pub fn static_readout(vault: u64, markets: usize, timestamp: u64) -> StaticReadout {
    let ids = market_ids(vault, markets);
    StaticReadout {
        markets: ids.iter().copied().map(static_market).collect(),
        vault: static_vault(vault, ids),
        timestamp: Timestamp::from_secs(timestamp),
    }
}

/// Dynamic readout for `vault` with `markets` markets observed at `timestamp`.
pub fn dynamic_readout(vault: u64, markets: usize, timestamp: u64) -> DynamicReadout {
    DynamicReadout {
        vault: dynamic_vault(vault, vault * 1_000),
        markets: market_ids(vault, markets)
            .into_iter()
            .map(dynamic_market)
            .collect(),
        timestamp: Timestamp::from_secs(timestamp),
    }
}
