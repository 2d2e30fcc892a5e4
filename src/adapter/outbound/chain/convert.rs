//! Mapping of raw ABI values into domain bundles.
//!
//! Every 256-bit word that the domain stores in a narrower type is range
//! checked here; everything else is carried over at full width.

use alloy_primitives::U256;

use super::contracts::{self, IFetcher};
use crate::domain::error::DomainError;
use crate::domain::{
    CollateralBundle, DynamicMarketBundle, DynamicVaultBundle, InstrumentData, MarketId,
    MarketParameters, MarketPhaseData, StaticMarketBundle, StaticVaultBundle, Timestamp, VaultId,
};
use crate::port::{DynamicReadout, StaticReadout};

/// Vault count reported by the factory.
pub fn vault_count(raw: U256) -> Result<u64, DomainError> {
    u64::try_from(raw).map_err(|_| DomainError::OutOfRange {
        field: "numVaults",
        value: raw.to_string(),
    })
}

pub fn parameters(raw: contracts::MarketParameters) -> MarketParameters {
    MarketParameters {
        n: raw.N,
        sigma: raw.sigma,
        omega: raw.omega,
        delta: raw.delta,
        r: raw.r,
        s: raw.s,
    }
}

pub fn collateral(raw: contracts::CollateralBundle) -> Result<CollateralBundle, DomainError> {
    let decimals = u8::try_from(raw.decimals).map_err(|_| DomainError::OutOfRange {
        field: "collateral.decimals",
        value: raw.decimals.to_string(),
    })?;

    Ok(CollateralBundle {
        address: raw.addr,
        symbol: raw.symbol,
        decimals,
    })
}

pub fn static_vault(raw: contracts::StaticVaultBundle) -> Result<StaticVaultBundle, DomainError> {
    Ok(StaticVaultBundle {
        vault_id: VaultId::try_from(raw.vaultId)?,
        market_ids: raw.marketIds.into_iter().map(MarketId::from).collect(),
        only_verified: raw.onlyVerified,
        default_params: parameters(raw.default_params),
        r: raw.r,
        asset_limit: raw.asset_limit,
        total_asset_limit: raw.total_asset_limit,
        collateral: collateral(raw.collateral)?,
    })
}

pub fn static_market(
    raw: contracts::StaticMarketBundle,
) -> Result<StaticMarketBundle, DomainError> {
    Ok(StaticMarketBundle {
        market_id: MarketId::from(raw.marketId),
        creation_timestamp: Timestamp::try_from(raw.creationTimestamp)?,
        long: raw.long,
        short: raw.short,
        parameters: parameters(raw.parameters),
    })
}

pub fn phase(raw: contracts::MarketPhaseData) -> MarketPhaseData {
    MarketPhaseData {
        during_assessment: raw.duringAssessment,
        only_reputable: raw.onlyReputable,
        resolved: raw.resolved,
        min_rep_score: raw.min_rep_score,
        alive: raw.alive,
        at_loss: raw.atLoss,
        base_budget: raw.base_budget,
    }
}

pub fn instrument(raw: contracts::InstrumentData) -> InstrumentData {
    InstrumentData {
        trusted: raw.trusted,
        balance: raw.balance,
        face_value: raw.faceValue,
        market_id: raw.marketId,
        principal: raw.principal,
        expected_yield: raw.expectedYield,
        duration: raw.duration,
        description: raw.description,
        instrument_address: raw.Instrument_address,
        instrument_type: raw.instrument_type,
        maturity_date: raw.maturityDate,
    }
}

pub fn dynamic_vault(
    raw: contracts::DynamicVaultBundle,
) -> Result<DynamicVaultBundle, DomainError> {
    Ok(DynamicVaultBundle {
        vault_id: VaultId::try_from(raw.vaultId)?,
        total_supply: raw.totalSupply,
    })
}

pub fn dynamic_market(raw: contracts::DynamicMarketBundle) -> DynamicMarketBundle {
    DynamicMarketBundle {
        market_id: MarketId::from(raw.marketId),
        phase: phase(raw.phase),
        long_zcb: raw.longZCB,
        short_zcb: raw.shortZCB,
        instrument: instrument(raw.instrument),
        approved_principal: raw.approved_principal,
        approved_yield: raw.approved_yield,
    }
}

pub fn static_readout(raw: IFetcher::fetchInitialReturn) -> Result<StaticReadout, DomainError> {
    Ok(StaticReadout {
        vault: static_vault(raw.vaultBundle)?,
        markets: raw
            .marketBundles
            .into_iter()
            .map(static_market)
            .collect::<Result<_, _>>()?,
        timestamp: Timestamp::try_from(raw.timestamp)?,
    })
}

pub fn dynamic_readout(raw: IFetcher::fetchDynamicReturn) -> Result<DynamicReadout, DomainError> {
    Ok(DynamicReadout {
        vault: dynamic_vault(raw.vaultBundle)?,
        markets: raw.marketBundles.into_iter().map(dynamic_market).collect(),
        timestamp: Timestamp::try_from(raw.timestamp)?,
    })
}
