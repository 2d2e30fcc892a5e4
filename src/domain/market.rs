//! Per-market bundles.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::id::MarketId;
use super::timestamp::Timestamp;

/// Pricing and risk configuration of a market.
///
/// Values are fixed-point integers as stored on chain; no scaling is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketParameters {
    pub n: U256,
    pub sigma: U256,
    pub omega: U256,
    pub delta: U256,
    pub r: U256,
    pub s: U256,
}

/// Slow-changing identity of a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticMarketBundle {
    pub market_id: MarketId,
    pub creation_timestamp: Timestamp,
    /// Long outcome token.
    pub long: Address,
    /// Short outcome token.
    pub short: Address,
    pub parameters: MarketParameters,
}

/// Lifecycle flags of a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPhaseData {
    pub during_assessment: bool,
    pub only_reputable: bool,
    pub resolved: bool,
    pub min_rep_score: U256,
    pub alive: bool,
    pub at_loss: bool,
    pub base_budget: U256,
}

impl MarketPhaseData {
    /// Short human-readable label for the current phase.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.resolved {
            "resolved"
        } else if self.during_assessment {
            "assessment"
        } else if self.alive {
            "active"
        } else {
            "inactive"
        }
    }
}

/// The financial instrument backing a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentData {
    pub trusted: bool,
    pub balance: U256,
    pub face_value: U256,
    pub market_id: U256,
    pub principal: U256,
    pub expected_yield: U256,
    pub duration: U256,
    pub description: String,
    pub instrument_address: Address,
    pub instrument_type: U256,
    pub maturity_date: U256,
}

/// Frequently-changing state of a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicMarketBundle {
    pub market_id: MarketId,
    pub phase: MarketPhaseData,
    /// Outstanding long zero-coupon-bond supply.
    pub long_zcb: U256,
    /// Outstanding short zero-coupon-bond supply.
    pub short_zcb: U256,
    pub instrument: InstrumentData,
    pub approved_principal: U256,
    pub approved_yield: U256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_label_prefers_resolution_over_other_flags() {
        let mut phase = MarketPhaseData {
            during_assessment: true,
            alive: true,
            resolved: true,
            ..Default::default()
        };
        assert_eq!(phase.label(), "resolved");

        phase.resolved = false;
        assert_eq!(phase.label(), "assessment");

        phase.during_assessment = false;
        assert_eq!(phase.label(), "active");

        phase.alive = false;
        assert_eq!(phase.label(), "inactive");
    }
}
