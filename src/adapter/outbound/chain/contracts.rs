//! ABI bindings for the read-only protocol contracts.

#![allow(non_snake_case)]

use alloy_sol_types::sol;

sol! {
    #[sol(rpc)]
    interface IVaultFactory {
        function numVaults() external view returns (uint256);
    }

    struct MarketParameters {
        uint256 N;
        uint256 sigma;
        uint256 omega;
        uint256 delta;
        uint256 r;
        uint256 s;
    }

    struct CollateralBundle {
        address addr;
        string symbol;
        uint256 decimals;
    }

    struct StaticVaultBundle {
        uint256 vaultId;
        uint256[] marketIds;
        bool onlyVerified;
        MarketParameters default_params;
        uint256 r;
        uint256 asset_limit;
        uint256 total_asset_limit;
        CollateralBundle collateral;
    }

    struct StaticMarketBundle {
        uint256 marketId;
        uint256 creationTimestamp;
        address long;
        address short;
        MarketParameters parameters;
    }

    struct MarketPhaseData {
        bool duringAssessment;
        bool onlyReputable;
        bool resolved;
        uint256 min_rep_score;
        bool alive;
        bool atLoss;
        uint256 base_budget;
    }

    struct InstrumentData {
        bool trusted;
        uint256 balance;
        uint256 faceValue;
        uint256 marketId;
        uint256 principal;
        uint256 expectedYield;
        uint256 duration;
        string description;
        address Instrument_address;
        uint256 instrument_type;
        uint256 maturityDate;
    }

    struct DynamicVaultBundle {
        uint256 vaultId;
        uint256 totalSupply;
    }

    struct DynamicMarketBundle {
        uint256 marketId;
        MarketPhaseData phase;
        uint256 longZCB;
        uint256 shortZCB;
        InstrumentData instrument;
        uint256 approved_principal;
        uint256 approved_yield;
    }

    #[sol(rpc)]
    interface IFetcher {
        function fetchInitial(
            address controller,
            address marketManager,
            uint256 vaultId,
            uint256 offset
        ) external view returns (
            StaticVaultBundle memory vaultBundle,
            StaticMarketBundle[] memory marketBundles,
            uint256 timestamp
        );

        function fetchDynamic(
            address controller,
            address marketManager,
            uint256 vaultId,
            uint256 offset
        ) external view returns (
            DynamicVaultBundle memory vaultBundle,
            DynamicMarketBundle[] memory marketBundles,
            uint256 timestamp
        );
    }
}
