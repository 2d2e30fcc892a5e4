//! Protocol-agnostic snapshot types.
//!
//! Everything here is a plain value: bundles are created once per
//! aggregation call and never mutated afterwards.

pub mod bundle;
pub mod error;
pub mod id;
pub mod market;
pub mod snapshot;
pub mod timestamp;
pub mod vault;

pub use bundle::{DynamicSuperBundle, StaticSuperBundle, SuperBundle, VaultScoped};
pub use id::{MarketId, VaultId};
pub use market::{
    DynamicMarketBundle, InstrumentData, MarketParameters, MarketPhaseData, StaticMarketBundle,
};
pub use snapshot::{DynamicSnapshot, Snapshot, StaticSnapshot};
pub use timestamp::Timestamp;
pub use vault::{CollateralBundle, DynamicVaultBundle, StaticVaultBundle};
