//! Point-in-time snapshot of every vault in a deployment.

use serde::{Deserialize, Serialize};

use super::bundle::{DynamicSuperBundle, StaticSuperBundle, SuperBundle};
use super::timestamp::Timestamp;

/// Ordered super-bundles plus the logical time of the read.
///
/// `timestamp` is the chain time observed by the last per-vault read. It is
/// `None` exactly when `bundles` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<B> {
    pub bundles: Vec<B>,
    pub timestamp: Option<Timestamp>,
}

impl<B> Snapshot<B> {
    /// Snapshot of a protocol with no vaults.
    pub const fn empty() -> Self {
        Self {
            bundles: Vec::new(),
            timestamp: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }
}

impl<V, M> Snapshot<SuperBundle<V, M>> {
    /// Total number of market bundles across all vaults.
    #[must_use]
    pub fn market_count(&self) -> usize {
        self.bundles.iter().map(|b| b.markets.len()).sum()
    }
}

pub type StaticSnapshot = Snapshot<StaticSuperBundle>;
pub type DynamicSnapshot = Snapshot<DynamicSuperBundle>;
