//! Sequential per-vault aggregation.
//!
//! ```text
//! VaultFactory::num_vaults ──► count (latched)
//!                                 │
//!          for id in 1..=count    ▼
//! FetchService::fetch_{initial,dynamic}(controller, market_manager, id, 0)
//!                                 │
//!                                 ▼
//!              Snapshot { bundles[id - 1], timestamp of read #count }
//! ```
//!
//! Reads are issued one at a time in ascending vault order. The snapshot
//! time is the time reported by the last read, so it is a best-effort
//! logical clock rather than the time of a single atomic read. Vaults created
//! after the count was read are not included.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::domain::error::DomainError;
use crate::domain::{DynamicSnapshot, Snapshot, StaticSnapshot, SuperBundle, VaultId, VaultScoped};
use crate::error::Result;
use crate::port::{ContractHandle, FetchService, Readout, VaultFactory};

/// Market offset meaning "every market of the vault".
pub const ALL_MARKETS: u64 = 0;

/// Builds static and dynamic snapshots from four protocol handles.
///
/// All handles must point at the same deployment; this is not checked.
/// The aggregator holds no state between calls, so concurrent calls are
/// independent of each other.
pub struct SnapshotAggregator<'a> {
    fetcher: &'a dyn FetchService,
    controller: &'a dyn ContractHandle,
    vault_factory: &'a dyn VaultFactory,
    market_manager: &'a dyn ContractHandle,
}

impl<'a> SnapshotAggregator<'a> {
    pub fn new(
        fetcher: &'a dyn FetchService,
        controller: &'a dyn ContractHandle,
        vault_factory: &'a dyn VaultFactory,
        market_manager: &'a dyn ContractHandle,
    ) -> Self {
        Self {
            fetcher,
            controller,
            vault_factory,
            market_manager,
        }
    }

    /// Read the static configuration of every vault and its markets.
    ///
    /// # Errors
    ///
    /// Fails as a whole if the count query or any per-vault read fails; no
    /// partial snapshot is returned.
    pub async fn fetch_static(&self) -> Result<StaticSnapshot> {
        let controller = self.controller.address();
        let market_manager = self.market_manager.address();
        let fetcher = self.fetcher;

        self.collect("static", move |vault_id| {
            fetcher.fetch_initial(controller, market_manager, vault_id, ALL_MARKETS)
        })
        .await
    }

    /// Read the volatile state of every vault and its markets.
    ///
    /// # Errors
    ///
    /// Fails as a whole if the count query or any per-vault read fails; no
    /// partial snapshot is returned.
    pub async fn fetch_dynamic(&self) -> Result<DynamicSnapshot> {
        let controller = self.controller.address();
        let market_manager = self.market_manager.address();
        let fetcher = self.fetcher;

        self.collect("dynamic", move |vault_id| {
            fetcher.fetch_dynamic(controller, market_manager, vault_id, ALL_MARKETS)
        })
        .await
    }

    async fn collect<V, M, F, Fut>(
        &self,
        kind: &'static str,
        mut read: F,
    ) -> Result<Snapshot<SuperBundle<V, M>>>
    where
        V: VaultScoped,
        F: FnMut(VaultId) -> Fut,
        Fut: Future<Output = Result<Readout<V, M>>>,
    {
        let vault_count = self.vault_factory.num_vaults().await?;
        if vault_count == 0 {
            info!(kind, "No vaults deployed, returning empty snapshot");
            return Ok(Snapshot::empty());
        }

        info!(kind, vault_count, "Fetching snapshot");

        let mut bundles = Vec::new();
        let mut timestamp = None;

        for vault_id in VaultId::range(vault_count) {
            let readout = match read(vault_id).await {
                Ok(readout) => readout,
                Err(e) => {
                    warn!(
                        kind,
                        vault_id = %vault_id,
                        error = %e,
                        "Vault read failed, aborting snapshot"
                    );
                    return Err(e);
                }
            };

            let (bundle, observed) = readout.into_parts();
            let returned = bundle.vault_id();
            if returned != vault_id {
                return Err(DomainError::VaultIdMismatch {
                    requested: vault_id,
                    returned,
                }
                .into());
            }

            debug!(
                kind,
                vault_id = %vault_id,
                markets = bundle.markets.len(),
                timestamp = observed.as_secs(),
                "Vault read"
            );

            bundles.push(bundle);
            if vault_id.get() == vault_count {
                timestamp = Some(observed);
            }
        }

        let snapshot = Snapshot { bundles, timestamp };
        info!(
            kind,
            vaults = snapshot.len(),
            markets = snapshot.market_count(),
            timestamp = ?snapshot.timestamp.map(|t| t.as_secs()),
            "Snapshot complete"
        );
        Ok(snapshot)
    }
}

/// Static snapshot of every vault; see [`SnapshotAggregator::fetch_static`].
///
/// # Errors
///
/// Propagates the first remote failure unmodified.
pub async fn fetch_static(
    fetcher: &dyn FetchService,
    controller: &dyn ContractHandle,
    vault_factory: &dyn VaultFactory,
    market_manager: &dyn ContractHandle,
) -> Result<StaticSnapshot> {
    SnapshotAggregator::new(fetcher, controller, vault_factory, market_manager)
        .fetch_static()
        .await
}

/// Dynamic snapshot of every vault; see [`SnapshotAggregator::fetch_dynamic`].
///
/// # Errors
///
/// Propagates the first remote failure unmodified.
pub async fn fetch_dynamic(
    fetcher: &dyn FetchService,
    controller: &dyn ContractHandle,
    vault_factory: &dyn VaultFactory,
    market_manager: &dyn ContractHandle,
) -> Result<DynamicSnapshot> {
    SnapshotAggregator::new(fetcher, controller, vault_factory, market_manager)
        .fetch_dynamic()
        .await
}
