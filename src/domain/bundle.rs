//! Super-bundles: one vault paired with its ordered markets.

use serde::{Deserialize, Serialize};

use super::id::VaultId;
use super::market::{DynamicMarketBundle, StaticMarketBundle};
use super::vault::{DynamicVaultBundle, StaticVaultBundle};

/// Anything that belongs to exactly one vault.
pub trait VaultScoped {
    fn vault_id(&self) -> VaultId;
}

impl VaultScoped for StaticVaultBundle {
    fn vault_id(&self) -> VaultId {
        self.vault_id
    }
}

impl VaultScoped for DynamicVaultBundle {
    fn vault_id(&self) -> VaultId {
        self.vault_id
    }
}

/// A vault bundle together with its market bundles.
///
/// Market order is the order returned by the fetch service and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperBundle<V, M> {
    pub vault: V,
    pub markets: Vec<M>,
}

impl<V, M> SuperBundle<V, M> {
    pub fn new(vault: V, markets: Vec<M>) -> Self {
        Self { vault, markets }
    }
}

impl<V: VaultScoped, M> VaultScoped for SuperBundle<V, M> {
    fn vault_id(&self) -> VaultId {
        self.vault.vault_id()
    }
}

pub type StaticSuperBundle = SuperBundle<StaticVaultBundle, StaticMarketBundle>;
pub type DynamicSuperBundle = SuperBundle<DynamicVaultBundle, DynamicMarketBundle>;
