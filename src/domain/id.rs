//! Identifier newtypes.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Vault identifier assigned by the vault factory.
///
/// Identifiers are 1-indexed and contiguous; zero is never a valid vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultId(u64);

impl VaultId {
    /// Create a vault identifier, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroVaultId`] for `0`.
    pub const fn try_new(id: u64) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::ZeroVaultId);
        }
        Ok(Self(id))
    }

    /// Iterate `1..=count` in ascending order.
    pub fn range(count: u64) -> impl Iterator<Item = Self> {
        (1..=count).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<U256> for VaultId {
    type Error = DomainError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let id = u64::try_from(value).map_err(|_| DomainError::OutOfRange {
            field: "vaultId",
            value: value.to_string(),
        })?;
        Self::try_new(id)
    }
}

impl fmt::Display for VaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Market identifier assigned by the controller.
///
/// Kept at full width; the protocol makes no promise that market ids stay
/// small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(U256);

impl MarketId {
    pub const fn new(id: U256) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> U256 {
        self.0
    }
}

impl From<U256> for MarketId {
    fn from(id: U256) -> Self {
        Self(id)
    }
}

impl From<u64> for MarketId {
    fn from(id: u64) -> Self {
        Self(U256::from(id))
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
