//! Domain validation errors.
//!
//! Raised when a value read from the chain does not satisfy the invariants
//! of the typed bundle it is mapped into.
//!
//! # Examples
//!
//! ```
//! use vaultsnap::domain::error::DomainError;
//! use vaultsnap::domain::id::VaultId;
//!
//! assert!(matches!(VaultId::try_new(0), Err(DomainError::ZeroVaultId)));
//! ```

use thiserror::Error;

use super::id::VaultId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Vault identifiers are 1-indexed.
    #[error("vault identifiers start at 1, got 0")]
    ZeroVaultId,

    /// A 256-bit value does not fit the narrower domain type.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value as read from the chain.
        value: String,
    },

    /// The fetch service answered for a different vault than requested.
    #[error("requested vault {requested} but received bundle for vault {returned}")]
    VaultIdMismatch {
        /// Vault identifier passed to the read.
        requested: VaultId,
        /// Vault identifier carried by the returned bundle.
        returned: VaultId,
    },
}
