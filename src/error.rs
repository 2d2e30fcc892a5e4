use thiserror::Error;

use crate::domain::error::DomainError;

/// Problems with the config file or the address registry.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("no deployment registered for chain {chain_id}")]
    UnknownChain { chain_id: u64 },

    #[error("{contract} address is not set for chain {chain_id}")]
    UnsetAddress {
        chain_id: u64,
        contract: &'static str,
    },
}

/// Remote read failures.
///
/// These are surfaced to the caller unmodified; the aggregator never
/// retries or converts them into an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("{call} failed: {reason}")]
    CallFailed { call: &'static str, reason: String },

    #[error("{call} timed out after {timeout_secs}s")]
    Timeout {
        call: &'static str,
        timeout_secs: u64,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// True when the error came from the remote side rather than local input.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
