//! Loading and validation of `config.toml`.
//!
//! Provides the main [`Config`] struct. Parsing a TOML file is pure; the
//! environment overrides for the RPC endpoint and chain are applied as a
//! separate step.
//!
//! # Example
//!
//! ```no_run
//! use vaultsnap::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?.with_process_env()?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::registry::{default_rpc_url, AddressRegistry, Deployment, POLYGON};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `network.rpc_url`.
pub const RPC_URL_ENV: &str = "VAULTSNAP_RPC_URL";

/// Environment variable overriding `network.chain_id`.
pub const CHAIN_ID_ENV: &str = "VAULTSNAP_CHAIN_ID";

/// RPC connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Chain to read from. Defaults to Polygon mainnet.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// JSON-RPC endpoint. Falls back to the chain's public endpoint.
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Upper bound for a single remote call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_chain_id() -> u64 {
    POLYGON
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            rpc_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// On-disk layout of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    network: NetworkConfig,
    #[serde(default)]
    logging: LoggingConfig,
    /// Keyed by decimal chain id.
    #[serde(default)]
    deployments: BTreeMap<String, Deployment>,
}

/// Effective configuration: file contents, env overrides and the merged
/// address registry.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// RPC connection settings.
    pub network: NetworkConfig,

    /// `[logging]` section.
    pub logging: LoggingConfig,

    /// Deployed contract addresses, built-in entries merged with
    /// `[deployments.<chain_id>]`.
    pub registry: AddressRegistry,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// The process environment is not consulted; see
    /// [`Config::with_env_overrides`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - A deployment key is not a chain id
    /// - Validation fails (e.g., zero timeout, malformed RPC URL)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(ConfigError::Parse)?;

        let mut registry = AddressRegistry::builtin();
        for (key, deployment) in file.deployments {
            let chain_id = key.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field: "deployments",
                reason: format!("'{key}' is not a chain id: {e}"),
            })?;
            registry.merge(chain_id, deployment);
        }

        let mut config = Self {
            network: file.network,
            logging: file.logging,
            registry,
        };
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply `VAULTSNAP_RPC_URL` and `VAULTSNAP_CHAIN_ID` as resolved by
    /// `lookup`, then re-validate. Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a chain id that is not a
    /// number, or any validation error caused by the overridden URL.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = set(RPC_URL_ENV) {
            self.network.rpc_url = Some(url.trim().to_string());
        }
        if let Some(chain_id) = set(CHAIN_ID_ENV) {
            self.network.chain_id = chain_id.trim().parse().map_err(
                |e: std::num::ParseIntError| ConfigError::InvalidValue {
                    field: "chain_id",
                    reason: e.to_string(),
                },
            )?;
        }

        self.validate()?;
        Ok(self)
    }

    /// [`Config::with_env_overrides`] against the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::with_env_overrides`].
    pub fn with_process_env(self) -> Result<Self> {
        self.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.network.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(url) = &self.network.rpc_url {
            if url.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "rpc_url" }.into());
            }
            Url::parse(url).map_err(|e| ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Override the target chain (e.g. from `--chain-id`).
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.network.chain_id = chain_id;
        self
    }

    /// Effective RPC endpoint for the target chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no URL is configured and the
    /// chain has no well-known public endpoint.
    pub fn rpc_url(&self) -> Result<Url> {
        let raw = match &self.network.rpc_url {
            Some(url) => url.as_str(),
            None => default_rpc_url(self.network.chain_id)
                .ok_or(ConfigError::MissingField { field: "rpc_url" })?,
        };
        Ok(Url::parse(raw)?)
    }

    /// Initialize the tracing subscriber from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::registry::MUMBAI;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").expect("defaults");
        assert_eq!(config.network.chain_id, POLYGON);
        assert_eq!(config.network.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.rpc_url().map(|u| u.to_string()).ok().as_deref(),
            Some("https://polygon-rpc.com/")
        );
    }

    #[test]
    fn deployments_are_merged_by_chain_id() {
        let config = Config::parse_toml(
            r#"
[deployments.80001]
fetcher = "0x00000000000000000000000000000000000000aa"
"#,
        )
        .expect("parse");

        let deployment = config.registry.get(MUMBAI).expect("mumbai");
        assert!(!deployment.fetcher.is_zero());
        assert!(deployment.controller.is_zero());
    }

    #[test]
    fn non_numeric_deployment_key_is_rejected() {
        let result = Config::parse_toml(
            r#"
[deployments.polygon]
fetcher = "0x00000000000000000000000000000000000000aa"
"#,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "deployments",
                ..
            }))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Config::parse_toml("[network]\nrequest_timeout_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_chain_without_rpc_url_has_no_endpoint() {
        let config = Config::parse_toml("").expect("defaults").with_chain_id(1);
        assert!(matches!(
            config.rpc_url(),
            Err(Error::Config(ConfigError::MissingField { field: "rpc_url" }))
        ));
    }

    fn env(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(&'static str, &'static str)> = vars.to_vec();
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    const FILE_WITH_NETWORK: &str = r#"
[network]
chain_id = 137
rpc_url = "https://polygon.example.org"
"#;

    #[test]
    fn env_overrides_win_over_file() {
        let config = Config::parse_toml(FILE_WITH_NETWORK)
            .and_then(|c| {
                c.with_env_overrides(env(&[
                    (RPC_URL_ENV, "http://localhost:8545"),
                    (CHAIN_ID_ENV, " 80001 "),
                ]))
            })
            .expect("overrides apply");

        assert_eq!(config.network.chain_id, MUMBAI);
        assert_eq!(config.network.rpc_url.as_deref(), Some("http://localhost:8545"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = Config::parse_toml(FILE_WITH_NETWORK)
            .and_then(|c| c.with_env_overrides(env(&[(RPC_URL_ENV, "  "), (CHAIN_ID_ENV, "")])))
            .expect("blank values ignored");

        assert_eq!(config.network.chain_id, POLYGON);
        assert_eq!(config.network.rpc_url.as_deref(), Some("https://polygon.example.org"));
    }

    #[test]
    fn absent_env_leaves_file_values() {
        let config = Config::parse_toml(FILE_WITH_NETWORK)
            .and_then(|c| c.with_env_overrides(env(&[])))
            .expect("no overrides");

        assert_eq!(config.network.chain_id, POLYGON);
        assert_eq!(config.network.rpc_url.as_deref(), Some("https://polygon.example.org"));
    }

    #[test]
    fn non_numeric_chain_id_override_is_rejected() {
        let result = Config::parse_toml("")
            .and_then(|c| c.with_env_overrides(env(&[(CHAIN_ID_ENV, "polygon")])));

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "chain_id",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_rpc_url_override_is_rejected() {
        let result = Config::parse_toml("")
            .and_then(|c| c.with_env_overrides(env(&[(RPC_URL_ENV, "not a url")])));

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "rpc_url",
                ..
            }))
        ));
    }
}
