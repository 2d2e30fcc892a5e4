use std::fs;
use std::path::PathBuf;

use alloy_primitives::Address;
use tempfile::TempDir;
use vaultsnap::error::{ConfigError, Error};
use vaultsnap::infrastructure::config::registry::{MUMBAI, POLYGON};
use vaultsnap::infrastructure::config::settings::Config;
use vaultsnap::testkit::config::{deployed_toml, undeployed_toml};

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn deployed_config_resolves_reader_addresses() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, &deployed_toml(POLYGON));

    let config = Config::load(&path).expect("config should load");
    let readers = config
        .registry
        .get(POLYGON)
        .and_then(|d| d.readers(POLYGON))
        .expect("all reader addresses set");

    assert_eq!(readers.controller, Address::with_last_byte(0xc1));
    assert_eq!(readers.market_manager, Address::with_last_byte(0xc2));
    assert_eq!(readers.vault_factory, Address::with_last_byte(0xc3));
    assert_eq!(readers.fetcher, Address::with_last_byte(0xc4));
    assert_eq!(config.network.request_timeout_secs, 1);
}

#[test]
fn undeployed_config_reports_fetcher_first() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, &undeployed_toml(MUMBAI));

    let config = Config::load(&path).expect("config should load");
    let err = config
        .registry
        .get(MUMBAI)
        .and_then(|d| d.readers(MUMBAI))
        .expect_err("built-in deployment is unset");

    match err {
        Error::Config(ConfigError::UnsetAddress {
            chain_id: MUMBAI,
            contract: "fetcher",
        }) => {}
        other => panic!("Expected unset fetcher, got {other}"),
    }
}

#[test]
fn custom_chain_is_added_to_builtin_registry() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, &deployed_toml(31337));

    let config = Config::load(&path).expect("config should load");
    let chains: Vec<u64> = config.registry.chains().collect();

    assert_eq!(chains, vec![POLYGON, 31337, MUMBAI]);
    assert_eq!(config.network.chain_id, 31337);
}

#[test]
fn config_rejects_zero_timeout() {
    let toml = r#"
[network]
chain_id = 137
request_timeout_secs = 0
"#;
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, toml);

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "request_timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(_) => panic!("Expected invalid timeout error, got Ok"),
    }
}

#[test]
fn config_rejects_non_numeric_deployment_key() {
    let toml = r#"
[deployments.polygon]
fetcher = "0x00000000000000000000000000000000000000c4"
"#;
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, toml);

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "deployments",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid deployments key, got {err}"),
        Ok(_) => panic!("Expected invalid deployments key, got Ok"),
    }
}

#[test]
fn config_rejects_unknown_contract_name() {
    let toml = r#"
[deployments.137]
leverage_manager = "0x00000000000000000000000000000000000000c7"
"#;
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, toml);

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().expect("tempdir");

    assert!(matches!(
        Config::load(dir.path().join("absent.toml")),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn loading_ignores_process_environment_until_overrides_are_applied() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_temp_config(&dir, &deployed_toml(POLYGON));

    let loaded = Config::load(&path).expect("config should load");
    assert_eq!(loaded.network.chain_id, POLYGON);
    assert_eq!(loaded.network.rpc_url.as_deref(), Some("http://127.0.0.1:1"));

    let overridden = loaded
        .with_env_overrides(|key| match key {
            "VAULTSNAP_CHAIN_ID" => Some(MUMBAI.to_string()),
            _ => None,
        })
        .expect("override applies");
    assert_eq!(overridden.network.chain_id, MUMBAI);
    assert_eq!(overridden.network.rpc_url.as_deref(), Some("http://127.0.0.1:1"));
}
