use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use vaultsnap::testkit::config::{deployed_toml, undeployed_toml};

/// The binary, run from an empty directory so no stray `config.toml` or
/// `.env` is picked up.
fn vaultsnap(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("vaultsnap");
    cmd.current_dir(dir.path())
        .env_remove("VAULTSNAP_RPC_URL")
        .env_remove("VAULTSNAP_CHAIN_ID")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("vaultsnap.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().expect("tempdir");
    vaultsnap(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("registry"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag_prints_package_version() {
    let dir = TempDir::new().expect("tempdir");
    vaultsnap(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn registry_show_json_lists_builtin_chains() {
    let dir = TempDir::new().expect("tempdir");
    let output = vaultsnap(&dir)
        .args(["registry", "show", "--json"])
        .output()
        .expect("run vaultsnap");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["command"], "registry.show");
    let chains: Vec<u64> = value["chains"]
        .as_array()
        .expect("chains array")
        .iter()
        .filter_map(|c| c["chain_id"].as_u64())
        .collect();
    assert_eq!(chains, vec![137, 80001]);
    assert!(value["chains"][0]["contracts"]["fetcher"].is_null());
}

#[test]
fn registry_show_unknown_chain_fails() {
    let dir = TempDir::new().expect("tempdir");
    vaultsnap(&dir)
        .args(["registry", "show", "--chain-id", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no deployment registered for chain 5"));
}

#[test]
fn check_config_accepts_deployed_config() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, &deployed_toml(137));

    let output = vaultsnap(&dir)
        .args(["check", "config", "--json", "--config"])
        .arg(&path)
        .output()
        .expect("run vaultsnap");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["valid"], true);
    assert_eq!(value["deployment_ready"], true);
}

#[test]
fn check_config_rejects_invalid_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[network]\nrequest_timeout_secs = 0\n");

    vaultsnap(&dir)
        .args(["check", "config", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("request_timeout_secs"));
}

#[test]
fn fetch_fails_before_network_when_fetcher_unset() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, &undeployed_toml(137));

    vaultsnap(&dir)
        .args(["fetch", "static", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetcher address is not set"));
}

#[test]
fn fetch_against_unreachable_node_fails_without_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, &deployed_toml(137));
    let out = dir.path().join("snapshot.json");

    vaultsnap(&dir)
        .args(["fetch", "dynamic", "--quiet", "--config"])
        .arg(&path)
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .code(1);

    assert!(!out.exists());
}

#[test]
fn chain_id_from_environment_overrides_default() {
    let dir = TempDir::new().expect("tempdir");
    let output = vaultsnap(&dir)
        .env("VAULTSNAP_CHAIN_ID", "80001")
        .args(["check", "config", "--json"])
        .output()
        .expect("run vaultsnap");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["chain_id"], 80001);
    assert_eq!(value["rpc_url"], "https://rpc-mumbai.maticvigil.com/");
}

#[test]
fn rpc_url_from_environment_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, &deployed_toml(137));

    let output = vaultsnap(&dir)
        .env("VAULTSNAP_RPC_URL", "http://localhost:8545")
        .args(["check", "config", "--json", "--config"])
        .arg(&path)
        .output()
        .expect("run vaultsnap");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["rpc_url"], "http://localhost:8545/");
}

#[test]
fn non_numeric_chain_id_in_environment_fails() {
    let dir = TempDir::new().expect("tempdir");
    vaultsnap(&dir)
        .env("VAULTSNAP_CHAIN_ID", "polygon")
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for chain_id"));
}
