//! Canonical test configurations.
//!
//! Single source of truth for config files used across tests.

/// Config with every contract deployed on `chain_id` and an unreachable RPC
/// endpoint, so nothing accidentally talks to a real node.
pub fn deployed_toml(chain_id: u64) -> String {
    format!(
        r#"
[network]
chain_id = {chain_id}
rpc_url = "http://127.0.0.1:1"
request_timeout_secs = 1

[logging]
level = "warn"
format = "pretty"

[deployments.{chain_id}]
controller = "0x00000000000000000000000000000000000000c1"
market_manager = "0x00000000000000000000000000000000000000c2"
vault_factory = "0x00000000000000000000000000000000000000c3"
fetcher = "0x00000000000000000000000000000000000000c4"
reputation_token = "0x00000000000000000000000000000000000000c5"
synthetic_zcb_factory = "0x00000000000000000000000000000000000000c6"
"#
    )
}

/// Config that only sets the network; every built-in deployment is unset.
pub fn undeployed_toml(chain_id: u64) -> String {
    format!(
        r#"
[network]
chain_id = {chain_id}

[logging]
level = "warn"
format = "pretty"
"#
    )
}
