//! Handlers for `fetch static` and `fetch dynamic`.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::FetchArgs;
use super::{load_config, output};
use crate::adapter::outbound::chain::ChainProtocol;
use crate::domain::{DynamicSnapshot, Snapshot, StaticSnapshot, Timestamp};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct StaticVaultRow {
    #[tabled(rename = "Vault")]
    vault: u64,
    #[tabled(rename = "Markets")]
    markets: usize,
    #[tabled(rename = "Collateral")]
    collateral: String,
    #[tabled(rename = "Verified only")]
    only_verified: bool,
    #[tabled(rename = "Asset limit")]
    asset_limit: String,
    #[tabled(rename = "Total asset limit")]
    total_asset_limit: String,
}

#[derive(Tabled)]
struct DynamicVaultRow {
    #[tabled(rename = "Vault")]
    vault: u64,
    #[tabled(rename = "Total supply")]
    total_supply: String,
    #[tabled(rename = "Markets")]
    markets: usize,
    #[tabled(rename = "Assessment")]
    assessment: usize,
    #[tabled(rename = "Active")]
    active: usize,
    #[tabled(rename = "Resolved")]
    resolved: usize,
}

fn prepare(args: &FetchArgs) -> Result<(Config, ChainProtocol)> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(chain_id) = args.chain_id {
        config = config.with_chain_id(chain_id);
    }
    // Resolve addresses before logging starts so a bad deployment fails fast.
    let protocol = ChainProtocol::from_config(&config)?;
    config.init_logging();
    Ok((config, protocol))
}

fn write_snapshot<T: Serialize>(path: &Path, snapshot: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}

fn format_timestamp(timestamp: Option<Timestamp>) -> String {
    timestamp.map_or_else(|| "none".to_string(), |t| t.to_string())
}

fn emit<B: Serialize>(
    kind: &str,
    args: &FetchArgs,
    config: &Config,
    snapshot: &Snapshot<B>,
) -> Result<bool> {
    if let Some(path) = &args.out {
        write_snapshot(path, snapshot)?;
    }

    if output::is_json() {
        output::document(
            &format!("fetch.{kind}"),
            json!({
                "chain_id": config.network.chain_id,
                "snapshot": snapshot,
            }),
        );
        return Ok(false);
    }

    output::banner();
    output::section(&format!("{} snapshot", capitalize(kind)));
    output::field("Chain ID", config.network.chain_id);
    output::field("Vaults", snapshot.len());
    output::field("Timestamp", format_timestamp(snapshot.timestamp));
    if let Some(path) = &args.out {
        output::field("Written to", path.display());
    }

    if snapshot.is_empty() {
        output::note("No vaults deployed");
        return Ok(false);
    }
    Ok(!output::is_quiet())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn static_rows(snapshot: &StaticSnapshot) -> Vec<StaticVaultRow> {
    snapshot
        .bundles
        .iter()
        .map(|b| StaticVaultRow {
            vault: b.vault.vault_id.get(),
            markets: b.markets.len(),
            collateral: b.vault.collateral.symbol.clone(),
            only_verified: b.vault.only_verified,
            asset_limit: b.vault.asset_limit.to_string(),
            total_asset_limit: b.vault.total_asset_limit.to_string(),
        })
        .collect()
}

fn dynamic_rows(snapshot: &DynamicSnapshot) -> Vec<DynamicVaultRow> {
    snapshot
        .bundles
        .iter()
        .map(|b| {
            let count = |label: &str| b.markets.iter().filter(|m| m.phase.label() == label).count();
            DynamicVaultRow {
                vault: b.vault.vault_id.get(),
                total_supply: b.vault.total_supply.to_string(),
                markets: b.markets.len(),
                assessment: count("assessment"),
                active: count("active"),
                resolved: count("resolved"),
            }
        })
        .collect()
}

/// Execute `fetch static`.
pub async fn execute_static(args: &FetchArgs) -> Result<()> {
    let (config, protocol) = prepare(args)?;

    let pb = output::spinner("Fetching static snapshot");
    let snapshot = match protocol.aggregator().fetch_static().await {
        Ok(snapshot) => {
            output::finish_ok(&pb, "Static snapshot fetched");
            snapshot
        }
        Err(e) => {
            output::finish_err(&pb, "Static snapshot failed");
            return Err(e);
        }
    };

    if emit("static", args, &config, &snapshot)? {
        output::block(&Table::new(static_rows(&snapshot)).to_string());
    }
    Ok(())
}

/// Execute `fetch dynamic`.
pub async fn execute_dynamic(args: &FetchArgs) -> Result<()> {
    let (config, protocol) = prepare(args)?;

    let pb = output::spinner("Fetching dynamic snapshot");
    let snapshot = match protocol.aggregator().fetch_dynamic().await {
        Ok(snapshot) => {
            output::finish_ok(&pb, "Dynamic snapshot fetched");
            snapshot
        }
        Err(e) => {
            output::finish_err(&pb, "Dynamic snapshot failed");
            return Err(e);
        }
    };

    if emit("dynamic", args, &config, &snapshot)? {
        output::block(&Table::new(dynamic_rows(&snapshot)).to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::snapshot::{fetch_dynamic, fetch_static};
    use crate::port::ContractRef;
    use crate::testkit::domain::address;
    use crate::testkit::protocol::ScriptedProtocol;

    #[tokio::test]
    async fn static_rows_follow_vault_order() {
        let protocol = ScriptedProtocol::new().with_vaults(3).with_markets_per_vault(4);
        let controller = ContractRef::new(address(1));
        let market_manager = ContractRef::new(address(2));
        let snapshot = fetch_static(&protocol, &controller, &protocol, &market_manager)
            .await
            .expect("snapshot");

        let rows = static_rows(&snapshot);
        assert_eq!(rows.iter().map(|r| r.vault).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(rows.iter().all(|r| r.markets == 4));
        assert_eq!(rows[1].collateral, "USDC");
    }

    #[tokio::test]
    async fn dynamic_rows_count_markets_by_phase() {
        let protocol = ScriptedProtocol::new().with_vaults(1).with_markets_per_vault(3);
        let controller = ContractRef::new(address(1));
        let market_manager = ContractRef::new(address(2));
        let snapshot = fetch_dynamic(&protocol, &controller, &protocol, &market_manager)
            .await
            .expect("snapshot");

        let rows = dynamic_rows(&snapshot);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].markets, 3);
        assert_eq!(rows[0].active, 3);
        assert_eq!(rows[0].resolved, 0);
    }

    #[test]
    fn written_snapshot_is_pretty_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("snapshot.json");
        let snapshot: StaticSnapshot = Snapshot::empty();

        write_snapshot(&path, &snapshot).expect("write");

        let written = fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&written).expect("json");
        assert_eq!(value["bundles"], json!([]));
        assert_eq!(value["timestamp"], serde_json::Value::Null);
    }

    #[test]
    fn missing_timestamp_is_rendered_as_none() {
        assert_eq!(format_timestamp(None), "none");
    }
}
