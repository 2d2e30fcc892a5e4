//! Handler for `registry show`.

use serde_json::json;

use super::command::RegistryShowArgs;
use super::{load_config, output};
use crate::error::Result;
use crate::infrastructure::config::registry::{default_rpc_url, MUMBAI, POLYGON};

fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        POLYGON => "polygon",
        MUMBAI => "mumbai",
        _ => "custom",
    }
}

/// Execute `registry show`.
pub fn execute_show(args: &RegistryShowArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let registry = &config.registry;

    let chains: Vec<u64> = match args.chain_id {
        Some(chain_id) => {
            registry.get(chain_id)?;
            vec![chain_id]
        }
        None => registry.chains().collect(),
    };

    if output::is_json() {
        let mut entries = Vec::with_capacity(chains.len());
        for chain_id in &chains {
            let deployment = registry.get(*chain_id)?;
            let contracts: serde_json::Map<String, serde_json::Value> = deployment
                .contracts()
                .into_iter()
                .map(|(name, address)| (name.to_string(), output::address_json(address)))
                .collect();
            entries.push(json!({
                "chain_id": chain_id,
                "name": chain_name(*chain_id),
                "default_rpc_url": default_rpc_url(*chain_id),
                "contracts": contracts,
            }));
        }
        output::document("registry.show", json!({ "chains": entries }));
        return Ok(());
    }

    output::banner();
    for chain_id in chains {
        let deployment = registry.get(chain_id)?;
        output::section(&format!("Chain {chain_id} ({})", chain_name(chain_id)));
        for (name, address) in deployment.contracts() {
            output::field(name, output::address(address));
        }
    }
    Ok(())
}
