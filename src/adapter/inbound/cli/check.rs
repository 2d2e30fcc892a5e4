//! Handler for `check config`.

use std::path::Path;

use serde_json::json;

use super::{load_config, output};
use crate::error::Result;

/// Execute `check config`.
///
/// Invalid configuration is an error. An incomplete deployment for the
/// target chain is only a warning, since the registry may legitimately
/// contain chains that have not been deployed to yet.
pub fn execute_config(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let chain_id = config.network.chain_id;
    let rpc_url = config.rpc_url()?;
    let readers = config
        .registry
        .get(chain_id)
        .and_then(|deployment| deployment.readers(chain_id));

    if output::is_json() {
        output::document(
            "check.config",
            json!({
                "valid": true,
                "chain_id": chain_id,
                "rpc_url": rpc_url.as_str(),
                "request_timeout_secs": config.network.request_timeout_secs,
                "deployment_ready": readers.is_ok(),
                "deployment_error": readers.as_ref().err().map(ToString::to_string),
            }),
        );
        return Ok(());
    }

    output::banner();
    output::section("Configuration");
    output::field("Chain ID", chain_id);
    output::field("RPC", &rpc_url);
    output::field("Timeout", format!("{}s", config.network.request_timeout_secs));
    output::field("Log level", &config.logging.level);
    output::success("Configuration is valid");

    match readers {
        Ok(_) => output::success("Deployment addresses are complete"),
        Err(e) => {
            output::warning(&e.to_string());
            output::note("Set it under [deployments.<chain_id>] before running fetch");
        }
    }
    Ok(())
}
