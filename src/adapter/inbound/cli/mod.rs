//! CLI module graph and dispatch.

pub mod check;
pub mod command;
#[cfg(feature = "rpc")]
pub mod fetch;
pub mod output;
pub mod registry;

use std::path::Path;

use command::{CheckCommand, Commands, FetchCommand, RegistryCommand};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Load the config named on the command line, or `./config.toml` if it
/// exists, or built-in defaults, then apply `VAULTSNAP_*` overrides from the
/// process environment.
///
/// # Errors
///
/// Returns an error if an explicitly named file cannot be loaded, any
/// loaded file fails validation, or an override is malformed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::load(DEFAULT_CONFIG_PATH)?,
        None => Config::parse_toml("")?,
    };
    config.with_process_env()
}

/// Run a parsed command.
///
/// # Errors
///
/// Returns whatever the command handler returns.
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Fetch(cmd) => dispatch_fetch(cmd).await,
        Commands::Registry(RegistryCommand::Show(args)) => registry::execute_show(&args),
        Commands::Check(CheckCommand::Config(args)) => {
            check::execute_config(args.config.as_deref())
        }
    }
}

#[cfg(feature = "rpc")]
async fn dispatch_fetch(command: FetchCommand) -> Result<()> {
    match command {
        FetchCommand::Static(args) => fetch::execute_static(&args).await,
        FetchCommand::Dynamic(args) => fetch::execute_dynamic(&args).await,
    }
}

#[cfg(not(feature = "rpc"))]
async fn dispatch_fetch(_command: FetchCommand) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "fetching requires the rpc feature".to_string(),
    }
    .into())
}
