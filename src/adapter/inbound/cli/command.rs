//! `clap` definitions for the `vaultsnap` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Snapshot on-chain vault and market state
#[derive(Parser, Debug)]
#[command(name = "vaultsnap")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a snapshot of every vault and market
    #[command(subcommand)]
    Fetch(FetchCommand),

    /// Inspect the deployed-address registry
    #[command(subcommand)]
    Registry(RegistryCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `vaultsnap fetch`.
#[derive(Subcommand, Debug)]
pub enum FetchCommand {
    /// Slow-changing configuration: parameters, collateral, market tokens
    Static(FetchArgs),
    /// Volatile state: supplies, phases, instruments
    Dynamic(FetchArgs),
}

/// Subcommands for `vaultsnap registry`.
#[derive(Subcommand, Debug)]
pub enum RegistryCommand {
    /// Print contract addresses per chain
    Show(RegistryShowArgs),
}

/// Subcommands for `vaultsnap check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Load and validate the configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `fetch static` and `fetch dynamic`.
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override chain ID (137=Polygon, 80001=Mumbai)
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Also write the full snapshot as pretty JSON to this file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `registry show`.
#[derive(Parser, Debug)]
pub struct RegistryShowArgs {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only show this chain
    #[arg(long)]
    pub chain_id: Option<u64>,
}
