use clap::Parser;
use tokio::signal;
use vaultsnap::adapter::inbound::cli::command::Cli;
use vaultsnap::adapter::inbound::cli::dispatch;
use vaultsnap::adapter::inbound::cli::output::{self, OutputMode};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::set_mode(OutputMode::from_flags(cli.json, cli.quiet));

    tokio::select! {
        result = dispatch(cli.command) => {
            if let Err(e) = result {
                output::error(&e.to_string());
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            output::error("interrupted");
            std::process::exit(130);
        }
    }
}
