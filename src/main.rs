//! cwpscan - fetch the scan list from a Prisma Cloud Compute console

use clap::Parser;
use log::error;

mod cli;
mod client;
mod config;
mod error;

use cli::{Cli, Commands};
use client::PrismaClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        error!("{}", err);
        std::process::exit(1);
    }
}

/// Log to stderr without timestamps. `RUST_LOG` overrides the default filter.
fn init_logging(debug: bool) {
    let default_filter = if debug {
        "warn,cwpscan=debug"
    } else {
        "warn,cwpscan=info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env(cli.insecure)?;

    match cli.command.unwrap_or(Commands::Scans) {
        Commands::Scans => {
            let client = PrismaClient::compute(&config)?;
            cli::scans::run(&config, &client).await?;
            Ok(())
        }
        Commands::Auth { platform } => cli::auth::run(&config, platform.into()).await,
    }
}
