mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use pokegym_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize tracing; stay quiet unless asked so command output is clean
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    match cli.command {
        cli::Commands::Open(args) => commands::open::handle(args, &config, &config_path).await,
        cli::Commands::Odds(args) => commands::odds::handle(args, &config, &config_path),
        cli::Commands::Preview(args) => {
            commands::preview::handle(args, &config, &config_path).await
        }
        cli::Commands::Simulate(args) => commands::simulate::handle(args, &config, &config_path),
        cli::Commands::Config => commands::config::handle(&config, &config_path),
    }
}
