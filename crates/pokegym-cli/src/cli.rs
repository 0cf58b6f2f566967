use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pokegym")]
#[command(about = "Open PokéGym reward packs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "POKEGYM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a pack and print its rewards
    Open(OpenArgs),

    /// Show theoretical odds for a box
    Odds(OddsArgs),

    /// List every reward a rarity tier can yield
    Preview(PreviewArgs),

    /// Roll many packs and report the observed distribution
    Simulate(SimulateArgs),

    /// Show the resolved configuration
    Config,
}

/// Options shared by every command that builds an engine
#[derive(Args, Clone, Default)]
pub struct EngineArgs {
    /// Ball type: poke, great, ultra or master (default from config)
    #[arg(long)]
    pub ball: Option<String>,

    /// Drop-rate buff, e.g. 0.25 for +25% (default from config)
    #[arg(long)]
    pub buff: Option<f64>,

    /// Custom box definition file (rarities and/or loot table)
    #[arg(long)]
    pub boxes: Option<PathBuf>,
}

#[derive(Args)]
pub struct OpenArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Number of items in the pack (default from config: 5)
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Seed for a reproducible pack
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use placeholder catalog data instead of PokeAPI
    #[arg(long)]
    pub offline: bool,

    /// Print rewards as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct OddsArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Include per-entry odds
    #[arg(long)]
    pub entries: bool,

    /// Print odds as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Rarity tier, e.g. common, ultra_rare, crown_rare
    pub rarity: String,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Use placeholder catalog data instead of PokeAPI
    #[arg(long)]
    pub offline: bool,

    /// Print the preview as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Items per pack (default from config: 5)
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Number of packs to roll
    #[arg(long, default_value = "10000")]
    pub packs: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
