use std::path::Path;

use anyhow::Result;
use pokegym_config::Config;
use pokegym_core::RarityTier;

use super::{build_engine, random_source};
use crate::cli::SimulateArgs;

pub fn handle(args: SimulateArgs, config: &Config, config_path: &Path) -> Result<()> {
    // Simulation only rolls; the catalog is never consulted
    let engine = build_engine(&args.engine, config, config_path, true)?;
    let size = args.size.unwrap_or(config.engine.pack_size);
    let mut source = random_source(args.seed);

    let report = engine.simulate(size, args.packs, source.as_mut())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let odds = engine.get_odds();
    println!(
        "Simulated {} packs of {} ({} items, {} shiny)",
        report.packs, report.pack_size, report.items, report.shiny
    );
    println!("  {:<14} {:>10} {:>10} {:>10}", "rarity", "per pack", "observed", "listed");
    for tier in RarityTier::ALL {
        let Some(listed) = odds.tier(tier) else {
            continue;
        };
        println!(
            "  {:<14} {:>10.3} {:>9.3}% {:>9.3}%",
            tier.label(),
            report.per_pack(tier),
            report.frequency(tier) * 100.0,
            listed.box_chance * 100.0
        );
    }

    Ok(())
}
