use std::path::Path;

use anyhow::Result;
use pokegym_config::Config;
use pokegym_engine::PackEngine;

use super::{catalog, engine_config};
use crate::cli::OddsArgs;

pub fn handle(args: OddsArgs, config: &Config, config_path: &Path) -> Result<()> {
    let engine_config = engine_config(&args.engine, config, config_path)?;
    // Odds never reach the catalog
    let catalog = catalog(config, &engine_config, true)?;
    let engine = PackEngine::new(engine_config, catalog);
    let odds = engine.get_odds();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&odds)?);
        return Ok(());
    }

    println!(
        "Odds (buff {:+.0}%, shiny 1 in {:.0}):",
        odds.buff * 100.0,
        1.0 / odds.shiny_chance
    );
    for tier in &odds.tiers {
        let mut limits = Vec::new();
        if let Some(slots) = tier.guaranteed_slots {
            limits.push(format!("{} guaranteed", slots));
        }
        if let Some(max) = tier.max_per_pack {
            limits.push(format!("max {}", max));
        }
        let limits = if limits.is_empty() {
            String::new()
        } else {
            format!(" ({})", limits.join(", "))
        };

        println!(
            "  {:<14} {:>8.3}%  {} ball{}",
            tier.label,
            tier.box_chance * 100.0,
            tier.ball_type,
            limits
        );

        if args.entries {
            for entry in &tier.entries {
                println!(
                    "      {:<28} {:>8.4}%",
                    entry.label,
                    entry.global_chance * 100.0
                );
            }
        }
    }
    println!("\nNote: guaranteed slots and caps are not reflected in these figures.");

    Ok(())
}
