use std::path::Path;

use anyhow::Result;
use pokegym_config::Config;
use pokegym_core::RarityTier;

use super::{build_engine, print_item};
use crate::cli::PreviewArgs;

pub async fn handle(args: PreviewArgs, config: &Config, config_path: &Path) -> Result<()> {
    let rarity: RarityTier = args.rarity.parse()?;
    let engine = build_engine(&args.engine, config, config_path, args.offline)?;
    let items = engine.get_preview(rarity).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{} ({} possible rewards):", rarity.label(), items.len());
    for (index, item) in items.iter().enumerate() {
        print_item(index, item);
    }

    Ok(())
}
