pub mod config;
pub mod odds;
pub mod open;
pub mod preview;
pub mod simulate;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use pokegym_catalog::{Catalog, PokeApiCatalog, PokeApiConfig, StaticCatalog};
use pokegym_config::{BoxFile, Config};
use pokegym_core::{BallType, RewardItem};
use pokegym_engine::{EngineConfig, PackEngine, RandomSource, RngSource};

use crate::cli::EngineArgs;

/// Resolve flags over config and assemble the engine inputs
pub fn engine_config(args: &EngineArgs, config: &Config, config_path: &Path) -> Result<EngineConfig> {
    let ball = match &args.ball {
        Some(name) => name.parse::<BallType>()?,
        None => config.engine.ball,
    };
    let buff = args.buff.unwrap_or(config.engine.buff);

    let box_path = args.boxes.clone().or_else(|| config.box_file(config_path));
    let boxes = match box_path {
        Some(path) => BoxFile::load(&path)?,
        None => BoxFile::default(),
    };

    tracing::debug!(%ball, buff, custom_boxes = boxes.rarities.is_some(), "engine configuration");

    Ok(EngineConfig {
        loot_table: boxes.loot_table(),
        rarity_configs: boxes.rarity_configs(ball),
        buff,
    })
}

/// PokeAPI client, or placeholder data derived from the loot table
pub fn catalog(config: &Config, engine: &EngineConfig, offline: bool) -> Result<Arc<dyn Catalog>> {
    if offline {
        return Ok(Arc::new(StaticCatalog::from_loot_table(&engine.loot_table)));
    }

    let client = PokeApiCatalog::new(PokeApiConfig {
        base_url: config.catalog.base_url.clone(),
        timeout: Duration::from_secs(config.catalog.timeout_secs),
        user_agent: config.catalog.user_agent.clone(),
    })
    .context("Failed to set up the PokeAPI client")?;
    Ok(Arc::new(client))
}

pub fn build_engine(
    args: &EngineArgs,
    config: &Config,
    config_path: &Path,
    offline: bool,
) -> Result<PackEngine> {
    let engine_config = engine_config(args, config, config_path)?;
    let catalog = catalog(config, &engine_config, offline)?;
    Ok(PackEngine::new(engine_config, catalog))
}

pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource + Send> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    }
}

pub fn print_item(index: usize, item: &RewardItem) {
    let mut tags = Vec::new();
    if item.shiny {
        tags.push("✨ shiny".to_string());
    }
    if let Some(variant) = item.variant {
        tags.push(variant.to_string());
    }
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };

    println!(
        "  {:>2}. {:<28} {:<12} #{}{}",
        index + 1,
        item.label,
        item.rarity,
        item.pokemon.id,
        tags
    );
    if !item.pokemon.types.is_empty() {
        println!("      Types: {}", item.pokemon.types.join(", "));
    }
    if let Some(sprite) = item.sprite() {
        println!("      Sprite: {}", sprite);
    }
}
