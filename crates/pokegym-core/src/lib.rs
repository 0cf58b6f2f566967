//! Core domain models for pokegym
//!
//! This crate contains:
//! - Rarity tiers, ball types and per-tier box configuration
//! - Loot pools and the built-in loot table
//! - Catalog summaries and reward items produced by the pack engine

pub mod box_config;
pub mod error;
pub mod loot;
pub mod loot_table;
pub mod rarity;
pub mod reward;

pub use error::{Error, Result};
pub use loot::{LootPoolEntry, LootTable};
pub use rarity::{BallType, RarityConfig, RarityTier, VariantKind};
pub use reward::{PokemonSummary, RewardItem, Sprites, StatValue};
