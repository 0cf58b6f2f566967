//! Theoretical odds for display
//!
//! These figures come straight from the configured chances and pool sizes.
//! Guaranteed slots and per-pack caps are not reflected, so they differ from
//! the distribution `open_pack` actually produces for packs that use them.

use pokegym_core::{BallType, RarityTier, VariantKind};
use serde::Serialize;

use crate::PackEngine;

#[derive(Debug, Clone, Serialize)]
pub struct PackOdds {
    pub buff: f64,
    pub shiny_chance: f64,
    /// In declaration order
    pub tiers: Vec<TierOdds>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierOdds {
    pub rarity: RarityTier,
    pub label: String,
    pub ball_type: BallType,
    pub base_chance: f64,
    /// `chance × (1 + buff)`, may exceed 1
    pub boosted_chance: f64,
    /// Boosted chance clamped to 1, as used by the weighted roll
    pub box_chance: f64,
    pub guaranteed_slots: Option<usize>,
    pub max_per_pack: Option<usize>,
    pub entries: Vec<EntryOdds>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryOdds {
    pub id: String,
    pub label: String,
    pub species_id: u32,
    pub shiny: bool,
    pub variant: Option<VariantKind>,
    /// Chance of this entry once its tier is chosen
    pub internal_chance: f64,
    pub global_chance: f64,
}

impl PackOdds {
    pub fn tier(&self, rarity: RarityTier) -> Option<&TierOdds> {
        self.tiers.iter().find(|t| t.rarity == rarity)
    }
}

impl PackEngine {
    /// Per-tier and per-entry odds. Pure; no catalog lookups.
    pub fn get_odds(&self) -> PackOdds {
        let tiers = self
            .declaration_order
            .iter()
            .map(|config| {
                let boosted_chance = self.boosted_chance(config.chance);
                let box_chance = boosted_chance.min(1.0);
                let pool = self.loot_table.pool(config.id).unwrap_or_default();
                let internal_chance = if pool.is_empty() {
                    0.0
                } else {
                    1.0 / pool.len() as f64
                };

                let entries = pool
                    .iter()
                    .map(|entry| EntryOdds {
                        id: entry.id.clone(),
                        label: entry.label.clone(),
                        species_id: entry.species_id,
                        shiny: entry.shiny,
                        variant: entry.variant,
                        internal_chance,
                        global_chance: box_chance * internal_chance,
                    })
                    .collect();

                TierOdds {
                    rarity: config.id,
                    label: config.label.clone(),
                    ball_type: config.ball_type,
                    base_chance: config.chance,
                    boosted_chance,
                    box_chance,
                    guaranteed_slots: config.guaranteed_slots,
                    max_per_pack: config.max_per_pack,
                    entries,
                }
            })
            .collect();

        PackOdds {
            buff: self.buff,
            shiny_chance: self.shiny_chance(),
            tiers,
        }
    }
}
