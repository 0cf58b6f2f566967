//! Empirical tier distribution from repeated rolls

use std::collections::BTreeMap;

use pokegym_core::{RarityTier, Result};
use serde::Serialize;

use crate::{PackEngine, RandomSource};

#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationReport {
    pub packs: usize,
    pub pack_size: usize,
    pub items: usize,
    pub shiny: usize,
    pub tier_counts: BTreeMap<RarityTier, usize>,
}

impl SimulationReport {
    /// Share of all items that landed in `rarity`
    pub fn frequency(&self, rarity: RarityTier) -> f64 {
        if self.items == 0 {
            return 0.0;
        }
        self.tier_counts.get(&rarity).copied().unwrap_or(0) as f64 / self.items as f64
    }

    /// Average number of `rarity` items per pack
    pub fn per_pack(&self, rarity: RarityTier) -> f64 {
        if self.packs == 0 {
            return 0.0;
        }
        self.tier_counts.get(&rarity).copied().unwrap_or(0) as f64 / self.packs as f64
    }
}

impl PackEngine {
    /// Roll `packs` packs without resolving them against the catalog
    pub fn simulate<S>(
        &self,
        pack_size: usize,
        packs: usize,
        source: &mut S,
    ) -> Result<SimulationReport>
    where
        S: RandomSource + ?Sized,
    {
        let mut report = SimulationReport {
            packs,
            pack_size,
            ..Default::default()
        };

        for _ in 0..packs {
            for slot in self.roll_pack(pack_size, source)? {
                report.items += 1;
                if slot.shiny {
                    report.shiny += 1;
                }
                *report.tier_counts.entry(slot.rarity).or_default() += 1;
            }
        }

        tracing::debug!(packs, items = report.items, "simulation finished");
        Ok(report)
    }
}
