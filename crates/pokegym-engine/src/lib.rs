//! Pack-opening reward engine
//!
//! A [`PackEngine`] turns a pack size into a list of rewards. Selection is
//! synchronous and driven by a [`RandomSource`]; resolution then looks every
//! pick up in the catalog through a per-engine cache.

pub mod odds;
pub mod random;
pub mod simulate;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use pokegym_catalog::{CachedCatalog, Catalog};
use pokegym_core::box_config::{default_rarity_configs, rarity_configs};
use pokegym_core::loot_table::default_loot_table;
use pokegym_core::{
    BallType, Error, LootPoolEntry, LootTable, RarityConfig, RarityTier, Result, RewardItem,
};

pub use odds::{EntryOdds, PackOdds, TierOdds};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use simulate::SimulationReport;

/// Base shiny rate before buffs
pub const SHINY_BASE_RATE: f64 = 1.0 / 4096.0;

/// Inputs fixed for the lifetime of an engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub loot_table: LootTable,
    /// Declaration order matters: guarantees and cap fallback follow it
    pub rarity_configs: Vec<RarityConfig>,
    /// Fractional boost applied to tier chances and the shiny rate
    pub buff: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            loot_table: default_loot_table(),
            rarity_configs: default_rarity_configs(),
            buff: 0.0,
        }
    }
}

impl EngineConfig {
    /// Built-in loot table with the built-in box for `ball`
    pub fn for_ball(ball: BallType) -> Self {
        Self {
            rarity_configs: rarity_configs(ball),
            ..Self::default()
        }
    }

    pub fn with_buff(mut self, buff: f64) -> Self {
        self.buff = buff;
        self
    }

    pub fn with_loot_table(mut self, loot_table: LootTable) -> Self {
        self.loot_table = loot_table;
        self
    }

    pub fn with_rarity_configs(mut self, rarity_configs: Vec<RarityConfig>) -> Self {
        self.rarity_configs = rarity_configs;
        self
    }
}

/// Result of the selection phase for one slot, before catalog resolution
#[derive(Debug, Clone, PartialEq)]
pub struct RolledSlot {
    pub rarity: RarityTier,
    pub entry: LootPoolEntry,
    pub shiny: bool,
    /// Filled by the guaranteed-slot pass rather than a weighted roll
    pub guaranteed: bool,
}

pub struct PackEngine {
    loot_table: LootTable,
    declaration_order: Vec<RarityConfig>,
    /// Indices into `declaration_order`, by chance descending (stable)
    roll_order: Vec<usize>,
    buff: f64,
    catalog: CachedCatalog,
}

impl PackEngine {
    /// Build an engine. Performs no I/O.
    pub fn new(config: EngineConfig, catalog: Arc<dyn Catalog>) -> Self {
        let buff = if config.buff.is_finite() && config.buff >= 0.0 {
            config.buff
        } else {
            tracing::warn!(buff = config.buff, "invalid buff, using 0");
            0.0
        };

        let declaration_order = config.rarity_configs;
        let mut roll_order: Vec<usize> = (0..declaration_order.len()).collect();
        roll_order.sort_by(|&a, &b| {
            declaration_order[b]
                .chance
                .partial_cmp(&declaration_order[a].chance)
                .unwrap_or(Ordering::Equal)
        });

        Self {
            loot_table: config.loot_table,
            declaration_order,
            roll_order,
            buff,
            catalog: CachedCatalog::new(catalog),
        }
    }

    pub fn with_defaults(catalog: Arc<dyn Catalog>) -> Self {
        Self::new(EngineConfig::default(), catalog)
    }

    pub fn buff(&self) -> f64 {
        self.buff
    }

    pub fn loot_table(&self) -> &LootTable {
        &self.loot_table
    }

    /// Rarity configs as declared
    pub fn rarity_configs(&self) -> &[RarityConfig] {
        &self.declaration_order
    }

    /// Rarity configs in the order the weighted roll walks them
    pub fn roll_order(&self) -> impl Iterator<Item = &RarityConfig> + '_ {
        self.roll_order.iter().map(|&i| &self.declaration_order[i])
    }

    /// Number of species held in this engine's catalog cache
    pub fn cached_species(&self) -> usize {
        self.catalog.len()
    }

    /// Tier chance with the buff applied, unclamped
    pub fn boosted_chance(&self, chance: f64) -> f64 {
        chance * (1.0 + self.buff)
    }

    pub fn shiny_chance(&self) -> f64 {
        (SHINY_BASE_RATE * (1.0 + self.buff)).min(1.0)
    }

    /// Open a pack using fresh entropy
    pub async fn open_pack(&self, pack_size: usize) -> Result<Vec<RewardItem>> {
        let slots = {
            let mut source = RngSource::from_entropy();
            self.roll_pack(pack_size, &mut source)?
        };
        self.resolve(slots).await
    }

    /// Open a pack drawing from `source`
    pub async fn open_pack_with<S>(&self, pack_size: usize, source: &mut S) -> Result<Vec<RewardItem>>
    where
        S: RandomSource + ?Sized,
    {
        let slots = self.roll_pack(pack_size, source)?;
        self.resolve(slots).await
    }

    /// Decide tier, entry and shiny flag for every slot without touching
    /// the catalog.
    pub fn roll_pack<S>(&self, pack_size: usize, source: &mut S) -> Result<Vec<RolledSlot>>
    where
        S: RandomSource + ?Sized,
    {
        if pack_size == 0 {
            return Err(Error::InvalidPackSize(pack_size));
        }

        let mut picks: Vec<(RarityTier, LootPoolEntry, bool)> = Vec::new();
        let mut counts: HashMap<RarityTier, usize> = HashMap::new();

        // Guaranteed slots, earlier tiers first
        'guaranteed: for config in &self.declaration_order {
            let Some(slots) = config.guaranteed_slots else {
                continue;
            };
            for _ in 0..slots {
                if picks.len() >= pack_size {
                    break 'guaranteed;
                }
                let entry = self.draw(config.id, source)?;
                tracing::debug!(slot = picks.len(), rarity = %config.id, entry = %entry.id, "guaranteed slot");
                *counts.entry(config.id).or_default() += 1;
                picks.push((config.id, entry, true));
            }
        }

        // Weighted rolls for whatever is left
        while picks.len() < pack_size {
            let candidate = self.roll_tier(source);
            let tier = self.apply_cap(candidate, &counts);
            let entry = self.draw(tier, source)?;
            tracing::debug!(
                slot = picks.len(),
                rolled = %candidate,
                rarity = %tier,
                entry = %entry.id,
                "random slot"
            );
            *counts.entry(tier).or_default() += 1;
            picks.push((tier, entry, false));
        }

        let slots = picks
            .into_iter()
            .map(|(rarity, entry, guaranteed)| {
                let rolled_shiny = self.roll_for_shiny(source);
                RolledSlot {
                    rarity,
                    shiny: entry.shiny || rolled_shiny,
                    entry,
                    guaranteed,
                }
            })
            .collect();

        Ok(slots)
    }

    /// Look every slot up in the catalog, in slot order
    pub async fn resolve(&self, slots: Vec<RolledSlot>) -> Result<Vec<RewardItem>> {
        let mut items = Vec::with_capacity(slots.len());
        for slot in slots {
            let pokemon = self.catalog.get(slot.entry.species_id).await?;
            items.push(RewardItem::new(pokemon, &slot.entry, slot.rarity, slot.shiny));
        }

        tracing::info!(
            items = items.len(),
            shiny = items.iter().filter(|i| i.shiny).count(),
            "pack opened"
        );
        Ok(items)
    }

    /// Every entry of a tier's pool, resolved, in pool order, never shiny
    pub async fn get_preview(&self, rarity: RarityTier) -> Result<Vec<RewardItem>> {
        let pool = self
            .loot_table
            .pool(rarity)
            .ok_or(Error::TierNotConfigured(rarity))?;
        if pool.is_empty() {
            return Err(Error::EmptyPool(rarity));
        }

        let mut items = Vec::with_capacity(pool.len());
        for entry in pool {
            let pokemon = self.catalog.get(entry.species_id).await?;
            items.push(RewardItem::new(pokemon, entry, rarity, false));
        }
        Ok(items)
    }

    /// Weighted roll over `roll_order`. Falls back to common when the
    /// buffed chances do not cover the draw.
    fn roll_tier<S: RandomSource + ?Sized>(&self, source: &mut S) -> RarityTier {
        let roll = source.next_f64();
        let mut cumulative = 0.0;
        for config in self.roll_order() {
            cumulative += self.boosted_chance(config.chance).min(1.0);
            if cumulative >= roll {
                return config.id;
            }
        }
        RarityTier::Common
    }

    /// Walk declaration order from `candidate` to the first tier under its
    /// cap; common when every later tier is full.
    fn apply_cap(&self, candidate: RarityTier, counts: &HashMap<RarityTier, usize>) -> RarityTier {
        let Some(start) = self
            .declaration_order
            .iter()
            .position(|config| config.id == candidate)
        else {
            return RarityTier::Common;
        };

        self.declaration_order[start..]
            .iter()
            .find(|config| config.has_capacity(counts.get(&config.id).copied().unwrap_or(0)))
            .map(|config| config.id)
            .unwrap_or(RarityTier::Common)
    }

    fn draw<S: RandomSource + ?Sized>(&self, tier: RarityTier, source: &mut S) -> Result<LootPoolEntry> {
        let pool = self.loot_table.pool(tier).unwrap_or_default();
        if pool.is_empty() {
            return Err(Error::EmptyPool(tier));
        }
        Ok(pool[source.pick(pool.len())].clone())
    }

    fn roll_for_shiny<S: RandomSource + ?Sized>(&self, source: &mut S) -> bool {
        source.next_f64() < self.shiny_chance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokegym_catalog::StaticCatalog;

    fn catalog() -> Arc<StaticCatalog> {
        Arc::new(StaticCatalog::from_loot_table(&default_loot_table()))
    }

    fn engine(config: EngineConfig) -> PackEngine {
        PackEngine::new(config, catalog())
    }

    fn count(items: &[RewardItem], tier: RarityTier) -> usize {
        items.iter().filter(|i| i.rarity == tier).count()
    }

    fn single_entry_table(tiers: &[(RarityTier, u32)]) -> LootTable {
        tiers
            .iter()
            .map(|&(tier, species)| {
                (
                    tier,
                    vec![LootPoolEntry::new(format!("{tier}_{species}"), tier.label(), species)],
                )
            })
            .collect()
    }

    #[test]
    fn test_roll_order_is_chance_descending_and_stable() {
        let configs = vec![
            RarityConfig::new(RarityTier::Rare, 0.2, BallType::Great),
            RarityConfig::new(RarityTier::Common, 0.5, BallType::Poke),
            RarityConfig::new(RarityTier::Uncommon, 0.2, BallType::Poke),
        ];
        let engine = engine(EngineConfig::default().with_rarity_configs(configs));

        let rolled: Vec<_> = engine.roll_order().map(|c| c.id).collect();
        assert_eq!(
            rolled,
            vec![RarityTier::Common, RarityTier::Rare, RarityTier::Uncommon]
        );
        let declared: Vec<_> = engine.rarity_configs().iter().map(|c| c.id).collect();
        assert_eq!(
            declared,
            vec![RarityTier::Rare, RarityTier::Common, RarityTier::Uncommon]
        );
    }

    #[test]
    fn test_invalid_buff_is_zeroed() {
        assert_eq!(engine(EngineConfig::default().with_buff(-0.5)).buff(), 0.0);
        assert_eq!(engine(EngineConfig::default().with_buff(f64::NAN)).buff(), 0.0);
        assert_eq!(engine(EngineConfig::default().with_buff(0.25)).buff(), 0.25);
    }

    #[test]
    fn test_zero_pack_size_rejected() {
        let engine = engine(EngineConfig::default());
        let mut source = RngSource::seeded(1);
        assert!(matches!(
            engine.roll_pack(0, &mut source),
            Err(Error::InvalidPackSize(0))
        ));
    }

    #[test]
    fn test_huge_pack_size_fails_without_preallocating() {
        let table = LootTable::new().with_pool(RarityTier::Common, Vec::new());
        let engine = engine(EngineConfig::default().with_loot_table(table));
        let mut source = RngSource::seeded(1);
        assert!(matches!(
            engine.roll_pack(usize::MAX, &mut source),
            Err(Error::EmptyPool(RarityTier::Common))
        ));
    }

    #[tokio::test]
    async fn test_poke_ball_pack_has_three_commons() {
        let engine = engine(EngineConfig::for_ball(BallType::Poke));
        for seed in 0..50 {
            let mut source = RngSource::seeded(seed);
            let items = engine.open_pack_with(5, &mut source).await.unwrap();
            assert_eq!(items.len(), 5);
            assert_eq!(count(&items, RarityTier::Common), 3);
            // Common always wins the roll; the cap pushes the rest forward
            assert_eq!(count(&items, RarityTier::Uncommon), 2);
        }
    }

    #[tokio::test]
    async fn test_master_ball_single_slot_is_ultra_rare() {
        let engine = engine(EngineConfig::for_ball(BallType::Master));
        let mut source = RngSource::seeded(7);
        let items = engine.open_pack_with(1, &mut source).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rarity, RarityTier::UltraRare);
    }

    #[test]
    fn test_guarantees_truncate_in_declaration_order() {
        // Great ball guarantees two commons then one uncommon
        let engine = engine(EngineConfig::for_ball(BallType::Great));
        let mut source = RngSource::seeded(3);
        let slots = engine.roll_pack(2, &mut source).unwrap();
        assert!(slots.iter().all(|s| s.guaranteed && s.rarity == RarityTier::Common));
    }

    #[test]
    fn test_scripted_roll_and_cap_fallback() {
        let configs = vec![
            RarityConfig::new(RarityTier::Common, 0.5, BallType::Poke),
            RarityConfig::new(RarityTier::Rare, 0.3, BallType::Great).with_max_per_pack(1),
            RarityConfig::new(RarityTier::UltraRare, 0.2, BallType::Great),
        ];
        let table = LootTable::new()
            .with_pool(RarityTier::Common, vec![LootPoolEntry::new("pidgey", "Pidgey", 16)])
            .with_pool(
                RarityTier::Rare,
                vec![
                    LootPoolEntry::new("bulbasaur", "Bulbasaur", 1),
                    LootPoolEntry::new("charmander", "Charmander", 4),
                ],
            )
            .with_pool(
                RarityTier::UltraRare,
                vec![
                    LootPoolEntry::new("dragonite", "Dragonite", 149),
                    LootPoolEntry::new("gengar", "Gengar", 94),
                ],
            );
        let engine = engine(
            EngineConfig::default()
                .with_rarity_configs(configs)
                .with_loot_table(table),
        );

        // roll, pick, roll, pick, roll, pick, then three shiny rolls
        let mut source =
            SequenceSource::new(vec![0.6, 0.0, 0.7, 0.99, 0.1, 0.0, 0.5, 0.5, 0.5]);
        let slots = engine.roll_pack(3, &mut source).unwrap();

        let picked: Vec<(RarityTier, &str)> = slots
            .iter()
            .map(|s| (s.rarity, s.entry.id.as_str()))
            .collect();
        assert_eq!(
            picked,
            vec![
                (RarityTier::Rare, "bulbasaur"),
                // rare is capped; the next declared tier takes the slot
                (RarityTier::UltraRare, "gengar"),
                (RarityTier::Common, "pidgey"),
            ]
        );
        assert!(slots.iter().all(|s| !s.shiny && !s.guaranteed));
        assert_eq!(source.consumed(), 9);
    }

    #[test]
    fn test_exhausted_fallback_lands_on_common() {
        let configs = vec![
            RarityConfig::new(RarityTier::Common, 0.5, BallType::Poke).with_max_per_pack(1),
            RarityConfig::new(RarityTier::Rare, 0.5, BallType::Great).with_max_per_pack(1),
        ];
        let engine = engine(
            EngineConfig::default()
                .with_rarity_configs(configs)
                .with_loot_table(single_entry_table(&[
                    (RarityTier::Common, 16),
                    (RarityTier::Rare, 1),
                ])),
        );

        // Every roll lands on rare
        let mut source = SequenceSource::new(vec![0.9]);
        let slots = engine.roll_pack(3, &mut source).unwrap();
        let tiers: Vec<_> = slots.iter().map(|s| s.rarity).collect();
        assert_eq!(
            tiers,
            vec![RarityTier::Rare, RarityTier::Common, RarityTier::Common]
        );
    }

    #[test]
    fn test_uncovered_roll_defaults_to_common() {
        let configs = vec![
            RarityConfig::new(RarityTier::Rare, 0.1, BallType::Great),
            RarityConfig::new(RarityTier::Common, 0.1, BallType::Poke),
        ];
        let engine = engine(
            EngineConfig::default()
                .with_rarity_configs(configs)
                .with_loot_table(single_entry_table(&[
                    (RarityTier::Common, 16),
                    (RarityTier::Rare, 1),
                ])),
        );
        let mut source = SequenceSource::new(vec![0.95, 0.0, 0.5]);
        let slots = engine.roll_pack(1, &mut source).unwrap();
        assert_eq!(slots[0].rarity, RarityTier::Common);
    }

    #[test]
    fn test_preflagged_entry_is_always_shiny() {
        let table = LootTable::new().with_pool(
            RarityTier::Common,
            vec![LootPoolEntry::new("mew_shiny", "Shiny Mew", 151).shiny()],
        );
        let configs = vec![RarityConfig::new(RarityTier::Common, 1.0, BallType::Poke)];
        let engine = engine(
            EngineConfig::default()
                .with_rarity_configs(configs)
                .with_loot_table(table),
        );
        let mut source = SequenceSource::new(vec![0.5]);
        let slots = engine.roll_pack(2, &mut source).unwrap();
        assert!(slots.iter().all(|s| s.shiny));
    }

    #[test]
    fn test_shiny_roll_uses_buffed_rate() {
        let configs = vec![RarityConfig::new(RarityTier::Common, 1.0, BallType::Poke)];
        let table = single_entry_table(&[(RarityTier::Common, 16)]);
        let base = engine(
            EngineConfig::default()
                .with_rarity_configs(configs.clone())
                .with_loot_table(table.clone()),
        );
        let buffed = engine(
            EngineConfig::default()
                .with_rarity_configs(configs)
                .with_loot_table(table)
                .with_buff(1.0),
        );

        // roll, pick, shiny roll just above the base rate
        let draw = SHINY_BASE_RATE * 1.5;
        let mut source = SequenceSource::new(vec![0.5, 0.0, draw]);
        assert!(!base.roll_pack(1, &mut source).unwrap()[0].shiny);

        let mut source = SequenceSource::new(vec![0.5, 0.0, draw]);
        assert!(buffed.roll_pack(1, &mut source).unwrap()[0].shiny);
        assert_eq!(buffed.shiny_chance(), 2.0 / 4096.0);
    }
}
