//! In-memory catalog

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pokegym_core::{Error, LootTable, PokemonSummary, Result, Sprites};

use crate::Catalog;

/// Catalog serving a fixed set of summaries.
///
/// Used for offline pack openings and as a test double: it counts every
/// fetch and can be told to fail for specific ids.
#[derive(Default)]
pub struct StaticCatalog {
    pokemon: HashMap<u32, PokemonSummary>,
    failing: HashSet<u32>,
    fetches: AtomicUsize,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// One placeholder summary per species referenced by the loot table
    pub fn from_loot_table(table: &LootTable) -> Self {
        let mut catalog = Self::new();
        for tier in table.tiers() {
            for entry in table.pool(tier).unwrap_or_default() {
                catalog
                    .pokemon
                    .entry(entry.species_id)
                    .or_insert_with(|| placeholder(entry.species_id, &entry.id));
            }
        }
        catalog
    }

    pub fn with_pokemon(mut self, summary: PokemonSummary) -> Self {
        self.pokemon.insert(summary.id, summary);
        self
    }

    pub fn with_species(self, species_id: u32, name: &str) -> Self {
        self.with_pokemon(placeholder(species_id, name))
    }

    /// Make lookups for `species_id` fail with a catalog error
    pub fn failing_on(mut self, species_id: u32) -> Self {
        self.failing.insert(species_id);
        self
    }

    /// Number of lookups served so far, including failed ones
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

fn placeholder(species_id: u32, name: &str) -> PokemonSummary {
    PokemonSummary {
        id: species_id,
        name: name.to_string(),
        sprites: Sprites::default(),
        types: Vec::new(),
        stats: Vec::new(),
        height: 0,
        weight: 0,
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn fetch_pokemon(&self, species_id: u32) -> Result<PokemonSummary> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&species_id) {
            return Err(Error::Catalog {
                species_id,
                message: "catalog unavailable".to_string(),
            });
        }

        self.pokemon
            .get(&species_id)
            .cloned()
            .ok_or(Error::PokemonNotFound(species_id))
    }
}
