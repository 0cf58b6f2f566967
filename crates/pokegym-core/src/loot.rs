//! Loot pools keyed by rarity tier

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rarity::{RarityTier, VariantKind};

/// A candidate reward inside one tier's pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootPoolEntry {
    pub id: String,
    pub label: String,
    /// Numeric key into the external catalog (national dex / form id)
    pub species_id: u32,
    /// Entry is always awarded shiny
    #[serde(default)]
    pub shiny: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantKind>,
}

impl LootPoolEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, species_id: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            species_id,
            shiny: false,
            variant: None,
        }
    }

    pub fn shiny(mut self) -> Self {
        self.shiny = true;
        self
    }

    pub fn with_variant(mut self, variant: VariantKind) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// Mapping from rarity tier to its pool of candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LootTable(BTreeMap<RarityTier, Vec<LootPoolEntry>>);

impl LootTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Pool for a tier, `None` when the tier is absent from the table
    pub fn pool(&self, tier: RarityTier) -> Option<&[LootPoolEntry]> {
        self.0.get(&tier).map(Vec::as_slice)
    }

    pub fn contains(&self, tier: RarityTier) -> bool {
        self.0.contains_key(&tier)
    }

    /// Replace the pool for a tier, returning the previous one
    pub fn with_pool(mut self, tier: RarityTier, entries: Vec<LootPoolEntry>) -> Self {
        self.0.insert(tier, entries);
        self
    }

    pub fn tiers(&self) -> impl Iterator<Item = RarityTier> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(RarityTier, Vec<LootPoolEntry>)> for LootTable {
    fn from_iter<I: IntoIterator<Item = (RarityTier, Vec<LootPoolEntry>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_lookup() {
        let table = LootTable::new()
            .with_pool(
                RarityTier::Common,
                vec![LootPoolEntry::new("pidgey", "Pidgey", 16)],
            )
            .with_pool(RarityTier::Rare, Vec::new());

        assert_eq!(table.pool(RarityTier::Common).unwrap().len(), 1);
        assert!(table.pool(RarityTier::Rare).unwrap().is_empty());
        assert!(table.pool(RarityTier::CrownRare).is_none());
        assert!(table.contains(RarityTier::Rare));
    }

    #[test]
    fn test_table_from_toml() {
        let toml_str = r#"
            common = [
                { id = "rattata", label = "Rattata", species_id = 19 },
            ]
            hyper_rare = [
                { id = "charizard_gmax", label = "Gigantamax Charizard", species_id = 10196, variant = "gmax", shiny = true },
            ]
        "#;
        let table: LootTable = toml::from_str(toml_str).unwrap();

        let hyper = table.pool(RarityTier::HyperRare).unwrap();
        assert_eq!(hyper[0].variant, Some(VariantKind::Gmax));
        assert!(hyper[0].shiny);
        assert!(!table.pool(RarityTier::Common).unwrap()[0].shiny);
    }
}
