//! Built-in loot table
//!
//! Species ids follow the public national dex numbering. Alternate forms
//! (mega, gigantamax, regional) use the catalog's 10000+ form ids.

use crate::loot::{LootPoolEntry, LootTable};
use crate::rarity::{RarityTier, VariantKind};

fn entry(id: &str, label: &str, species_id: u32) -> LootPoolEntry {
    LootPoolEntry::new(id, label, species_id)
}

pub fn default_loot_table() -> LootTable {
    use RarityTier::*;
    use VariantKind::*;

    LootTable::new()
        .with_pool(
            Common,
            vec![
                entry("pidgey", "Pidgey", 16),
                entry("rattata", "Rattata", 19),
                entry("caterpie", "Caterpie", 10),
                entry("weedle", "Weedle", 13),
                entry("spearow", "Spearow", 21),
                entry("zubat", "Zubat", 41),
                entry("magikarp", "Magikarp", 129),
                entry("sentret", "Sentret", 161),
            ],
        )
        .with_pool(
            Uncommon,
            vec![
                entry("pikachu", "Pikachu", 25),
                entry("eevee", "Eevee", 133),
                entry("growlithe", "Growlithe", 58),
                entry("abra", "Abra", 63),
                entry("machop", "Machop", 66),
                entry("geodude", "Geodude", 74),
                entry("meowth", "Meowth", 52),
                entry("vulpix_alola", "Alolan Vulpix", 10103).with_variant(Regional),
            ],
        )
        .with_pool(
            Rare,
            vec![
                entry("bulbasaur", "Bulbasaur", 1),
                entry("charmander", "Charmander", 4),
                entry("squirtle", "Squirtle", 7),
                entry("chikorita", "Chikorita", 152),
                entry("cyndaquil", "Cyndaquil", 155),
                entry("totodile", "Totodile", 158),
                entry("lapras", "Lapras", 131),
                entry("raichu_alola", "Alolan Raichu", 10100).with_variant(Regional),
            ],
        )
        .with_pool(
            UltraRare,
            vec![
                entry("dragonite", "Dragonite", 149),
                entry("tyranitar", "Tyranitar", 248),
                entry("gengar", "Gengar", 94),
                entry("snorlax", "Snorlax", 143),
                entry("gyarados", "Gyarados", 130),
                entry("lucario", "Lucario", 448),
                entry("garchomp", "Garchomp", 445),
            ],
        )
        .with_pool(
            SecretRare,
            vec![
                entry("articuno", "Articuno", 144),
                entry("zapdos", "Zapdos", 145),
                entry("moltres", "Moltres", 146),
                entry("raikou", "Raikou", 243),
                entry("entei", "Entei", 244),
                entry("suicune", "Suicune", 245),
            ],
        )
        .with_pool(
            SpecialRare,
            vec![
                entry("mewtwo", "Mewtwo", 150),
                entry("lugia", "Lugia", 249),
                entry("ho_oh", "Ho-Oh", 250),
                entry("rayquaza", "Rayquaza", 384),
                entry("charizard_mega_x", "Mega Charizard X", 10034).with_variant(Mega),
                entry("gengar_mega", "Mega Gengar", 10038).with_variant(Mega),
            ],
        )
        .with_pool(
            HyperRare,
            vec![
                entry("mew", "Mew", 151),
                entry("celebi", "Celebi", 251),
                entry("mewtwo_mega_y", "Mega Mewtwo Y", 10044).with_variant(Mega),
                entry("charizard_gmax", "Gigantamax Charizard", 10196).with_variant(Gmax),
                entry("pikachu_gmax", "Gigantamax Pikachu", 10199).with_variant(Gmax),
                entry("gyarados_red", "Red Gyarados", 130)
                    .shiny()
                    .with_variant(Special),
            ],
        )
        .with_pool(
            CrownRare,
            vec![
                entry("arceus", "Arceus", 493),
                entry("mew_shiny", "Shiny Mew", 151).shiny(),
                entry("rayquaza_shiny", "Shiny Rayquaza", 384).shiny(),
                entry("charizard_gmax_shiny", "Shiny Gigantamax Charizard", 10196)
                    .shiny()
                    .with_variant(Gmax),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_a_pool() {
        let table = default_loot_table();
        for tier in RarityTier::ALL {
            let pool = table.pool(tier).unwrap();
            assert!(!pool.is_empty(), "{tier}");
        }
    }

    #[test]
    fn test_secret_rare_pool_order() {
        let table = default_loot_table();
        let ids: Vec<&str> = table
            .pool(RarityTier::SecretRare)
            .unwrap()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["articuno", "zapdos", "moltres", "raikou", "entei", "suicune"]
        );
    }

    #[test]
    fn test_entry_ids_unique() {
        let table = default_loot_table();
        let mut seen = std::collections::HashSet::new();
        for tier in table.tiers() {
            for entry in table.pool(tier).unwrap() {
                assert!(seen.insert(entry.id.clone()), "duplicate {}", entry.id);
            }
        }
    }
}
