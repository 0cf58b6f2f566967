//! Catalog summaries and pack rewards

use serde::{Deserialize, Serialize};

use crate::loot::LootPoolEntry;
use crate::rarity::{RarityTier, VariantKind};

/// Reference attributes for one species/form, as served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub stats: Vec<StatValue>,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub official_artwork: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub base: u32,
}

/// One item awarded by a pack opening (or listed by a preview)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    pub pokemon: PokemonSummary,
    /// Loot pool entry this reward was drawn from
    pub entry_id: String,
    pub label: String,
    pub rarity: RarityTier,
    pub shiny: bool,
    pub variant: Option<VariantKind>,
}

impl RewardItem {
    pub fn new(
        pokemon: PokemonSummary,
        entry: &LootPoolEntry,
        rarity: RarityTier,
        shiny: bool,
    ) -> Self {
        Self {
            pokemon,
            entry_id: entry.id.clone(),
            label: entry.label.clone(),
            rarity,
            shiny,
            variant: entry.variant,
        }
    }

    /// Sprite to display: shiny artwork when shiny and available
    pub fn sprite(&self) -> Option<&str> {
        let sprites = &self.pokemon.sprites;
        if self.shiny {
            if let Some(url) = sprites.front_shiny.as_deref() {
                return Some(url);
            }
        }
        sprites
            .front_default
            .as_deref()
            .or(sprites.official_artwork.as_deref())
    }
}
