use thiserror::Error;

use crate::rarity::RarityTier;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Loot pool for rarity '{0}' is empty")]
    EmptyPool(RarityTier),

    #[error("Rarity '{0}' is not configured in the loot table")]
    TierNotConfigured(RarityTier),

    #[error("Unknown rarity: {0}")]
    UnknownRarity(String),

    #[error("Unknown ball type: {0}")]
    UnknownBall(String),

    #[error("Invalid pack size: {0} (must be at least 1)")]
    InvalidPackSize(usize),

    #[error("Pokemon not found: {0}")]
    PokemonNotFound(u32),

    #[error("Catalog lookup failed for species {species_id}: {message}")]
    Catalog { species_id: u32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
