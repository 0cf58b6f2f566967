//! Pokemon reference catalog for pokegym
//!
//! The pack engine only sees the [`Catalog`] trait. This crate provides:
//! - [`PokeApiCatalog`]: HTTP client for the public PokeAPI
//! - [`StaticCatalog`]: in-memory catalog for offline use and tests
//! - [`CachedCatalog`]: read-through cache over any catalog

pub mod cache;
pub mod pokeapi;
pub mod static_catalog;

use async_trait::async_trait;
use pokegym_core::{PokemonSummary, Result};

pub use cache::CachedCatalog;
pub use pokeapi::{PokeApiCatalog, PokeApiConfig};
pub use static_catalog::StaticCatalog;

/// Read-only source of Pokemon attributes keyed by species/form id
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch attributes for a species id.
    /// Fails on unknown ids and transport errors; never substitutes defaults.
    async fn fetch_pokemon(&self, species_id: u32) -> Result<PokemonSummary>;
}
