//! Read-through cache over a catalog

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use pokegym_core::{PokemonSummary, Result};

use crate::Catalog;

/// Memoizes successful lookups by species id.
///
/// Entries are never evicted: the catalog is small and fixed. Concurrent
/// misses for the same id may both reach the inner catalog; the second
/// insert overwrites an identical value.
pub struct CachedCatalog {
    inner: Arc<dyn Catalog>,
    entries: DashMap<u32, PokemonSummary>,
}

impl CachedCatalog {
    pub fn new(inner: Arc<dyn Catalog>) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
        }
    }

    pub async fn get(&self, species_id: u32) -> Result<PokemonSummary> {
        let cached = self.entries.get(&species_id).map(|e| e.value().clone());
        if let Some(summary) = cached {
            tracing::trace!(species_id, "catalog cache hit");
            return Ok(summary);
        }

        tracing::debug!(species_id, "catalog cache miss");
        // Failures propagate and are not cached
        let summary = self.inner.fetch_pokemon(species_id).await?;
        self.entries.insert(species_id, summary.clone());
        Ok(summary)
    }

    pub fn contains(&self, species_id: u32) -> bool {
        self.entries.contains_key(&species_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Catalog for CachedCatalog {
    async fn fetch_pokemon(&self, species_id: u32) -> Result<PokemonSummary> {
        self.get(species_id).await
    }
}
