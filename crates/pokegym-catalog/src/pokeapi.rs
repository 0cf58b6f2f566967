use std::time::Duration;

use async_trait::async_trait;
use pokegym_core::{Error, PokemonSummary, Result, Sprites, StatValue};
use serde::Deserialize;

use crate::Catalog;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Connection settings for [`PokeApiCatalog`]
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("pokegym/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Catalog backed by the PokeAPI REST service
pub struct PokeApiCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiCatalog {
    pub fn new(config: PokeApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Other(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn pokemon_url(&self, species_id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, species_id)
    }
}

#[async_trait]
impl Catalog for PokeApiCatalog {
    async fn fetch_pokemon(&self, species_id: u32) -> Result<PokemonSummary> {
        let url = self.pokemon_url(species_id);
        tracing::debug!(species_id, %url, "fetching pokemon");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Catalog {
                species_id,
                message: format!("request failed: {}", e),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::PokemonNotFound(species_id));
        }
        if !status.is_success() {
            return Err(Error::Catalog {
                species_id,
                message: format!("HTTP error {}", status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| Error::Catalog {
            species_id,
            message: format!("failed to read response: {}", e),
        })?;

        parse_pokemon(&body).map_err(|e| Error::Catalog {
            species_id,
            message: format!("malformed response: {}", e),
        })
    }
}

// Wire shapes of the /pokemon/{id} resource, trimmed to what we keep

#[derive(Deserialize)]
struct ApiPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    sprites: ApiSprites,
    #[serde(default)]
    types: Vec<ApiTypeSlot>,
    #[serde(default)]
    stats: Vec<ApiStat>,
}

#[derive(Deserialize, Default)]
struct ApiSprites {
    front_default: Option<String>,
    front_shiny: Option<String>,
    #[serde(default)]
    other: Option<ApiOtherSprites>,
}

#[derive(Deserialize)]
struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ApiArtwork>,
}

#[derive(Deserialize)]
struct ApiArtwork {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct ApiTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: ApiNamed,
}

#[derive(Deserialize)]
struct ApiStat {
    base_stat: u32,
    stat: ApiNamed,
}

#[derive(Deserialize)]
struct ApiNamed {
    name: String,
}

/// Map a PokeAPI pokemon document into a catalog summary
pub fn parse_pokemon(body: &str) -> Result<PokemonSummary> {
    let api: ApiPokemon = serde_json::from_str(body)?;

    let mut types = api.types;
    types.sort_by_key(|t| t.slot);

    let official_artwork = api
        .sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default);

    Ok(PokemonSummary {
        id: api.id,
        name: api.name,
        sprites: Sprites {
            front_default: api.sprites.front_default,
            front_shiny: api.sprites.front_shiny,
            official_artwork,
        },
        types: types.into_iter().map(|t| t.kind.name).collect(),
        stats: api
            .stats
            .into_iter()
            .map(|s| StatValue {
                name: s.stat.name,
                base: s.base_stat,
            })
            .collect(),
        height: api.height,
        weight: api.weight,
    })
}
