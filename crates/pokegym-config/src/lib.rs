use anyhow::Context;
use pokegym_core::box_config::rarity_configs;
use pokegym_core::loot_table::default_loot_table;
use pokegym_core::{BallType, LootTable, RarityConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Global Config (config.toml)
// ============================================================================

/// Configuration for pokegym
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Fractional boost to tier chances and the shiny rate (0.25 = +25%)
    #[serde(default)]
    pub buff: f64,

    #[serde(default = "default_pack_size")]
    pub pack_size: usize,

    #[serde(default)]
    pub ball: BallType,

    /// Custom box definition replacing the built-in rarities/loot table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            buff: 0.0,
            pack_size: default_pack_size(),
            ball: BallType::default(),
            box_file: None,
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_pack_size() -> usize {
    5
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pokegym/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "pokegym", "pokegym") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.pokegym/config.toml")
        }
    }

    /// Box definition file, resolved relative to the config file
    pub fn box_file(&self, config_path: &Path) -> Option<PathBuf> {
        let file = self.engine.box_file.as_ref()?;
        if file.is_relative() {
            if let Some(parent) = config_path.parent() {
                return Some(parent.join(file));
            }
        }
        Some(file.clone())
    }
}

// ============================================================================
// Box definitions (boxes.toml)
// ============================================================================

/// Custom rarity configuration and/or loot table.
///
/// Either half may be omitted to keep the built-in value. Nothing is
/// validated here; an empty pool only fails when a pack draws from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxFile {
    /// Ordered: guarantees and cap fallback follow this order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarities: Option<Vec<RarityConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loot_table: Option<LootTable>,
}

impl BoxFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read box file {}", path.display()))?;
        let file: BoxFile = toml::from_str(&content)
            .with_context(|| format!("Invalid box file {}", path.display()))?;
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Custom rarities, or the built-in box for `ball`
    pub fn rarity_configs(&self, ball: BallType) -> Vec<RarityConfig> {
        self.rarities.clone().unwrap_or_else(|| rarity_configs(ball))
    }

    /// Custom loot table, or the built-in one
    pub fn loot_table(&self) -> LootTable {
        self.loot_table.clone().unwrap_or_else(default_loot_table)
    }
}
