//! Rarity tiers, ball types and per-tier box configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Rarity tier of a reward, listed from most to least probable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    UltraRare,
    SecretRare,
    SpecialRare,
    HyperRare,
    CrownRare,
}

impl RarityTier {
    pub const ALL: [RarityTier; 8] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::UltraRare,
        RarityTier::SecretRare,
        RarityTier::SpecialRare,
        RarityTier::HyperRare,
        RarityTier::CrownRare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RarityTier::Common => "common",
            RarityTier::Uncommon => "uncommon",
            RarityTier::Rare => "rare",
            RarityTier::UltraRare => "ultra_rare",
            RarityTier::SecretRare => "secret_rare",
            RarityTier::SpecialRare => "special_rare",
            RarityTier::HyperRare => "hyper_rare",
            RarityTier::CrownRare => "crown_rare",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::UltraRare => "Ultra Rare",
            RarityTier::SecretRare => "Secret Rare",
            RarityTier::SpecialRare => "Special Rare",
            RarityTier::HyperRare => "Hyper Rare",
            RarityTier::CrownRare => "Crown Rare",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RarityTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        RarityTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| Error::UnknownRarity(s.to_string()))
    }
}

/// Ball (currency) type. Doubles as the key for built-in box definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallType {
    #[default]
    Poke,
    Great,
    Ultra,
    Master,
}

impl BallType {
    pub const ALL: [BallType; 4] = [
        BallType::Poke,
        BallType::Great,
        BallType::Ultra,
        BallType::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BallType::Poke => "poke",
            BallType::Great => "great",
            BallType::Ultra => "ultra",
            BallType::Master => "master",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BallType::Poke => "Poké Ball",
            BallType::Great => "Great Ball",
            BallType::Ultra => "Ultra Ball",
            BallType::Master => "Master Ball",
        }
    }
}

impl fmt::Display for BallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BallType {
    type Err = Error;

    /// Accepts `poke`, `poke_ball`, `poke-ball` and `pokeball` style names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' ', '_'], "");
        let stem = normalized.strip_suffix("ball").unwrap_or(&normalized);
        BallType::ALL
            .into_iter()
            .find(|ball| ball.as_str() == stem)
            .ok_or_else(|| Error::UnknownBall(s.to_string()))
    }
}

/// Form variant attached to a loot pool entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Normal,
    Special,
    Regional,
    Mega,
    Gmax,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantKind::Normal => "normal",
            VariantKind::Special => "special",
            VariantKind::Regional => "regional",
            VariantKind::Mega => "mega",
            VariantKind::Gmax => "gmax",
        };
        f.pad(name)
    }
}

/// Drop configuration for one rarity tier within a box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityConfig {
    pub id: RarityTier,
    pub label: String,
    /// Chance of landing in this tier on a non-guaranteed slot roll.
    /// Chances across tiers need not sum to 1.
    pub chance: f64,
    pub ball_type: BallType,
    /// Slots reserved for this tier before random filling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed_slots: Option<usize>,
    /// Upper bound on items of this tier in one pack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_per_pack: Option<usize>,
}

impl RarityConfig {
    pub fn new(id: RarityTier, chance: f64, ball_type: BallType) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            chance,
            ball_type,
            guaranteed_slots: None,
            max_per_pack: None,
        }
    }

    pub fn with_guaranteed_slots(mut self, slots: usize) -> Self {
        self.guaranteed_slots = Some(slots);
        self
    }

    pub fn with_max_per_pack(mut self, max: usize) -> Self {
        self.max_per_pack = Some(max);
        self
    }

    /// Whether another item of this tier still fits under the cap
    pub fn has_capacity(&self, taken: usize) -> bool {
        self.max_per_pack.is_none_or(|max| taken < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_parse() {
        assert_eq!("common".parse::<RarityTier>().unwrap(), RarityTier::Common);
        assert_eq!(
            "secret_rare".parse::<RarityTier>().unwrap(),
            RarityTier::SecretRare
        );
        assert_eq!(
            "Ultra-Rare".parse::<RarityTier>().unwrap(),
            RarityTier::UltraRare
        );

        let err = "legendary".parse::<RarityTier>().unwrap_err();
        assert!(err.to_string().contains("legendary"));
    }

    #[test]
    fn test_rarity_display_round_trips_through_serde_name() {
        for tier in RarityTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier));
        }
    }

    #[test]
    fn test_ball_parse_aliases() {
        assert_eq!("poke".parse::<BallType>().unwrap(), BallType::Poke);
        assert_eq!("poke_ball".parse::<BallType>().unwrap(), BallType::Poke);
        assert_eq!("Pokeball".parse::<BallType>().unwrap(), BallType::Poke);
        assert_eq!("master-ball".parse::<BallType>().unwrap(), BallType::Master);
        assert!(matches!(
            "premier".parse::<BallType>(),
            Err(Error::UnknownBall(_))
        ));
    }

    #[test]
    fn test_capacity() {
        let capped = RarityConfig::new(RarityTier::Rare, 0.25, BallType::Great).with_max_per_pack(1);
        assert!(capped.has_capacity(0));
        assert!(!capped.has_capacity(1));

        let uncapped = RarityConfig::new(RarityTier::Common, 1.0, BallType::Poke);
        assert!(uncapped.has_capacity(100));
    }

    #[test]
    fn test_rarity_config_optional_fields_default() {
        let json = r#"{"id":"rare","label":"Rare","chance":0.25,"ball_type":"great"}"#;
        let config: RarityConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.guaranteed_slots, None);
        assert_eq!(config.max_per_pack, None);
    }
}
