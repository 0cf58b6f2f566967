//! Built-in box definitions, one per ball type
//!
//! Every definition lists all eight tiers in canonical order. The order is
//! significant: guaranteed slots are handed out and capped tiers fall back
//! along it.

use crate::rarity::{BallType, RarityConfig, RarityTier};

/// Currency a tier is associated with, independent of the box it drops from
pub fn tier_ball(tier: RarityTier) -> BallType {
    match tier {
        RarityTier::Common | RarityTier::Uncommon => BallType::Poke,
        RarityTier::Rare | RarityTier::UltraRare => BallType::Great,
        RarityTier::SecretRare | RarityTier::SpecialRare => BallType::Ultra,
        RarityTier::HyperRare | RarityTier::CrownRare => BallType::Master,
    }
}

fn tier(id: RarityTier, chance: f64) -> RarityConfig {
    RarityConfig::new(id, chance, tier_ball(id))
}

/// Rarity configuration used when no ball is specified
pub fn default_rarity_configs() -> Vec<RarityConfig> {
    rarity_configs(BallType::Poke)
}

/// Built-in rarity configuration for packs opened with `ball`
pub fn rarity_configs(ball: BallType) -> Vec<RarityConfig> {
    use RarityTier::*;

    match ball {
        BallType::Poke => vec![
            tier(Common, 1.0).with_guaranteed_slots(3).with_max_per_pack(3),
            tier(Uncommon, 0.75).with_max_per_pack(2),
            tier(Rare, 0.25).with_max_per_pack(1),
            tier(UltraRare, 0.1).with_max_per_pack(1),
            tier(SecretRare, 0.03).with_max_per_pack(1),
            tier(SpecialRare, 0.015).with_max_per_pack(1),
            tier(HyperRare, 0.005).with_max_per_pack(1),
            tier(CrownRare, 0.001).with_max_per_pack(1),
        ],
        BallType::Great => vec![
            tier(Common, 0.5).with_guaranteed_slots(2).with_max_per_pack(2),
            tier(Uncommon, 0.3).with_guaranteed_slots(1).with_max_per_pack(3),
            tier(Rare, 0.12).with_max_per_pack(2),
            tier(UltraRare, 0.05).with_max_per_pack(1),
            tier(SecretRare, 0.02).with_max_per_pack(1),
            tier(SpecialRare, 0.008).with_max_per_pack(1),
            tier(HyperRare, 0.0015).with_max_per_pack(1),
            tier(CrownRare, 0.0005).with_max_per_pack(1),
        ],
        BallType::Ultra => vec![
            tier(Common, 0.25).with_guaranteed_slots(1).with_max_per_pack(1),
            tier(Uncommon, 0.35).with_max_per_pack(2),
            tier(Rare, 0.22).with_guaranteed_slots(1).with_max_per_pack(2),
            tier(UltraRare, 0.1).with_max_per_pack(2),
            tier(SecretRare, 0.05).with_max_per_pack(1),
            tier(SpecialRare, 0.02).with_max_per_pack(1),
            tier(HyperRare, 0.008).with_max_per_pack(1),
            tier(CrownRare, 0.002).with_max_per_pack(1),
        ],
        BallType::Master => vec![
            tier(Common, 0.05).with_max_per_pack(1),
            tier(Uncommon, 0.15).with_max_per_pack(1),
            tier(Rare, 0.3).with_max_per_pack(2),
            tier(UltraRare, 0.25).with_guaranteed_slots(1).with_max_per_pack(2),
            tier(SecretRare, 0.12).with_max_per_pack(1),
            tier(SpecialRare, 0.08).with_max_per_pack(1),
            tier(HyperRare, 0.04).with_max_per_pack(1),
            tier(CrownRare, 0.01).with_max_per_pack(1),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(configs: &[RarityConfig], id: RarityTier) -> &RarityConfig {
        configs.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_every_box_lists_all_tiers_in_order() {
        for ball in BallType::ALL {
            let ids: Vec<_> = rarity_configs(ball).iter().map(|c| c.id).collect();
            assert_eq!(ids, RarityTier::ALL.to_vec(), "{ball}");
        }
    }

    #[test]
    fn test_poke_ball_defaults() {
        let configs = default_rarity_configs();
        let common = find(&configs, RarityTier::Common);
        assert_eq!(common.chance, 1.0);
        assert_eq!(common.guaranteed_slots, Some(3));
        assert_eq!(common.max_per_pack, Some(3));
        assert_eq!(find(&configs, RarityTier::Uncommon).chance, 0.75);
    }

    #[test]
    fn test_master_ball_guarantees_ultra_rare() {
        let configs = rarity_configs(BallType::Master);
        assert_eq!(
            find(&configs, RarityTier::UltraRare).guaranteed_slots,
            Some(1)
        );
        assert_eq!(find(&configs, RarityTier::Common).guaranteed_slots, None);
    }

    #[test]
    fn test_guarantees_fit_within_caps() {
        for ball in BallType::ALL {
            for config in rarity_configs(ball) {
                if let (Some(guaranteed), Some(max)) = (config.guaranteed_slots, config.max_per_pack)
                {
                    assert!(guaranteed <= max, "{ball}/{}", config.id);
                }
            }
        }
    }

    #[test]
    fn test_tier_ball_association() {
        let configs = rarity_configs(BallType::Ultra);
        assert_eq!(find(&configs, RarityTier::Common).ball_type, BallType::Poke);
        assert_eq!(
            find(&configs, RarityTier::CrownRare).ball_type,
            BallType::Master
        );
    }
}
