//! Template generation configuration.

use crate::core::constants::*;
use crate::error::TemplateError;

/// Shape of the generated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Number of difficulty tiers (the last one's boss wins the game)
    pub tiers: u32,

    /// Objects generated per tier, by kind
    pub events_per_tier: u32,
    pub monsters_per_tier: u32,
    pub equipment_per_tier: u32,
    pub consumables_per_tier: u32,

    /// Size of the hero roster
    pub heroes: u32,

    /// Heroes below this index use the single-resource archetype
    pub specialist_heroes: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            tiers: TIER_COUNT,
            events_per_tier: EVENTS_PER_TIER,
            monsters_per_tier: MONSTERS_PER_TIER,
            equipment_per_tier: EQUIPMENT_PER_TIER,
            consumables_per_tier: CONSUMABLES_PER_TIER,
            heroes: HERO_COUNT,
            specialist_heroes: SPECIALIST_HERO_COUNT,
        }
    }
}

impl TemplateConfig {
    /// Quick config with one object per kind, for previews.
    pub fn preview(tiers: u32) -> Self {
        Self {
            tiers,
            events_per_tier: 1,
            monsters_per_tier: 1,
            equipment_per_tier: 1,
            consumables_per_tier: 1,
            heroes: 2,
            specialist_heroes: 1,
        }
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.tiers == 0 {
            return Err(TemplateError::Config(
                "at least one tier is required".to_string(),
            ));
        }
        if self.tiers > MAX_TIERS {
            return Err(TemplateError::Config(format!(
                "{} tiers requested, at most {} are supported",
                self.tiers, MAX_TIERS
            )));
        }
        Ok(())
    }
}
