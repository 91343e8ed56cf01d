//! Hero roster generation.

use std::collections::BTreeMap;

use super::types::{DiscountType, Hero, HeroDiscount, ResourceType};
use crate::core::constants::{CLASS_PLACEHOLDER, DESCRIPTION_PLACEHOLDER, FLAVOR_TEXT, QUOTE_TEXT};

/// Resources a hero archetype contributes at levels 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub levels: [&'static [(ResourceType, u32)]; 5],
}

impl Archetype {
    pub fn resources(&self) -> BTreeMap<u32, BTreeMap<ResourceType, u32>> {
        self.levels
            .iter()
            .zip(1u32..)
            .map(|(costs, level)| (level, costs.iter().copied().collect()))
            .collect()
    }
}

pub const SPECIALIST: Archetype = Archetype {
    name: "specialist",
    levels: [
        &[(ResourceType::Physical, 5)],
        &[(ResourceType::Physical, 6)],
        &[(ResourceType::Physical, 7)],
        &[(ResourceType::Physical, 8)],
        &[(ResourceType::Physical, 9)],
    ],
};

pub const HYBRID: Archetype = Archetype {
    name: "hybrid",
    levels: [
        &[(ResourceType::Physical, 3), (ResourceType::Stealth, 2)],
        &[(ResourceType::Physical, 4), (ResourceType::Stealth, 2)],
        &[(ResourceType::Physical, 5), (ResourceType::Stealth, 2)],
        &[(ResourceType::Physical, 5), (ResourceType::Stealth, 3)],
        &[(ResourceType::Physical, 6), (ResourceType::Stealth, 3)],
    ],
};

/// Shared by every generated hero.
pub const DEFAULT_DISCOUNT: HeroDiscount = HeroDiscount {
    resource: ResourceType::Physical,
    kind: DiscountType::Event,
};

pub fn archetype_for(index: u32, specialist_count: u32) -> &'static Archetype {
    if index < specialist_count {
        &SPECIALIST
    } else {
        &HYBRID
    }
}

/// Placeholder hero at zero-based `index`.
pub fn generate_hero(index: u32, specialist_count: u32) -> Hero {
    let id = format!("HERO #{}", index + 1);
    Hero {
        name: id.clone(),
        id,
        rpg_class: CLASS_PLACEHOLDER.to_string(),
        description: DESCRIPTION_PLACEHOLDER.to_string(),
        resources: archetype_for(index, specialist_count).resources(),
        discount: DEFAULT_DISCOUNT,
        flavor: FLAVOR_TEXT.to_string(),
        quote: QUOTE_TEXT.to_string(),
    }
}

pub fn generate_heroes(count: u32, specialist_count: u32) -> Vec<Hero> {
    (0..count)
        .map(|i| generate_hero(i, specialist_count))
        .collect()
}
