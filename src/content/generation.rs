use tracing::{debug, info};

use super::heroes::generate_heroes;
use super::messages::Messages;
use super::tables::{self, table_for};
use super::types::{ContentObject, GameContent, LootType, ObjectKind, Tier};
use crate::config::TemplateConfig;
use crate::core::constants::{DESCRIPTIONS_PER_OBJECT, FLAVOR_TEXT};
use crate::error::TemplateError;

/// Builds the full placeholder template with the default shape.
pub fn build() -> Result<GameContent, TemplateError> {
    build_with(&TemplateConfig::default())
}

/// Builds a placeholder template shaped by `config`.
///
/// The assignment tables are validated first; nothing is generated from a
/// table that cannot assign every index.
pub fn build_with(config: &TemplateConfig) -> Result<GameContent, TemplateError> {
    config.validate()?;
    tables::validate_all()?;

    let tiers = (1..=config.tiers)
        .map(|number| (number, generate_tier(number, config)))
        .collect();
    let heroes = generate_heroes(config.heroes, config.specialist_heroes);

    let content = GameContent {
        messages: Messages::placeholders(),
        tiers,
        heroes,
    };
    info!(
        tiers = config.tiers,
        objects = content.object_count(),
        heroes = content.heroes.len(),
        "built content template"
    );
    Ok(content)
}

/// Generates every object of one tier.
pub fn generate_tier(tier: u32, config: &TemplateConfig) -> Tier {
    let batch = |kind: ObjectKind, count: u32| -> Vec<ContentObject> {
        (0..count)
            .map(|index| generate_object(kind, tier, index, config.tiers))
            .collect()
    };

    let generated = Tier {
        events: batch(ObjectKind::Event, config.events_per_tier),
        monsters: batch(ObjectKind::Monster, config.monsters_per_tier),
        boss: generate_object(ObjectKind::Boss, tier, 0, config.tiers),
        equipment: batch(ObjectKind::Equipment, config.equipment_per_tier),
        consumables: batch(ObjectKind::Consumable, config.consumables_per_tier),
    };
    debug!(
        tier,
        events = generated.events.len(),
        monsters = generated.monsters.len(),
        equipment = generated.equipment.len(),
        consumables = generated.consumables.len(),
        "generated tier"
    );
    generated
}

/// Generates the object at zero-based `index` of its batch.
pub fn generate_object(kind: ObjectKind, tier: u32, index: u32, final_tier: u32) -> ContentObject {
    let id = object_id(kind, tier, index);
    ContentObject {
        name: id.clone(),
        id,
        tier,
        resources: table_for(kind).costs(index, tier),
        loot: loot_for(kind, tier, index, final_tier),
        descriptions: (1..=DESCRIPTIONS_PER_OBJECT)
            .map(|n| format!("DESCRIPTION {}", n))
            .collect(),
        flavor: vec![FLAVOR_TEXT.to_string()],
    }
}

/// "MONSTER #3-7" for the seventh monster of tier 3; a boss is "BOSS #3".
pub fn object_id(kind: ObjectKind, tier: u32, index: u32) -> String {
    match kind {
        ObjectKind::Boss => format!("{} #{}", kind.label(), tier),
        _ => format!("{} #{}-{}", kind.label(), tier, index + 1),
    }
}

/// Loot dropped by monsters and bosses; other kinds drop nothing.
pub fn loot_for(kind: ObjectKind, tier: u32, index: u32, final_tier: u32) -> Option<LootType> {
    match kind {
        ObjectKind::Monster if index % 2 == 0 => Some(LootType::Consumable),
        ObjectKind::Monster => Some(LootType::Equipment),
        ObjectKind::Boss if tier == final_tier => Some(LootType::Win),
        ObjectKind::Boss => Some(LootType::Levelup),
        _ => None,
    }
}
