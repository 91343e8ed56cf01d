//! Integration test: content template generation
//!
//! Builds the default template through the public API and checks its shape,
//! the resource values the assignment tables produce, loot, and heroes.

use cordan::content::types::{
    ContentObject, DiscountType, LootType, ObjectKind, ResourceType,
};
use cordan::{build, build_with, TemplateConfig};

fn value(object: &ContentObject, resource: ResourceType) -> u32 {
    object.resources[&resource].value
}

// =========================================================================
// Shape
// =========================================================================

#[test]
fn test_every_tier_has_full_batches() {
    let content = build().unwrap();
    assert_eq!(content.tiers.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    for (number, tier) in &content.tiers {
        assert_eq!(tier.events.len(), 30, "tier {number}");
        assert_eq!(tier.monsters.len(), 20, "tier {number}");
        assert_eq!(tier.equipment.len(), 20, "tier {number}");
        assert_eq!(tier.consumables.len(), 20, "tier {number}");
        assert_eq!(tier.objects(ObjectKind::Boss).len(), 1, "tier {number}");
    }
    assert_eq!(content.object_count(), 5 * 91);
}

#[test]
fn test_hero_roster_is_32_regardless_of_tiers() {
    assert_eq!(build().unwrap().heroes.len(), 32);

    let config = TemplateConfig {
        tiers: 2,
        ..Default::default()
    };
    assert_eq!(build_with(&config).unwrap().heroes.len(), 32);
}

#[test]
fn test_id_equals_name_everywhere() {
    let content = build().unwrap();
    for tier in content.tiers.values() {
        for object in tier.all_objects() {
            assert_eq!(object.id, object.name);
        }
    }
    for hero in &content.heroes {
        assert_eq!(hero.id, hero.name);
    }
}

#[test]
fn test_ids_are_one_based_and_tier_scoped() {
    let content = build().unwrap();
    let tier = &content.tiers[&2];
    assert_eq!(tier.events[0].id, "EVENT #2-1");
    assert_eq!(tier.events[29].id, "EVENT #2-30");
    assert_eq!(tier.monsters[19].id, "MONSTER #2-20");
    assert_eq!(tier.boss.id, "BOSS #2");
    assert_eq!(tier.equipment[4].id, "EQUIPMENT #2-5");
    assert_eq!(tier.consumables[0].id, "CONSUMABLE #2-1");
    assert_eq!(content.heroes[0].id, "HERO #1");
}

#[test]
fn test_resource_blocks_have_explicit_zeroes() {
    let content = build().unwrap();
    let approaches = ResourceType::APPROACHES;
    for tier in content.tiers.values() {
        for event in &tier.events {
            assert_eq!(event.resources.len(), 7);
        }
        for monster in &tier.monsters {
            assert!(approaches.iter().all(|r| monster.resources.contains_key(r)));
            assert!(monster.resources.contains_key(&ResourceType::Health));
            assert_eq!(monster.resources.len(), 6);
        }
        assert_eq!(tier.boss.resources.len(), 6);
        for item in &tier.equipment {
            assert_eq!(item.resources.len(), 5);
            assert!(!item.resources.contains_key(&ResourceType::Health));
        }
        for item in &tier.consumables {
            assert_eq!(item.resources.len(), 6);
        }
    }
}

// =========================================================================
// Events
// =========================================================================

#[test]
fn test_event_zero_tier_three() {
    let content = build().unwrap();
    let event = &content.tiers[&3].events[0];
    assert_eq!(value(event, ResourceType::Physical), 4);
    for resource in [
        ResourceType::Arcane,
        ResourceType::Divine,
        ResourceType::Stealth,
        ResourceType::Mechanical,
    ] {
        assert_eq!(value(event, resource), 0, "{resource}");
    }
    assert_eq!(value(event, ResourceType::Health), 3);
    assert_eq!(value(event, ResourceType::Time), 0);
}

#[test]
fn test_event_sixteen_tier_two() {
    let content = build().unwrap();
    let event = &content.tiers[&2].events[16];
    assert_eq!(value(event, ResourceType::Physical), 3);
    assert_eq!(value(event, ResourceType::Time), 2);
    assert_eq!(value(event, ResourceType::Health), 0);
}

#[test]
fn test_every_event_has_one_approach_and_one_upkeep() {
    let content = build().unwrap();
    for tier in content.tiers.values() {
        for event in &tier.events {
            let active = event.active_resources();
            assert_eq!(active.len(), 2, "{}: {active:?}", event.id);
            let upkeep = active
                .iter()
                .filter(|r| matches!(r, ResourceType::Health | ResourceType::Time))
                .count();
            assert_eq!(upkeep, 1, "{}", event.id);
        }
    }
}

#[test]
fn test_event_texts_present() {
    let content = build().unwrap();
    let event = &content.tiers[&1].events[5];
    for entry in event.resources.values() {
        assert_eq!(entry.texts, vec!["ACTION TEXT".to_string()]);
    }
}

// =========================================================================
// Monsters and bosses
// =========================================================================

#[test]
fn test_monster_zero_tier_one_is_hybrid() {
    let content = build().unwrap();
    let monster = &content.tiers[&1].monsters[0];
    assert_eq!(value(monster, ResourceType::Physical), 2);
    assert_eq!(value(monster, ResourceType::Arcane), 2);
    assert_eq!(value(monster, ResourceType::Health), 2);
}

#[test]
fn test_monster_health_always_tier_plus_one() {
    let content = build().unwrap();
    for (number, tier) in &content.tiers {
        for monster in &tier.monsters {
            assert_eq!(value(monster, ResourceType::Health), number + 1);
        }
    }
}

#[test]
fn test_monster_loot_alternates() {
    let content = build().unwrap();
    for tier in content.tiers.values() {
        for (i, monster) in tier.monsters.iter().enumerate() {
            let expected = if i % 2 == 0 {
                LootType::Consumable
            } else {
                LootType::Equipment
            };
            assert_eq!(monster.loot, Some(expected), "{}", monster.id);
        }
    }
}

#[test]
fn test_boss_values_and_loot() {
    let content = build().unwrap();
    for (number, tier) in &content.tiers {
        let boss = &tier.boss;
        assert_eq!(value(boss, ResourceType::Physical), 4 * number);
        assert_eq!(value(boss, ResourceType::Arcane), 4 * number);
        assert_eq!(value(boss, ResourceType::Divine), 4 * number);
        assert_eq!(value(boss, ResourceType::Health), 3 * number);
        assert_eq!(value(boss, ResourceType::Stealth), 0);
        assert_eq!(value(boss, ResourceType::Mechanical), 0);

        let expected = if *number == 5 {
            LootType::Win
        } else {
            LootType::Levelup
        };
        assert_eq!(boss.loot, Some(expected));
    }
}

#[test]
fn test_items_and_events_have_no_loot() {
    let content = build().unwrap();
    for tier in content.tiers.values() {
        assert!(tier.events.iter().all(|o| o.loot.is_none()));
        assert!(tier.equipment.iter().all(|o| o.loot.is_none()));
        assert!(tier.consumables.iter().all(|o| o.loot.is_none()));
    }
}

// =========================================================================
// Items
// =========================================================================

#[test]
fn test_equipment_single_approach_at_tier_value() {
    let content = build().unwrap();
    let tier = &content.tiers[&4];
    assert_eq!(tier.equipment[0].benefits(), "+4 Physical");
    assert_eq!(tier.equipment[7].benefits(), "+4 Arcane");
    assert_eq!(tier.equipment[19].benefits(), "+4 Mechanical");
    for item in &tier.equipment {
        assert_eq!(item.active_resources().len(), 1, "{}", item.id);
        assert!(item.resources.values().all(|v| v.texts.is_empty()));
    }
}

#[test]
fn test_consumables_last_quarter_restores_health() {
    let content = build().unwrap();
    let tier = &content.tiers[&2];
    for (i, item) in tier.consumables.iter().enumerate() {
        let health = value(item, ResourceType::Health);
        if i >= 15 {
            assert_eq!(health, 2, "{}", item.id);
            assert_eq!(item.active_resources(), vec![ResourceType::Health]);
        } else {
            assert_eq!(health, 0, "{}", item.id);
            assert_eq!(item.active_resources().len(), 1);
        }
    }
    assert_eq!(tier.consumables[14].benefits(), "+2 Mechanical");
}

// =========================================================================
// Heroes
// =========================================================================

#[test]
fn test_hero_archetypes_by_index() {
    let content = build().unwrap();
    for (i, hero) in content.heroes.iter().enumerate() {
        for level in 1..=5 {
            let costs = hero.resources_at(level).unwrap();
            let keys: Vec<_> = costs.keys().copied().collect();
            if i < 10 {
                assert_eq!(keys, vec![ResourceType::Physical], "{}", hero.id);
            } else {
                assert_eq!(
                    keys,
                    vec![ResourceType::Physical, ResourceType::Stealth],
                    "{}",
                    hero.id
                );
            }
        }
    }
}

#[test]
fn test_hero_costs_non_decreasing_by_level() {
    let content = build().unwrap();
    for hero in &content.heroes {
        for level in 2..=5 {
            let previous = hero.resources_at(level - 1).unwrap();
            let current = hero.resources_at(level).unwrap();
            for (resource, amount) in current {
                assert!(
                    *amount >= previous.get(resource).copied().unwrap_or(0),
                    "{} {resource} level {level}",
                    hero.id
                );
            }
        }
    }
}

#[test]
fn test_display_text_uses_readable_resource_names() {
    let content = build().unwrap();
    assert_eq!(content.heroes[0].initial_resources_text(), "Physical: 5");
    assert_eq!(content.heroes[10].initial_resources_text(), "Physical: 3 | Stealth: 2");
    assert_eq!(content.tiers[&1].consumables[19].benefits(), "+1 Health");
}

#[test]
fn test_all_heroes_discount_physical_events() {
    let content = build().unwrap();
    for hero in &content.heroes {
        assert_eq!(hero.discount.resource, ResourceType::Physical);
        assert_eq!(hero.discount.kind, DiscountType::Event);
        assert_eq!(hero.rpg_class, "CLASS PLACEHOLDER");
        assert_eq!(hero.quote, "QUOTE TEXT");
    }
}

// =========================================================================
// Determinism and config
// =========================================================================

#[test]
fn test_build_is_deterministic() {
    assert_eq!(build().unwrap(), build().unwrap());
}

#[test]
fn test_larger_batches_cycle_through_tables() {
    let config = TemplateConfig {
        events_per_tier: 60,
        monsters_per_tier: 40,
        ..Default::default()
    };
    let content = build_with(&config).unwrap();
    let tier = &content.tiers[&1];
    assert_eq!(tier.events.len(), 60);
    assert_eq!(tier.events[33].resources, tier.events[3].resources);
    assert_eq!(tier.monsters[21].resources, tier.monsters[1].resources);
    assert_eq!(tier.monsters[21].loot, Some(LootType::Equipment));
}
