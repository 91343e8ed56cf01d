use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::messages::Messages;

/// An approach or cost axis an obstacle can be priced in.
///
/// Declaration order is the order keys appear in a resource block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
    Physical,
    Arcane,
    Divine,
    Stealth,
    Mechanical,
    Health,
    Time,
}

impl ResourceType {
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Physical,
        ResourceType::Arcane,
        ResourceType::Divine,
        ResourceType::Stealth,
        ResourceType::Mechanical,
        ResourceType::Health,
        ResourceType::Time,
    ];

    /// The five ways a party can approach an obstacle.
    pub const APPROACHES: [ResourceType; 5] = [
        ResourceType::Physical,
        ResourceType::Arcane,
        ResourceType::Divine,
        ResourceType::Stealth,
        ResourceType::Mechanical,
    ];

    /// Key used in the content file.
    pub fn key(&self) -> &'static str {
        match self {
            ResourceType::Physical => "PHYSICAL",
            ResourceType::Arcane => "ARCANE",
            ResourceType::Divine => "DIVINE",
            ResourceType::Stealth => "STEALTH",
            ResourceType::Mechanical => "MECHANICAL",
            ResourceType::Health => "HEALTH",
            ResourceType::Time => "TIME",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceType::Physical => "Physical",
            ResourceType::Arcane => "Arcane",
            ResourceType::Divine => "Divine",
            ResourceType::Stealth => "Stealth",
            ResourceType::Mechanical => "Mechanical",
            ResourceType::Health => "Health",
            ResourceType::Time => "Time",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What defeating a monster or boss grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LootType {
    Equipment,
    Consumable,
    /// Party level-up.
    Levelup,
    /// Ends the game.
    Win,
}

/// Which obstacles a hero discount applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiscountType {
    Event,
    Monster,
}

/// The kinds of tier-scoped content objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKind {
    Event,
    Monster,
    Boss,
    Equipment,
    Consumable,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Event,
        ObjectKind::Monster,
        ObjectKind::Boss,
        ObjectKind::Equipment,
        ObjectKind::Consumable,
    ];

    /// Prefix used when synthesizing ids.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Event => "EVENT",
            ObjectKind::Monster => "MONSTER",
            ObjectKind::Boss => "BOSS",
            ObjectKind::Equipment => "EQUIPMENT",
            ObjectKind::Consumable => "CONSUMABLE",
        }
    }
}

/// One entry of a resource block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceValue {
    pub value: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub texts: Vec<String>,
}

impl ResourceValue {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            texts: Vec::new(),
        }
    }

    pub fn with_text(value: u32, text: &str) -> Self {
        Self {
            value,
            texts: vec![text.to_string()],
        }
    }

    pub fn is_active(&self) -> bool {
        self.value > 0
    }
}

pub type ResourceCosts = BTreeMap<ResourceType, ResourceValue>;

/// Fields shared by events, monsters, bosses, equipment and consumables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentObject {
    pub id: String,
    pub name: String,
    /// Not stored in the file; set from the enclosing tier.
    #[serde(skip)]
    pub tier: u32,
    pub resources: ResourceCosts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loot: Option<LootType>,
    pub descriptions: Vec<String>,
    pub flavor: Vec<String>,
}

impl ContentObject {
    /// Value for `resource`, 0 when the block has no entry for it.
    pub fn value(&self, resource: ResourceType) -> u32 {
        self.resources.get(&resource).map_or(0, |v| v.value)
    }

    /// Resources with a non-zero value, in declaration order.
    pub fn active_resources(&self) -> Vec<ResourceType> {
        self.resources
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(r, _)| *r)
            .collect()
    }

    /// One-line list of what an item grants, e.g. "+2 Physical, +2 Health".
    pub fn benefits(&self) -> String {
        self.resources
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(r, v)| format!("+{} {}", v.value, r.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// All content belonging to one difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub events: Vec<ContentObject>,
    pub monsters: Vec<ContentObject>,
    pub boss: ContentObject,
    pub equipment: Vec<ContentObject>,
    pub consumables: Vec<ContentObject>,
}

impl Tier {
    /// Objects of one kind, in ordinal order.
    pub fn objects(&self, kind: ObjectKind) -> &[ContentObject] {
        match kind {
            ObjectKind::Event => &self.events,
            ObjectKind::Monster => &self.monsters,
            ObjectKind::Boss => std::slice::from_ref(&self.boss),
            ObjectKind::Equipment => &self.equipment,
            ObjectKind::Consumable => &self.consumables,
        }
    }

    pub fn all_objects(&self) -> impl Iterator<Item = &ContentObject> {
        ObjectKind::ALL
            .into_iter()
            .flat_map(move |kind| self.objects(kind).iter())
    }

    fn set_tier(&mut self, tier: u32) {
        self.events
            .iter_mut()
            .chain(self.monsters.iter_mut())
            .chain(std::iter::once(&mut self.boss))
            .chain(self.equipment.iter_mut())
            .chain(self.consumables.iter_mut())
            .for_each(|object| object.tier = tier);
    }
}

/// A hero's discount on obstacle costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroDiscount {
    pub resource: ResourceType,
    #[serde(rename = "type")]
    pub kind: DiscountType,
}

/// A recruitable hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub rpg_class: String,
    pub description: String,
    /// Resources contributed to the party at each level (1-based).
    pub resources: BTreeMap<u32, BTreeMap<ResourceType, u32>>,
    pub discount: HeroDiscount,
    pub flavor: String,
    pub quote: String,
}

impl Hero {
    pub fn resources_at(&self, level: u32) -> Option<&BTreeMap<ResourceType, u32>> {
        self.resources.get(&level)
    }

    /// Level-one resources as "Physical: 3 | Stealth: 2".
    pub fn initial_resources_text(&self) -> String {
        self.resources_at(1)
            .map(|costs| {
                costs
                    .iter()
                    .map(|(r, v)| format!("{}: {}", r.name(), v))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .unwrap_or_default()
    }
}

/// The root of the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContent {
    pub messages: Messages,
    pub tiers: BTreeMap<u32, Tier>,
    pub heroes: Vec<Hero>,
}

impl GameContent {
    /// Stamps every content object with the number of the tier it lives in.
    pub fn infer_object_tiers(&mut self) {
        for (number, tier) in self.tiers.iter_mut() {
            tier.set_tier(*number);
        }
    }

    pub fn tier(&self, number: u32) -> Option<&Tier> {
        self.tiers.get(&number)
    }

    /// Total number of tier-scoped content objects.
    pub fn object_count(&self) -> usize {
        self.tiers.values().map(|t| t.all_objects().count()).sum()
    }
}
