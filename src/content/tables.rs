//! Index-to-resource assignment tables.
//!
//! Every tier-scoped batch (events, monsters, equipment, consumables) maps the
//! position of an object within its batch to the resource types it emphasizes.
//! An index `i` is reduced to `i % modulus` and checked against each rule's
//! slots; an active rule contributes its tier-scaled value, an inactive one
//! contributes an explicit zero.
//!
//! Rules are grouped into partitions. For every index, exactly `arity` rules of
//! a partition are active. Disjoint tables use arity 1; the monster approach
//! partition uses arity 2, which is what makes every monster a hybrid of two
//! approaches.

use std::ops::Range;

use super::types::{ObjectKind, ResourceCosts, ResourceType, ResourceValue};
use crate::core::constants::{ACTION_TEXT, IMMUNE_TEXT};
use crate::error::TableError;

/// Which indices (after reduction by the modulus) activate a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slots {
    Always,
    Never,
    /// Half-open ranges.
    Ranges(&'static [Range<u32>]),
}

impl Slots {
    pub fn contains(&self, slot: u32) -> bool {
        match self {
            Slots::Always => true,
            Slots::Never => false,
            Slots::Ranges(ranges) => ranges.iter().any(|r| r.contains(&slot)),
        }
    }
}

/// How an active rule's value grows with the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Tier,
    TierPlusOne,
    TierTimes(u32),
}

impl Scale {
    pub fn apply(&self, tier: u32) -> u32 {
        match self {
            Scale::Tier => tier,
            Scale::TierPlusOne => tier.saturating_add(1),
            Scale::TierTimes(factor) => factor.saturating_mul(tier),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRule {
    pub resource: ResourceType,
    pub slots: Slots,
    pub scale: Scale,
    /// Placeholder action text, omitted from the block when `None`.
    pub text: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Number of rules active for every index.
    pub arity: usize,
    pub rules: &'static [ResourceRule],
}

impl Partition {
    fn active_count(&self, slot: u32) -> usize {
        self.rules.iter().filter(|r| r.slots.contains(slot)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentTable {
    pub group: &'static str,
    pub modulus: u32,
    pub partitions: &'static [Partition],
}

impl AssignmentTable {
    /// Position of `index` within the table. A zero modulus (rejected by
    /// `validate`) leaves the index unreduced.
    fn slot(&self, index: u32) -> u32 {
        index.checked_rem(self.modulus).unwrap_or(index)
    }

    pub fn rules(&self) -> impl Iterator<Item = &'static ResourceRule> {
        let partitions = self.partitions;
        partitions.iter().flat_map(|p| p.rules.iter())
    }

    /// Resource block for the object at zero-based `index` within its batch.
    pub fn costs(&self, index: u32, tier: u32) -> ResourceCosts {
        let slot = self.slot(index);
        self.rules()
            .map(|rule| {
                let value = if rule.slots.contains(slot) {
                    rule.scale.apply(tier)
                } else {
                    0
                };
                let entry = match rule.text {
                    Some(text) => ResourceValue::with_text(value, text),
                    None => ResourceValue::new(value),
                };
                (rule.resource, entry)
            })
            .collect()
    }

    /// Resource types active at `index`, in table order.
    pub fn active(&self, index: u32) -> Vec<ResourceType> {
        let slot = self.slot(index);
        self.rules()
            .filter(|rule| rule.slots.contains(slot))
            .map(|rule| rule.resource)
            .collect()
    }

    /// Checks the table can assign every index in `0..modulus` as declared.
    pub fn validate(&self) -> Result<(), TableError> {
        let group = self.group;
        if self.modulus == 0 {
            return Err(TableError::ZeroModulus { group });
        }

        let mut seen: Vec<ResourceType> = Vec::new();
        for rule in self.rules() {
            if seen.contains(&rule.resource) {
                return Err(TableError::DuplicateResource {
                    group,
                    resource: rule.resource,
                });
            }
            seen.push(rule.resource);

            if let Slots::Ranges(ranges) = rule.slots {
                for range in ranges {
                    if range.start >= range.end {
                        return Err(TableError::EmptyRange {
                            group,
                            resource: rule.resource,
                            range: range.clone(),
                        });
                    }
                    if range.end > self.modulus {
                        return Err(TableError::RangeOutOfBounds {
                            group,
                            resource: rule.resource,
                            range: range.clone(),
                            modulus: self.modulus,
                        });
                    }
                }
            }
        }

        for (partition_index, partition) in self.partitions.iter().enumerate() {
            let counts: Vec<usize> = (0..self.modulus)
                .map(|slot| partition.active_count(slot))
                .collect();

            // Report the first run of indices sharing the same wrong count
            if let Some(start) = counts.iter().position(|&c| c != partition.arity) {
                let found = counts[start];
                let len = counts[start..].iter().take_while(|&&c| c == found).count();
                return Err(TableError::Arity {
                    group,
                    partition: partition_index,
                    indices: start as u32..(start + len) as u32,
                    expected: partition.arity,
                    found,
                });
            }
        }

        Ok(())
    }
}

const fn rule(
    resource: ResourceType,
    slots: Slots,
    scale: Scale,
    text: Option<&'static str>,
) -> ResourceRule {
    ResourceRule {
        resource,
        slots,
        scale,
        text,
    }
}

const ACTION: Option<&str> = Some(ACTION_TEXT);

// ═══════════════════════════════════════════════════════════════
// EVENTS: each approach owns a 3-wide block in both halves of the cycle;
// the first half costs health, the second half costs time.
// ═══════════════════════════════════════════════════════════════
#[rustfmt::skip]
pub const EVENT_TABLE: AssignmentTable = AssignmentTable {
    group: "events",
    modulus: 30,
    partitions: &[
        Partition {
            arity: 1,
            rules: &[
                rule(ResourceType::Physical, Slots::Ranges(&[0..3, 15..18]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Arcane, Slots::Ranges(&[3..6, 18..21]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Divine, Slots::Ranges(&[6..9, 21..24]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Stealth, Slots::Ranges(&[9..12, 24..27]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Mechanical, Slots::Ranges(&[12..15, 27..30]), Scale::TierPlusOne, ACTION),
            ],
        },
        Partition {
            arity: 1,
            rules: &[
                rule(ResourceType::Health, Slots::Ranges(&[0..15]), Scale::Tier, ACTION),
                rule(ResourceType::Time, Slots::Ranges(&[15..30]), Scale::Tier, ACTION),
            ],
        },
    ],
};

// ═══════════════════════════════════════════════════════════════
// MONSTERS: ten 2-wide blocks, one per pair of approaches, so every
// monster can be beaten two ways. Health is always at stake.
// ═══════════════════════════════════════════════════════════════
#[rustfmt::skip]
pub const MONSTER_TABLE: AssignmentTable = AssignmentTable {
    group: "monsters",
    modulus: 20,
    partitions: &[
        Partition {
            arity: 2,
            rules: &[
                rule(ResourceType::Physical, Slots::Ranges(&[0..8]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Arcane, Slots::Ranges(&[0..2, 8..14]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Divine, Slots::Ranges(&[2..4, 8..10, 14..18]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Stealth, Slots::Ranges(&[4..6, 10..12, 14..16, 18..20]), Scale::TierPlusOne, ACTION),
                rule(ResourceType::Mechanical, Slots::Ranges(&[6..8, 12..14, 16..20]), Scale::TierPlusOne, ACTION),
            ],
        },
        Partition {
            arity: 1,
            rules: &[rule(ResourceType::Health, Slots::Always, Scale::TierPlusOne, ACTION)],
        },
    ],
};

// ═══════════════════════════════════════════════════════════════
// BOSS: one per tier. Cannot be snuck past or disarmed.
// ═══════════════════════════════════════════════════════════════
#[rustfmt::skip]
pub const BOSS_TABLE: AssignmentTable = AssignmentTable {
    group: "boss",
    modulus: 1,
    partitions: &[
        Partition {
            arity: 3,
            rules: &[
                rule(ResourceType::Physical, Slots::Always, Scale::TierTimes(4), ACTION),
                rule(ResourceType::Arcane, Slots::Always, Scale::TierTimes(4), ACTION),
                rule(ResourceType::Divine, Slots::Always, Scale::TierTimes(4), ACTION),
                rule(ResourceType::Stealth, Slots::Never, Scale::Tier, Some(IMMUNE_TEXT)),
                rule(ResourceType::Mechanical, Slots::Never, Scale::Tier, Some(IMMUNE_TEXT)),
            ],
        },
        Partition {
            arity: 1,
            rules: &[rule(ResourceType::Health, Slots::Always, Scale::TierTimes(3), ACTION)],
        },
    ],
};

// ═══════════════════════════════════════════════════════════════
// EQUIPMENT: 4-wide disjoint blocks, one per approach.
// ═══════════════════════════════════════════════════════════════
#[rustfmt::skip]
pub const EQUIPMENT_TABLE: AssignmentTable = AssignmentTable {
    group: "equipment",
    modulus: 20,
    partitions: &[Partition {
        arity: 1,
        rules: &[
            rule(ResourceType::Physical, Slots::Ranges(&[0..4]), Scale::Tier, None),
            rule(ResourceType::Arcane, Slots::Ranges(&[4..8]), Scale::Tier, None),
            rule(ResourceType::Divine, Slots::Ranges(&[8..12]), Scale::Tier, None),
            rule(ResourceType::Stealth, Slots::Ranges(&[12..16]), Scale::Tier, None),
            rule(ResourceType::Mechanical, Slots::Ranges(&[16..20]), Scale::Tier, None),
        ],
    }],
};

// ═══════════════════════════════════════════════════════════════
// CONSUMABLES: 3-wide blocks per approach, the last quarter restores health.
// ═══════════════════════════════════════════════════════════════
#[rustfmt::skip]
pub const CONSUMABLE_TABLE: AssignmentTable = AssignmentTable {
    group: "consumables",
    modulus: 20,
    partitions: &[Partition {
        arity: 1,
        rules: &[
            rule(ResourceType::Physical, Slots::Ranges(&[0..3]), Scale::Tier, None),
            rule(ResourceType::Arcane, Slots::Ranges(&[3..6]), Scale::Tier, None),
            rule(ResourceType::Divine, Slots::Ranges(&[6..9]), Scale::Tier, None),
            rule(ResourceType::Stealth, Slots::Ranges(&[9..12]), Scale::Tier, None),
            rule(ResourceType::Mechanical, Slots::Ranges(&[12..15]), Scale::Tier, None),
            rule(ResourceType::Health, Slots::Ranges(&[15..20]), Scale::Tier, None),
        ],
    }],
};

pub const ALL_TABLES: &[&AssignmentTable] = &[
    &EVENT_TABLE,
    &MONSTER_TABLE,
    &BOSS_TABLE,
    &EQUIPMENT_TABLE,
    &CONSUMABLE_TABLE,
];

pub fn table_for(kind: ObjectKind) -> &'static AssignmentTable {
    match kind {
        ObjectKind::Event => &EVENT_TABLE,
        ObjectKind::Monster => &MONSTER_TABLE,
        ObjectKind::Boss => &BOSS_TABLE,
        ObjectKind::Equipment => &EQUIPMENT_TABLE,
        ObjectKind::Consumable => &CONSUMABLE_TABLE,
    }
}

/// Validates every built-in table, stopping at the first problem.
pub fn validate_all() -> Result<(), TableError> {
    ALL_TABLES.iter().try_for_each(|table| table.validate())
}
