//! Resource-distribution summary of a content template.
//!
//! Lets a designer see at a glance how many objects of each kind lean on each
//! resource type, tier by tier, before filling in the placeholder text.

use serde::Serialize;
use std::collections::BTreeMap;

use super::types::{GameContent, ObjectKind, ResourceType};

/// Counts for one object kind within one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    pub kind: &'static str,
    pub count: usize,
    /// Objects with a non-zero value for the resource
    pub emphasis: BTreeMap<ResourceType, usize>,
    /// Sum of values for the resource across the batch
    pub total_value: BTreeMap<ResourceType, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub tier: u32,
    pub kinds: Vec<KindSummary>,
}

impl TierSummary {
    pub fn kind(&self, kind: ObjectKind) -> Option<&KindSummary> {
        self.kinds.iter().find(|k| k.kind == kind.label())
    }
}

/// Aggregated view of a whole template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub tiers: Vec<TierSummary>,
    pub heroes: usize,
    /// Heroes contributing more than one resource type at level 1
    pub hybrid_heroes: usize,
    pub message_categories: usize,
}

impl ContentSummary {
    pub fn from_content(content: &GameContent) -> Self {
        let tiers = content
            .tiers
            .iter()
            .map(|(number, tier)| TierSummary {
                tier: *number,
                kinds: ObjectKind::ALL
                    .iter()
                    .map(|kind| {
                        let objects = tier.objects(*kind);
                        let mut emphasis = BTreeMap::new();
                        let mut total_value = BTreeMap::new();
                        for object in objects {
                            for (resource, value) in &object.resources {
                                *total_value.entry(*resource).or_insert(0) += value.value;
                                if value.is_active() {
                                    *emphasis.entry(*resource).or_insert(0) += 1;
                                }
                            }
                        }
                        KindSummary {
                            kind: kind.label(),
                            count: objects.len(),
                            emphasis,
                            total_value,
                        }
                    })
                    .collect(),
            })
            .collect();

        let hybrid_heroes = content
            .heroes
            .iter()
            .filter(|h| h.resources_at(1).is_some_and(|r| r.len() > 1))
            .count();

        Self {
            tiers,
            heroes: content.heroes.len(),
            hybrid_heroes,
            message_categories: content.messages.categories().len(),
        }
    }

    pub fn tier(&self, number: u32) -> Option<&TierSummary> {
        self.tiers.iter().find(|t| t.tier == number)
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    CONTENT TEMPLATE SUMMARY\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        for tier in &self.tiers {
            report.push_str(&format!("TIER {}\n", tier.tier));
            report.push_str(&format!("  {:<12} {:>5}", "", "count"));
            for resource in ResourceType::ALL {
                report.push_str(&format!(" {:>5}", &resource.key()[..4]));
            }
            report.push('\n');

            for kind in &tier.kinds {
                report.push_str(&format!("  {:<12} {:>5}", kind.kind, kind.count));
                for resource in ResourceType::ALL {
                    match kind.emphasis.get(&resource) {
                        Some(n) => report.push_str(&format!(" {:>5}", n)),
                        None => report.push_str(&format!(" {:>5}", "-")),
                    }
                }
                report.push('\n');
            }
            report.push('\n');
        }

        report.push_str(&format!(
            "HEROES: {} ({} hybrid)\n",
            self.heroes, self.hybrid_heroes
        ));
        report.push_str(&format!("MESSAGE CATEGORIES: {}\n", self.message_categories));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::generation::build;

    #[test]
    fn test_summary_counts_default_template() {
        let summary = ContentSummary::from_content(&build().unwrap());
        assert_eq!(summary.tiers.len(), 5);
        assert_eq!(summary.heroes, 32);
        assert_eq!(summary.hybrid_heroes, 22);

        let tier = summary.tier(1).unwrap();
        assert_eq!(tier.kind(ObjectKind::Event).unwrap().count, 30);
        assert_eq!(tier.kind(ObjectKind::Boss).unwrap().count, 1);
    }

    #[test]
    fn test_emphasis_matches_tables() {
        let summary = ContentSummary::from_content(&build().unwrap());
        let tier = summary.tier(2).unwrap();

        let events = tier.kind(ObjectKind::Event).unwrap();
        assert_eq!(events.emphasis[&ResourceType::Physical], 6);
        assert_eq!(events.emphasis[&ResourceType::Health], 15);
        assert_eq!(events.emphasis[&ResourceType::Time], 15);

        // Every approach appears in four 2-wide monster blocks
        let monsters = tier.kind(ObjectKind::Monster).unwrap();
        assert_eq!(monsters.emphasis[&ResourceType::Stealth], 8);
        assert_eq!(monsters.emphasis[&ResourceType::Health], 20);
        assert_eq!(monsters.total_value[&ResourceType::Health], 60);

        let consumables = tier.kind(ObjectKind::Consumable).unwrap();
        assert_eq!(consumables.emphasis[&ResourceType::Health], 5);
        assert_eq!(consumables.total_value[&ResourceType::Health], 10);

        let boss = tier.kind(ObjectKind::Boss).unwrap();
        assert!(!boss.emphasis.contains_key(&ResourceType::Stealth));
        assert_eq!(boss.total_value[&ResourceType::Stealth], 0);
    }

    #[test]
    fn test_text_report_lists_every_tier() {
        let text = ContentSummary::from_content(&build().unwrap()).to_text();
        for tier in 1..=5 {
            assert!(text.contains(&format!("TIER {}", tier)));
        }
        assert!(text.contains("HEROES: 32 (22 hybrid)"));
    }

    #[test]
    fn test_json_report() {
        let json = ContentSummary::from_content(&build().unwrap())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["heroes"], 32);
        assert_eq!(value["tiers"][0]["kinds"][0]["kind"], "EVENT");
    }
}
