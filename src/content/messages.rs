//! Placeholder message lists shown at fixed points in a run.

use serde::{Deserialize, Serialize};

use crate::core::constants::MESSAGES_PER_CATEGORY;

/// Message lists keyed by the moment they are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(rename = "enter_dungeon_messages")]
    pub enter_dungeon: Vec<String>,
    /// Shown after the main enter-dungeon message. The game's content loader
    /// reads this key, so the template emits it alongside the other eight.
    #[serde(rename = "enter_dungeon_closing_messages", default)]
    pub enter_dungeon_closing: Vec<String>,
    #[serde(rename = "restart_messages")]
    pub restart: Vec<String>,
    #[serde(rename = "short_rest_messages")]
    pub short_rest: Vec<String>,
    #[serde(rename = "long_rest_messages")]
    pub long_rest: Vec<String>,
    #[serde(rename = "cure_messages")]
    pub cure: Vec<String>,
    #[serde(rename = "mass_cure_messages")]
    pub mass_cure: Vec<String>,
    #[serde(rename = "out_of_time_messages")]
    pub out_of_time: Vec<String>,
    #[serde(rename = "out_of_health_messages")]
    pub out_of_health: Vec<String>,
}

impl Messages {
    /// Three numbered placeholders per category, e.g. "SHORT REST MESSAGE 2".
    pub fn placeholders() -> Self {
        Self {
            enter_dungeon: numbered("ENTRY"),
            enter_dungeon_closing: numbered("ENTRY CLOSING"),
            restart: numbered("RESTART"),
            short_rest: numbered("SHORT REST"),
            long_rest: numbered("LONG REST"),
            cure: numbered("CURE"),
            mass_cure: numbered("MASS CURE"),
            out_of_time: numbered("OUT OF TIME"),
            out_of_health: numbered("OUT OF HEALTH"),
        }
    }

    /// Every category with its wire key.
    pub fn categories(&self) -> [(&'static str, &[String]); 9] {
        [
            ("enter_dungeon_messages", &self.enter_dungeon[..]),
            ("enter_dungeon_closing_messages", &self.enter_dungeon_closing[..]),
            ("restart_messages", &self.restart[..]),
            ("short_rest_messages", &self.short_rest[..]),
            ("long_rest_messages", &self.long_rest[..]),
            ("cure_messages", &self.cure[..]),
            ("mass_cure_messages", &self.mass_cure[..]),
            ("out_of_time_messages", &self.out_of_time[..]),
            ("out_of_health_messages", &self.out_of_health[..]),
        ]
    }
}

fn numbered(label: &str) -> Vec<String> {
    (1..=MESSAGES_PER_CATEGORY)
        .map(|n| format!("{} MESSAGE {}", label, n))
        .collect()
}
