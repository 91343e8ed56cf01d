// Template shape
pub const TIER_COUNT: u32 = 5;
pub const MAX_TIERS: u32 = 100;
pub const EVENTS_PER_TIER: u32 = 30;
pub const MONSTERS_PER_TIER: u32 = 20;
pub const EQUIPMENT_PER_TIER: u32 = 20;
pub const CONSUMABLES_PER_TIER: u32 = 20;
pub const HERO_COUNT: u32 = 32;
pub const MESSAGES_PER_CATEGORY: u32 = 3;
pub const DESCRIPTIONS_PER_OBJECT: u32 = 3;

// Heroes with index below this are single-resource specialists
pub const SPECIALIST_HERO_COUNT: u32 = 10;
pub const HERO_LEVELS: u32 = 5;

// Placeholder text
pub const ACTION_TEXT: &str = "ACTION TEXT";
pub const IMMUNE_TEXT: &str = "N/A";
pub const FLAVOR_TEXT: &str = "FLAVOR TEXT";
pub const QUOTE_TEXT: &str = "QUOTE TEXT";
pub const CLASS_PLACEHOLDER: &str = "CLASS PLACEHOLDER";
pub const DESCRIPTION_PLACEHOLDER: &str = "DESCRIPTION PLACEHOLDER";

// Output
pub const DEFAULT_OUTPUT_FILE: &str = "heroes_of_cordan.json";
pub const JSON_INDENT: &[u8] = b"    ";
