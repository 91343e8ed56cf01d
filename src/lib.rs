//! Cordan - Content Template Generator
//!
//! Builds the placeholder content file for Heroes of Cordan: five tiers of
//! events, monsters, bosses, equipment and consumables plus the hero roster,
//! with resource costs assigned by fixed index tables.

pub mod build_info;
pub mod config;
pub mod content;
pub mod core;
pub mod error;

pub use config::TemplateConfig;
pub use content::{build, build_with, GameContent};
pub use error::{TableError, TemplateError};
