//! Content template: data model, assignment tables, generation and output.

pub mod generation;
pub mod heroes;
pub mod messages;
pub mod persistence;
pub mod summary;
pub mod tables;
pub mod types;

pub use generation::{build, build_with};
pub use messages::Messages;
pub use persistence::{load_template, to_json, write_template};
pub use summary::ContentSummary;
pub use types::*;
