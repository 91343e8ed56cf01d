//! Shared constants for template generation.

pub mod constants;

pub use constants::*;
