//! Error types for table validation and template output.

use std::io;
use std::ops::Range;
use std::path::PathBuf;

use crate::content::types::ResourceType;

/// An assignment table that cannot produce a well-formed template.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("{group}: modulus must be greater than zero")]
    ZeroModulus { group: &'static str },

    #[error("{group}: {resource} has an empty range {}..{}", .range.start, .range.end)]
    EmptyRange {
        group: &'static str,
        resource: ResourceType,
        range: Range<u32>,
    },

    #[error(
        "{group}: {resource} range {}..{} exceeds modulus {modulus}",
        .range.start,
        .range.end
    )]
    RangeOutOfBounds {
        group: &'static str,
        resource: ResourceType,
        range: Range<u32>,
        modulus: u32,
    },

    #[error("{group}: {resource} is assigned by more than one rule")]
    DuplicateResource {
        group: &'static str,
        resource: ResourceType,
    },

    #[error(
        "{group}: partition {partition} activates {found} resource(s) for indices {}..{}, expected {expected}",
        .indices.start,
        .indices.end
    )]
    Arity {
        group: &'static str,
        partition: usize,
        indices: Range<u32>,
        expected: usize,
        found: usize,
    },
}

/// Anything that can go wrong while building or writing a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid assignment table: {0}")]
    Table(#[from] TableError),

    #[error("invalid template config: {0}")]
    Config(String),

    #[error("template JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("template is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TemplateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }
}
