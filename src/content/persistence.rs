//! Template encoding and file I/O.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::types::GameContent;
use crate::core::constants::JSON_INDENT;
use crate::error::TemplateError;

/// Encodes the template as 4-space indented JSON.
pub fn to_json(content: &GameContent) -> Result<String, TemplateError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    content.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the template to `path`, creating parent directories as needed.
pub fn write_template(path: &Path, content: &GameContent) -> Result<(), TemplateError> {
    let json = to_json(content)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TemplateError::io(parent, e))?;
        }
    }

    fs::write(path, &json).map_err(|e| TemplateError::io(path, e))?;
    info!(path = %path.display(), bytes = json.len(), "wrote content template");
    Ok(())
}

/// Reads a content file and stamps every object with its tier.
pub fn load_template(path: &Path) -> Result<GameContent, TemplateError> {
    let json = fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
    let mut content: GameContent = serde_json::from_str(&json)?;
    content.infer_object_tiers();
    debug!(path = %path.display(), tiers = content.tiers.len(), "loaded content template");
    Ok(content)
}
