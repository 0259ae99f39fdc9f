//! JSON persistence for custom icons.
//!
//! The document is a flat object mapping icon name to template content.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{IconError, Result};

/// Parse a custom icon document.
pub fn custom_icons_from_json(content: &str) -> Result<BTreeMap<String, String>> {
    serde_json::from_str(content).map_err(|e| IconError::Parse {
        message: format!("Invalid custom icon document: {}", e),
        help: Some("Expected a JSON object mapping icon names to SVG templates".to_string()),
    })
}

/// Serialize custom icons as pretty-printed JSON.
pub fn custom_icons_to_json(icons: &BTreeMap<String, String>) -> Result<String> {
    serde_json::to_string_pretty(icons).map_err(|e| IconError::Parse {
        message: format!("Failed to serialize custom icons: {}", e),
        help: None,
    })
}

/// Load a custom icon document from disk.
pub fn load_custom_icons(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read custom icons: {}", e),
    })?;

    custom_icons_from_json(&content)
}

/// Write a custom icon document to disk.
pub fn save_custom_icons(path: &Path, icons: &BTreeMap<String, String>) -> Result<()> {
    let json = custom_icons_to_json(icons)?;
    std::fs::write(path, json).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write custom icons: {}", e),
    })
}
