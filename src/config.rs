//! Service configuration (icons.yaml).
//!
//! Sets the default family, attribute escaping and an optional custom icon
//! document loaded at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::render::AttrEscape;
use crate::types::Family;

/// Configuration loaded from icons.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Family used when a request names none.
    pub default_family: Family,

    /// HTML-escape attribute values and class tokens.
    /// Off by default: values are inserted verbatim.
    pub escape_attributes: bool,

    /// Custom icon JSON document to import at startup.
    pub custom_icons: Option<PathBuf>,
}

impl IconConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;

        // relative custom icon paths are relative to the config file
        if let (Some(custom), Some(dir)) = (&config.custom_icons, path.parent()) {
            if custom.is_relative() {
                config.custom_icons = Some(dir.join(custom));
            }
        }

        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check icons.yaml syntax and family names".to_string()),
        })
    }

    /// The attribute escaping mode this config selects.
    pub fn escape(&self) -> AttrEscape {
        if self.escape_attributes {
            AttrEscape::Html
        } else {
            AttrEscape::None
        }
    }
}
