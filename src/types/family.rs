//! Icon families.
//!
//! Families partition the icon-name space. The set is closed: every
//! built-in vendor set has a variant, plus one explicit `Custom` variant
//! for icons registered at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// A named partition of the icon-name space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Family {
    /// Boxicons (`box`)
    Box,
    /// Bootstrap Icons (`bootstrap`)
    Bootstrap,
    /// Font Awesome (`fa`)
    FontAwesome,
    /// Heroicons (`hero`)
    Hero,
    /// Ionicons (`ionic`)
    Ionic,
    /// Line Awesome (`line`)
    Line,
    /// Lucide (`lucide`)
    Lucide,
    /// Material Design Icons (`material-design`)
    #[default]
    MaterialDesign,
    /// Icons registered at runtime (`custom`)
    Custom,
}

impl Family {
    /// Every family, custom included.
    pub const ALL: [Family; 9] = [
        Family::Box,
        Family::Bootstrap,
        Family::FontAwesome,
        Family::Hero,
        Family::Ionic,
        Family::Line,
        Family::Lucide,
        Family::MaterialDesign,
        Family::Custom,
    ];

    /// The table consulted when a name is missing from the requested family.
    pub const FALLBACK: Family = Family::MaterialDesign;

    /// Parse a family identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "box" => Some(Family::Box),
            "bootstrap" => Some(Family::Bootstrap),
            "fa" => Some(Family::FontAwesome),
            "hero" => Some(Family::Hero),
            "ionic" => Some(Family::Ionic),
            "line" => Some(Family::Line),
            "lucide" => Some(Family::Lucide),
            "material-design" => Some(Family::MaterialDesign),
            "custom" => Some(Family::Custom),
            _ => None,
        }
    }

    /// The identifier used in config files, cache keys and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Family::Box => "box",
            Family::Bootstrap => "bootstrap",
            Family::FontAwesome => "fa",
            Family::Hero => "hero",
            Family::Ionic => "ionic",
            Family::Line => "line",
            Family::Lucide => "lucide",
            Family::MaterialDesign => "material-design",
            Family::Custom => "custom",
        }
    }

    /// Whether this family is backed by a compiled-in table.
    pub fn is_builtin(self) -> bool {
        !matches!(self, Family::Custom)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::from_name(s).ok_or_else(|| IconError::invalid_family(s))
    }
}

impl TryFrom<String> for Family {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Family> for String {
    fn from(family: Family) -> Self {
        family.name().to_string()
    }
}
