//! Family registry for icon templates.
//!
//! The registry owns one immutable table per built-in family and the
//! mutable custom store, and answers `(family, name)` lookups.
//!
//! # Example
//!
//! ```ignore
//! use icons::registry::FamilyRegistry;
//! use icons::Family;
//!
//! let registry = FamilyRegistry::new();
//! let template = registry.lookup(Family::MaterialDesign, "close");
//! ```

mod builtin;
mod custom;
mod persist;

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::Result;
use crate::types::Family;

pub use builtin::BuiltinIcons;
pub use custom::CustomIconStore;
pub use persist::{
    custom_icons_from_json, custom_icons_to_json, load_custom_icons, save_custom_icons,
};

/// A template resolved from one of the family tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// Compiled-in template.
    Builtin(&'static str),
    /// Template registered at runtime.
    Custom(Arc<str>),
}

impl Deref for Template {
    type Target = str;

    fn deref(&self) -> &str {
        match self {
            Template::Builtin(s) => s,
            Template::Custom(s) => s,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Lookup tables for every family.
#[derive(Debug)]
pub struct FamilyRegistry {
    builtin: HashMap<Family, HashMap<&'static str, &'static str>>,
    custom: CustomIconStore,
}

impl FamilyRegistry {
    /// Create a registry with the compiled-in tables and an empty custom store.
    pub fn new() -> Self {
        let builtin = Family::ALL
            .into_iter()
            .filter(|f| f.is_builtin())
            .map(|family| {
                let table = BuiltinIcons::table(family).iter().copied().collect::<HashMap<_, _>>();
                (family, table)
            })
            .collect();

        Self {
            builtin,
            custom: CustomIconStore::new(),
        }
    }

    /// Check a family identifier against the known set.
    pub fn validate(&self, family: &str) -> Result<Family> {
        family.parse()
    }

    /// Look up a template in one family's table.
    pub fn lookup(&self, family: Family, name: &str) -> Option<Template> {
        match family {
            Family::Custom => self.custom.lookup(name).map(Template::Custom),
            builtin => self
                .builtin
                .get(&builtin)
                .and_then(|table| table.get(name))
                .map(|t| Template::Builtin(*t)),
        }
    }

    /// Names available in one family.
    pub fn names(&self, family: Family) -> Vec<String> {
        match family {
            Family::Custom => self.custom.names(),
            builtin => self
                .builtin
                .get(&builtin)
                .map(|table| table.keys().map(|s| s.to_string()).collect())
                .unwrap_or_default(),
        }
    }

    /// Names across every family. A name present in several families appears once per family.
    pub fn all_names(&self) -> Vec<String> {
        Family::ALL.into_iter().flat_map(|f| self.names(f)).collect()
    }

    /// Total number of icons across every family.
    pub fn count(&self) -> usize {
        self.builtin.values().map(|t| t.len()).sum::<usize>() + self.custom.len()
    }

    /// The mutable custom family.
    pub fn custom(&self) -> &CustomIconStore {
        &self.custom
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
