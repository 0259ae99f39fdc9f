//! Runtime-registered icons for the `custom` family.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{IconError, Result};

/// Mutable name -> template table backing `Family::Custom`.
///
/// `add` never overwrites; `bulk_load` always does. Both take the same
/// write lock, so a concurrent `add` either sees the imported entry or
/// lands before the import overwrites it.
#[derive(Debug, Default)]
pub struct CustomIconStore {
    icons: RwLock<HashMap<String, Arc<str>>>,
}

impl CustomIconStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new icon. Fails if the name is already taken.
    pub fn add(&self, name: impl Into<String>, content: impl Into<String>) -> Result<()> {
        let name = name.into();
        let mut icons = self.icons.write();

        if icons.contains_key(&name) {
            tracing::warn!(icon = %name, "rejected duplicate custom icon");
            return Err(IconError::AlreadyExists { name });
        }

        let content: String = content.into();
        tracing::debug!(icon = %name, "registered custom icon");
        icons.insert(name, Arc::from(content));
        Ok(())
    }

    /// Merge icons from an external source, replacing same-named entries.
    ///
    /// The store knows nothing of rendered markup; anything already cached
    /// from a replaced template stays cached.
    pub fn bulk_load<I, K, V>(&self, icons: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = self.icons.write();
        let mut loaded = 0;
        for (name, content) in icons {
            let content: String = content.into();
            table.insert(name.into(), Arc::from(content));
            loaded += 1;
        }
        tracing::debug!(loaded, total = table.len(), "imported custom icons");
        loaded
    }

    /// Snapshot of every custom icon, sorted by name.
    pub fn export(&self) -> BTreeMap<String, String> {
        self.icons
            .read()
            .iter()
            .map(|(name, content)| (name.clone(), content.to_string()))
            .collect()
    }

    /// Get a template by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<str>> {
        self.icons.read().get(name).cloned()
    }

    /// All registered names.
    pub fn names(&self) -> Vec<String> {
        self.icons.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.icons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.read().is_empty()
    }
}
