//! Memoization of generated icon markup.
//!
//! Each key owns a slot in a concurrent map. The first requester for a key
//! locks its slot and generates; concurrent requesters for the same key
//! block on that slot and read the stored value once it is complete.
//! Requests for different keys never contend beyond a shard lookup.
//!
//! A failed generation stores nothing and retires its slot, so the next
//! request retries and failing keys do not accumulate. Successful entries
//! are never evicted.

mod key;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::error::Result;
use crate::types::Family;

pub use key::CacheKey;

type Slot = Arc<Mutex<Option<CachedIcon>>>;

/// Generated markup and the family whose template produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedIcon {
    pub markup: Arc<str>,
    /// The family that supplied the template, after any fallback.
    pub family: Family,
}

impl CachedIcon {
    pub fn new(markup: impl Into<Arc<str>>, family: Family) -> Self {
        Self {
            markup: markup.into(),
            family,
        }
    }

    /// Whether the markup came from a family other than `requested`.
    pub fn is_fallback(&self, requested: Family) -> bool {
        self.family != requested
    }
}

/// Thread-safe, load-once cache of generated markup.
#[derive(Debug, Default)]
pub struct IconCache {
    slots: DashMap<CacheKey, Slot>,
    generations: AtomicUsize,
}

impl IconCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached icon for `key`, generating it on first use.
    ///
    /// `generate` runs at most once per key among successful calls. An error
    /// from `generate` is returned to this caller and nothing is stored.
    pub fn get_or_generate<F>(&self, key: &CacheKey, generate: F) -> Result<CachedIcon>
    where
        F: FnOnce() -> Result<CachedIcon>,
    {
        loop {
            let slot = match self.slots.get(key) {
                Some(slot) => Arc::clone(slot.value()),
                None => Arc::clone(self.slots.entry(key.clone()).or_default().value()),
            };

            let mut entry = slot.lock();
            if let Some(icon) = entry.as_ref() {
                tracing::trace!(key = %key, "icon cache hit");
                return Ok(icon.clone());
            }

            // a failed generation may have retired this slot while we waited
            let current = self
                .slots
                .get(key)
                .is_some_and(|s| Arc::ptr_eq(s.value(), &slot));
            if !current {
                continue;
            }

            match generate() {
                Ok(icon) => {
                    *entry = Some(icon.clone());
                    self.generations.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(key = %key, bytes = icon.markup.len(), "generated icon");
                    return Ok(icon);
                }
                Err(err) => {
                    drop(entry);
                    // a slot held by a waiter is left for that waiter to fill or retire
                    self.slots.remove_if(key, |_, s| {
                        Arc::ptr_eq(s, &slot) && s.try_lock().is_some_and(|e| e.is_none())
                    });
                    tracing::debug!(key = %key, "icon generation failed");
                    return Err(err);
                }
            }
        }
    }

    /// Get a cached icon without generating.
    pub fn get(&self, key: &CacheKey) -> Option<CachedIcon> {
        let slot = self.slots.get(key).map(|s| Arc::clone(s.value()))?;
        let entry = slot.lock();
        entry.clone()
    }

    /// Snapshot of keys with completed entries.
    pub fn keys(&self) -> Vec<CacheKey> {
        let slots: Vec<(CacheKey, Slot)> = self
            .slots
            .iter()
            .map(|e| (e.key().clone(), Arc::clone(e.value())))
            .collect();

        slots
            .into_iter()
            .filter(|(_, slot)| slot.lock().is_some())
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of completed entries.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful generations since construction.
    pub fn generations(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }
}
