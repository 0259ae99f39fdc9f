//! Resolution with fallback.
//!
//! A name is looked up in the requested family first, then in
//! `Family::FALLBACK`. The fallback table is fixed and does not follow the
//! configurable default family.

use crate::error::{IconError, Result};
use crate::registry::{FamilyRegistry, Template};
use crate::types::Family;

/// A template together with the family that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub template: Template,
    pub family: Family,
}

impl Resolved {
    /// Whether the template came from the fallback table rather than the requested family.
    pub fn is_fallback(&self, requested: Family) -> bool {
        self.family != requested
    }
}

/// Resolve `name` in `family`, falling back to `Family::FALLBACK`.
pub fn resolve(registry: &FamilyRegistry, name: &str, family: Family) -> Result<Resolved> {
    if let Some(template) = registry.lookup(family, name) {
        return Ok(Resolved { template, family });
    }

    if family != Family::FALLBACK {
        if let Some(template) = registry.lookup(Family::FALLBACK, name) {
            tracing::warn!(
                icon = name,
                requested = %family,
                fallback = %Family::FALLBACK,
                "icon missing from requested family, using fallback"
            );
            return Ok(Resolved {
                template,
                family: Family::FALLBACK,
            });
        }
    }

    Err(IconError::not_found(name))
}

/// Resolve with a family given as a string. Unknown families fail without fallback.
pub fn resolve_named(registry: &FamilyRegistry, name: &str, family: &str) -> Result<Resolved> {
    let family = registry.validate(family)?;
    resolve(registry, name, family)
}
