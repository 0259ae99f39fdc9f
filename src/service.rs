//! The icon service.
//!
//! `Icons` owns the family registry, the custom store, the markup cache and
//! the default family. It is cheap to clone; clones share state. Hosts
//! construct one at startup and hand clones to their renderers.
//!
//! # Example
//!
//! ```ignore
//! use icons::{Attributes, Icons, IconProps, Family};
//!
//! let icons = Icons::new();
//! let close = icons.icon_with("close", IconProps::new().family(Family::Bootstrap).class("w-6"));
//! let markup = close.emit(&Attributes::new().with("aria-hidden", "true"))?;
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::cache::{CacheKey, CachedIcon, IconCache};
use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::registry::{self, FamilyRegistry};
use crate::render::{self, AttrEscape};
use crate::resolve::{resolve, Resolved};
use crate::types::{Attributes, Family, IconProps};

#[derive(Debug)]
struct Inner {
    registry: FamilyRegistry,
    cache: IconCache,
    default_family: RwLock<Family>,
    escape: AttrEscape,
}

/// Shared icon resolution and caching service.
#[derive(Debug, Clone)]
pub struct Icons {
    inner: Arc<Inner>,
}

/// Names gathered from several families, plus any per-family errors.
#[derive(Debug)]
pub struct IconListing {
    pub names: Vec<String>,
    /// Aggregate of every invalid family, if any.
    pub error: Option<IconError>,
}

impl IconListing {
    /// Fail if any family was invalid, otherwise return the names.
    pub fn into_result(self) -> Result<Vec<String>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.names),
        }
    }
}

impl Icons {
    /// Create a service with default settings.
    pub fn new() -> Self {
        Self::with_settings(Family::default(), AttrEscape::default())
    }

    /// Create a service with an explicit default family and escaping mode.
    pub fn with_settings(default_family: Family, escape: AttrEscape) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry: FamilyRegistry::new(),
                cache: IconCache::new(),
                default_family: RwLock::new(default_family),
                escape,
            }),
        }
    }

    /// Create a service from configuration, importing the custom icon document if set.
    pub fn from_config(config: &IconConfig) -> Result<Self> {
        let icons = Self::with_settings(config.default_family, config.escape());
        if let Some(path) = &config.custom_icons {
            icons.load_custom_icons(path)?;
        }
        Ok(icons)
    }

    /// Handle for `name` in the current default family.
    pub fn icon(&self, name: impl Into<String>) -> IconHandle {
        self.icon_with(name, IconProps::default())
    }

    /// Handle for `name` with explicit props.
    ///
    /// A missing family is fixed to the default family at this point; later
    /// default changes do not affect existing handles.
    pub fn icon_with(&self, name: impl Into<String>, props: impl Into<IconProps>) -> IconHandle {
        let props = props.into();
        IconHandle {
            icons: self.clone(),
            name: name.into(),
            family: props.family.unwrap_or_else(|| self.default_family()),
            class: props.class,
            attrs: props.attrs,
        }
    }

    /// Handle for `name` in a family given by identifier.
    pub fn icon_in(&self, name: impl Into<String>, family: &str) -> Result<IconHandle> {
        let family = self.inner.registry.validate(family)?;
        Ok(self.icon_with(name, family))
    }

    /// Resolve a template without rendering or caching.
    pub fn resolve(&self, name: &str, family: Option<Family>) -> Result<Resolved> {
        let family = family.unwrap_or_else(|| self.default_family());
        resolve(&self.inner.registry, name, family)
    }

    /// Change the default family by identifier. Unknown identifiers leave it unchanged.
    pub fn set_default_family(&self, family: &str) -> Result<()> {
        let family = self.inner.registry.validate(family)?;
        self.set_default(family);
        Ok(())
    }

    /// Change the default family.
    pub fn set_default(&self, family: Family) {
        let previous = std::mem::replace(&mut *self.inner.default_family.write(), family);
        tracing::debug!(from = %previous, to = %family, "default icon family changed");
    }

    /// The current default family.
    pub fn default_family(&self) -> Family {
        *self.inner.default_family.read()
    }

    /// Register a custom icon. Existing names are never overwritten.
    ///
    /// Markup already cached is not invalidated. A name that previously fell
    /// back to the fallback table keeps serving that markup for keys that were
    /// generated before registration.
    pub fn add_custom_icon(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<()> {
        self.inner.registry.custom().add(name, content)
    }

    /// Snapshot of the custom family for persistence.
    pub fn export_custom_icons(&self) -> BTreeMap<String, String> {
        self.inner.registry.custom().export()
    }

    /// Merge icons into the custom family, replacing same-named entries.
    ///
    /// Cached markup is never invalidated: keys generated from a replaced
    /// template keep returning the old markup for the life of the service.
    /// Import before rendering, or build a fresh `Icons`, to pick up changes.
    pub fn import_custom_icons<I, K, V>(&self, icons: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.registry.custom().bulk_load(icons)
    }

    /// Import a custom icon JSON document.
    pub fn load_custom_icons(&self, path: &Path) -> Result<usize> {
        let icons = registry::load_custom_icons(path)?;
        let loaded = self.import_custom_icons(icons);
        tracing::info!(path = %path.display(), loaded, "loaded custom icons");
        Ok(loaded)
    }

    /// Write the custom family to a JSON document.
    pub fn save_custom_icons(&self, path: &Path) -> Result<()> {
        registry::save_custom_icons(path, &self.export_custom_icons())
    }

    /// List icon names in the given families, or in every family if none are given.
    ///
    /// Unknown family identifiers do not stop the listing; they are collected
    /// into one aggregate error alongside the names that were found.
    pub fn list_available_icons(&self, families: &[&str]) -> IconListing {
        if families.is_empty() {
            return IconListing {
                names: self.inner.registry.all_names(),
                error: None,
            };
        }

        let mut names = Vec::new();
        let mut errors = Vec::new();
        for family in families {
            match self.inner.registry.validate(family) {
                Ok(family) => names.extend(self.inner.registry.names(family)),
                Err(e) => errors.push(e),
            }
        }

        IconListing {
            names,
            error: IconError::aggregate(errors),
        }
    }

    /// Total number of icons across every family.
    pub fn available_icon_count(&self) -> usize {
        self.inner.registry.count()
    }

    /// Keys of every cached fragment.
    pub fn cached_keys(&self) -> Vec<CacheKey> {
        self.inner.cache.keys()
    }

    /// The underlying cache, for diagnostics.
    pub fn cache(&self) -> &IconCache {
        &self.inner.cache
    }

    /// The underlying registry.
    pub fn registry(&self) -> &FamilyRegistry {
        &self.inner.registry
    }

    fn generate(
        &self,
        name: &str,
        family: Family,
        class: &str,
        attrs: &Attributes,
    ) -> Result<CachedIcon> {
        let resolved = resolve(&self.inner.registry, name, family)?;
        let markup = render::render(&resolved.template, class, attrs, self.inner.escape)?;
        Ok(CachedIcon::new(markup, resolved.family))
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

/// A lazily rendered icon reference.
///
/// Creating a handle does no lookup; markup is generated (or read from the
/// cache) when the handle is emitted.
#[derive(Debug, Clone)]
pub struct IconHandle {
    icons: Icons,
    name: String,
    family: Family,
    class: String,
    attrs: Attributes,
}

impl IconHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requested family (before any fallback).
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Replace the class token.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Replace the handle's own attributes.
    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Cache key for rendering this handle with `attrs`.
    pub fn cache_key(&self, attrs: &Attributes) -> CacheKey {
        CacheKey::new(self.name.clone(), self.family, self.class.clone(), attrs.clone())
    }

    /// Produce markup with the given attributes.
    pub fn emit(&self, attrs: &Attributes) -> Result<Arc<str>> {
        self.emit_resolved(attrs).map(|icon| icon.markup)
    }

    /// Produce markup along with the family that actually supplied it.
    pub fn emit_resolved(&self, attrs: &Attributes) -> Result<CachedIcon> {
        let key = self.cache_key(attrs);
        self.icons
            .inner
            .cache
            .get_or_generate(&key, || {
                self.icons.generate(&self.name, self.family, &self.class, attrs)
            })
            .map_err(|source| IconError::GenerationFailed {
                name: self.name.clone(),
                family: self.family.to_string(),
                attrs: attrs.to_string(),
                source: Box::new(source),
            })
    }

    /// Produce markup with the handle's own attributes.
    pub fn render(&self) -> Result<Arc<str>> {
        self.emit(&self.attrs)
    }

    /// Write markup with the handle's own attributes.
    pub fn render_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let markup = self.render()?;
        writer.write_all(markup.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Barrier;
    use std::thread;
    use tempfile::tempdir;

    const FOO: &str = "<svg class=\"%s\"%s>foo</svg>";

    #[test]
    fn test_identical_requests_share_key_and_markup() {
        let icons = Icons::new();
        let attrs = Attributes::new().with("title", "Close");

        let a = icons.icon_with("close", IconProps::new().class("big"));
        let b = icons.icon_with("close", IconProps::new().class("big"));

        assert_eq!(a.cache_key(&attrs), b.cache_key(&attrs));
        assert_eq!(a.emit(&attrs).unwrap(), b.emit(&attrs).unwrap());
        assert_eq!(icons.cache().generations(), 1);
    }

    #[test]
    fn test_fallback_resolution() {
        let icons = Icons::new();

        let resolved = icons.resolve("alert", Some(Family::Bootstrap)).unwrap();
        assert_eq!(resolved.family, Family::MaterialDesign);

        let markup = icons
            .icon_with("alert", Family::Bootstrap)
            .emit(&Attributes::new())
            .unwrap();
        assert!(markup.contains("M13 14H11V9H13"));
    }

    #[test]
    fn test_not_found_is_not_cached() {
        let icons = Icons::new();
        let handle = icons.icon_with("nonexistent", Family::Lucide);

        let err = handle.emit(&Attributes::new()).unwrap_err();
        assert!(matches!(err, IconError::GenerationFailed { .. }));
        assert!(matches!(err.root_cause(), IconError::NotFound { name } if name == "nonexistent"));
        assert!(icons.cached_keys().is_empty());
    }

    #[test]
    fn test_retry_after_registering_custom_icon() {
        let icons = Icons::new();
        let handle = icons.icon_with("logo", IconProps::new().family(Family::Custom).class("c"));

        assert!(handle.emit(&Attributes::new()).is_err());

        icons.add_custom_icon("logo", FOO).unwrap();
        let markup = handle.emit(&Attributes::new()).unwrap();
        assert_eq!(&*markup, "<svg class=\"c\">foo</svg>");
    }

    #[test]
    fn test_malformed_custom_template() {
        let icons = Icons::new();
        icons.add_custom_icon("broken", "<svg class=\"%s\">").unwrap();

        let err = icons
            .icon_with("broken", Family::Custom)
            .emit(&Attributes::new())
            .unwrap_err();
        assert!(matches!(err.root_cause(), IconError::MalformedTemplate { slots: 1 }));
    }

    #[test]
    fn test_concurrent_emits_generate_once() {
        let icons = Icons::new();
        let barrier = Arc::new(Barrier::new(100));

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let handle = icons.icon_with("close", IconProps::new().class("x"));
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    handle.emit(&Attributes::new().with_flag("hidden")).unwrap()
                })
            })
            .collect();

        let results: Vec<Arc<str>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(icons.cache().generations(), 1);
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(icons.cached_keys().len(), 1);
    }

    #[test]
    fn test_add_custom_icon_twice() {
        let icons = Icons::new();
        icons.add_custom_icon("foo", "<svg>%s%s</svg>").unwrap();

        let err = icons.add_custom_icon("foo", "<g>%s%s</g>").unwrap_err();
        assert!(matches!(err, IconError::AlreadyExists { .. }));
        assert_eq!(
            icons.export_custom_icons().get("foo").map(|s| s.as_str()),
            Some("<svg>%s%s</svg>")
        );
    }

    #[test]
    fn test_set_default_family_rejects_unknown() {
        let icons = Icons::new();
        icons.set_default_family("bootstrap").unwrap();

        let err = icons.set_default_family("bogus").unwrap_err();
        assert!(matches!(err, IconError::InvalidFamily { family } if family == "bogus"));
        assert_eq!(icons.default_family(), Family::Bootstrap);

        let handle = icons.icon("house");
        assert_eq!(handle.family(), Family::Bootstrap);
        assert!(handle.render().is_ok());
    }

    #[test]
    fn test_default_change_does_not_affect_existing_handles() {
        let icons = Icons::new();
        let before = icons.icon("home");
        icons.set_default(Family::Hero);
        let after = icons.icon("home");

        assert_eq!(before.family(), Family::MaterialDesign);
        assert_eq!(after.family(), Family::Hero);
        assert_ne!(before.render().unwrap(), after.render().unwrap());
    }

    #[test]
    fn test_list_available_icons_aggregates_errors() {
        let icons = Icons::new();
        let listing = icons.list_available_icons(&["bogus", "material-design"]);

        let mut expected = icons.registry().names(Family::MaterialDesign);
        expected.sort();
        let mut names = listing.names.clone();
        names.sort();
        assert_eq!(names, expected);

        match listing.error {
            Some(IconError::Multiple { errors }) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    &errors[0],
                    IconError::InvalidFamily { family } if family == "bogus"
                ));
            }
            other => panic!("expected aggregate error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_all_icons() {
        let icons = Icons::new();
        let listing = icons.list_available_icons(&[]);
        assert!(listing.error.is_none());
        assert_eq!(listing.names.len(), icons.available_icon_count());
    }

    #[test]
    fn test_icon_in_validates_family() {
        let icons = Icons::new();
        assert!(matches!(
            icons.icon_in("close", "nope"),
            Err(IconError::InvalidFamily { .. })
        ));
        assert_eq!(icons.icon_in("x", "lucide").unwrap().family(), Family::Lucide);
    }

    #[test]
    fn test_attribute_order_produces_distinct_entries() {
        let icons = Icons::new();
        let handle = icons.icon("check");
        let a = Attributes::new().with("x", "1").with("y", "2");
        let b = Attributes::new().with("y", "2").with("x", "1");

        handle.emit(&a).unwrap();
        handle.emit(&b).unwrap();

        assert_eq!(icons.cached_keys().len(), 2);
    }

    #[test]
    fn test_escaping_service() {
        let icons = Icons::with_settings(Family::MaterialDesign, AttrEscape::Html);
        icons.add_custom_icon("foo", FOO).unwrap();

        let markup = icons
            .icon_with("foo", Family::Custom)
            .emit(&Attributes::new().with("title", "<b>"))
            .unwrap();
        assert_eq!(&*markup, "<svg class=\"\" title=\"&lt;b&gt;\">foo</svg>");
    }

    #[test]
    fn test_escaping_service_rejects_unsafe_attribute_name() {
        let icons = Icons::with_settings(Family::MaterialDesign, AttrEscape::Html);
        let attrs = Attributes::new().with("x\"><script>alert(1)</script", "1");

        let err = icons.icon("close").emit(&attrs).unwrap_err();
        assert!(matches!(err.root_cause(), IconError::InvalidAttribute { .. }));
        assert!(icons.cached_keys().is_empty());
    }

    #[test]
    fn test_render_to_writer() {
        let icons = Icons::new();
        icons.add_custom_icon("foo", FOO).unwrap();

        let mut out = Vec::new();
        icons
            .icon_with("foo", IconProps::new().family(Family::Custom).class("big"))
            .with_attrs(Attributes::new().with_flag("disabled").with("title", "Icon"))
            .render_to(&mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<svg class=\"big\" disabled title=\"Icon\">foo</svg>"
        );
    }

    #[test]
    fn test_save_and_load_custom_icons() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");

        let icons = Icons::new();
        icons.add_custom_icon("foo", FOO).unwrap();
        icons.save_custom_icons(&path).unwrap();

        let fresh = Icons::new();
        assert_eq!(fresh.load_custom_icons(&path).unwrap(), 1);
        assert_eq!(fresh.export_custom_icons(), icons.export_custom_icons());
    }

    #[test]
    fn test_from_config() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.json");
        std::fs::write(&custom, r#"{"logo": "<svg class=\"%s\"%s/>"}"#).unwrap();

        let config = IconConfig {
            default_family: Family::Custom,
            escape_attributes: false,
            custom_icons: Some(custom),
        };
        let icons = Icons::from_config(&config).unwrap();

        assert_eq!(icons.default_family(), Family::Custom);
        assert_eq!(&*icons.icon("logo").render().unwrap(), "<svg class=\"\"/>");
        // names missing from custom still reach the fallback table
        assert!(icons.icon("close").render().is_ok());
    }

    #[test]
    fn test_fresh_services_are_isolated() {
        let a = Icons::new();
        let b = Icons::new();
        a.add_custom_icon("only-a", FOO).unwrap();
        a.icon("close").render().unwrap();

        assert!(b.export_custom_icons().is_empty());
        assert!(b.cached_keys().is_empty());
    }

    #[test]
    fn test_emit_resolved_reports_fallback_family() {
        let icons = Icons::new();
        let handle = icons.icon_with("alert", Family::Lucide);

        let first = handle.emit_resolved(&Attributes::new()).unwrap();
        assert_eq!(first.family, Family::MaterialDesign);
        assert!(first.is_fallback(handle.family()));

        // a cache hit still knows where the markup came from
        let again = handle.emit_resolved(&Attributes::new()).unwrap();
        assert_eq!(again, first);
        assert_eq!(icons.cache().generations(), 1);

        let direct = icons.icon("alert").emit_resolved(&Attributes::new()).unwrap();
        assert!(!direct.is_fallback(Family::MaterialDesign));
    }

    #[test]
    fn test_import_does_not_invalidate_cached_markup() {
        let icons = Icons::new();
        icons.add_custom_icon("logo", FOO).unwrap();
        let handle = icons.icon_with("logo", Family::Custom);
        let before = handle.render().unwrap();

        icons.import_custom_icons([("logo", "<svg class=\"%s\"%s>new</svg>")]);

        assert_eq!(handle.render().unwrap(), before);
        let fresh = handle.clone().with_class("other").render().unwrap();
        assert_eq!(&*fresh, "<svg class=\"other\">new</svg>");
    }
}
