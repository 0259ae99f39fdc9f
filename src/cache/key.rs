//! Cache keys.

use std::fmt;

use crate::types::{Attributes, Family};

/// Identity of one generated fragment.
///
/// Equality is structural over all four fields, so two requests share an
/// entry exactly when name, requested family, class and the ordered
/// attribute list all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub name: String,
    pub family: Family,
    pub class: String,
    pub attrs: Attributes,
}

impl CacheKey {
    pub fn new(
        name: impl Into<String>,
        family: Family,
        class: impl Into<String>,
        attrs: Attributes,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            class: class.into(),
            attrs,
        }
    }
}

/// Diagnostic form: `name|f:family|c:class|a:attrs`.
impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|f:{}|c:{}|a:{}",
            self.name, self.family, self.class, self.attrs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(key: &CacheKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identical_inputs_match() {
        let a = CacheKey::new("close", Family::Bootstrap, "big", Attributes::new().with("id", "x"));
        let b = CacheKey::new("close", Family::Bootstrap, "big", Attributes::new().with("id", "x"));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_each_field_distinguishes() {
        let base = CacheKey::new(
            "close",
            Family::Bootstrap,
            "big",
            Attributes::new().with_flag("hidden"),
        );

        let mut other = base.clone();
        other.name = "check".to_string();
        assert_ne!(base, other);

        let mut other = base.clone();
        other.family = Family::Lucide;
        assert_ne!(base, other);

        let mut other = base.clone();
        other.class = "small".to_string();
        assert_ne!(base, other);

        let mut other = base.clone();
        other.attrs = Attributes::new().with("hidden", "true");
        assert_ne!(base, other);
    }

    #[test]
    fn test_display() {
        let key = CacheKey::new(
            "close",
            Family::MaterialDesign,
            "w-6",
            Attributes::new().with_flag("disabled").with("title", "Close"),
        );
        assert_eq!(key.to_string(), "close|f:material-design|c:w-6|a:disabled,title=Close");
    }
}
