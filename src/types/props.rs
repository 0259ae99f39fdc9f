//! Per-request presentation properties.

use super::{Attributes, Family};

/// Options for a single icon request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconProps {
    /// Family to resolve in. `None` uses the service default at handle creation.
    pub family: Option<Family>,

    /// Class token substituted into the template's first slot.
    pub class: String,

    /// Attributes rendered into the template's second slot.
    pub attrs: Attributes,
}

impl IconProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(mut self, family: Family) -> Self {
        self.family = Some(family);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Append a single attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs = self.attrs.with(key, value);
        self
    }
}

impl From<Family> for IconProps {
    fn from(family: Family) -> Self {
        Self::new().family(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let props = IconProps::new()
            .family(Family::Bootstrap)
            .class("w-6 h-6")
            .attr("aria-hidden", "true");

        assert_eq!(props.family, Some(Family::Bootstrap));
        assert_eq!(props.class, "w-6 h-6");
        assert_eq!(props.attrs.to_string(), "aria-hidden=true");
    }

    #[test]
    fn test_default_has_no_family() {
        let props = IconProps::default();
        assert!(props.family.is_none());
        assert!(props.class.is_empty());
        assert!(props.attrs.is_empty());
    }
}
