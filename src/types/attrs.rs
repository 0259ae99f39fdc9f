//! Ordered render attributes.

use std::fmt;

/// A single attribute. An empty value renders as a bare (boolean) attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    /// Create a valued attribute.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a bare attribute with no value.
    pub fn flag(key: impl Into<String>) -> Self {
        Self::new(key, "")
    }

    /// Whether this attribute renders without a value.
    pub fn is_flag(&self) -> bool {
        self.value.is_empty()
    }

    /// Parse `key=value` or a bare `key`.
    pub fn parse(s: &str) -> Option<Self> {
        let (key, value) = match s.split_once('=') {
            Some((k, v)) => (k.trim(), v.trim_matches('"')),
            None => (s.trim(), ""),
        };
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, value))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_flag() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}={}", self.key, self.value)
        }
    }
}

/// Attributes attached to a single render request.
///
/// Insertion order is preserved; it determines both the rendered attribute
/// string and the cache key, so `[a, b]` and `[b, a]` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a valued attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Attribute::new(key, value));
        self
    }

    /// Append a bare attribute.
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.push(Attribute::flag(key));
        self
    }

    /// Append an attribute.
    pub fn push(&mut self, attr: Attribute) {
        self.items.push(attr);
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| Attribute::new(k, v))
                .collect(),
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Comma-separated `key=value` / `key` list, used in cache keys and error context.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attr) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}
