//! Markup generator - fills a template's two slots.
//!
//! Templates use `%s` for the slots and `%%` for a literal percent sign.
//! Any other `%` is copied through unchanged.

use crate::error::{IconError, Result};
use crate::types::Attributes;

/// Number of `%s` slots every template must carry.
pub const SLOT_COUNT: usize = 2;

/// How attribute values and the class token are written into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttrEscape {
    /// Insert verbatim.
    #[default]
    None,
    /// Escape `& < > " '` as HTML entities in values and the class token,
    /// and reject attribute names that could break out of the tag.
    Html,
}

impl AttrEscape {
    fn apply(self, value: &str, out: &mut String) {
        match self {
            AttrEscape::None => out.push_str(value),
            AttrEscape::Html => {
                for c in value.chars() {
                    match c {
                        '&' => out.push_str("&amp;"),
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '"' => out.push_str("&quot;"),
                        '\'' => out.push_str("&#39;"),
                        c => out.push(c),
                    }
                }
            }
        }
    }

    fn check_key(self, key: &str) -> Result<()> {
        if self == AttrEscape::None {
            return Ok(());
        }
        let unsafe_char = |c: char| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        };
        if key.is_empty() || key.chars().any(unsafe_char) {
            return Err(IconError::InvalidAttribute {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Slot,
}

/// Split a template into literal text and slots.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let bytes = template.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 1 < bytes.len() {
            match bytes[i + 1] {
                b's' => {
                    if start < i {
                        out.push(Segment::Text(&template[start..i]));
                    }
                    out.push(Segment::Slot);
                    i += 2;
                    start = i;
                    continue;
                }
                b'%' => {
                    // keep the first '%', drop the second
                    out.push(Segment::Text(&template[start..=i]));
                    i += 2;
                    start = i;
                    continue;
                }
                _ => {}
            }
        }
        i += 1;
    }

    if start < bytes.len() {
        out.push(Segment::Text(&template[start..]));
    }
    out
}

/// Count the `%s` slots in a template.
pub fn slot_count(template: &str) -> usize {
    segments(template)
        .iter()
        .filter(|s| matches!(s, Segment::Slot))
        .count()
}

/// Render attributes as ` key` / ` key="value"` fragments, in order.
///
/// Under [`AttrEscape::Html`] an unsafe attribute name is an error.
pub fn render_attrs(attrs: &Attributes, escape: AttrEscape) -> Result<String> {
    let mut out = String::new();
    for attr in attrs {
        escape.check_key(&attr.key)?;
        out.push(' ');
        out.push_str(&attr.key);
        if !attr.is_flag() {
            out.push_str("=\"");
            escape.apply(&attr.value, &mut out);
            out.push('"');
        }
    }
    Ok(out)
}

/// Fill a template with the class token and the rendered attribute string.
pub fn render(
    template: &str,
    class: &str,
    attrs: &Attributes,
    escape: AttrEscape,
) -> Result<String> {
    let parts = segments(template);
    let slots = parts.iter().filter(|s| matches!(s, Segment::Slot)).count();
    if slots != SLOT_COUNT {
        return Err(IconError::MalformedTemplate { slots });
    }

    let mut class_token = String::with_capacity(class.len());
    escape.apply(class, &mut class_token);
    let fills = [class_token, render_attrs(attrs, escape)?];

    let mut out = String::with_capacity(template.len() + fills[0].len() + fills[1].len());
    let mut next = 0;
    for part in parts {
        match part {
            Segment::Text(text) => out.push_str(text),
            Segment::Slot => {
                out.push_str(&fills[next]);
                next += 1;
            }
        }
    }
    Ok(out)
}
