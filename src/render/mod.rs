//! Rendering module for icons.
//!
//! This module turns a resolved template, a class token and ordered
//! attributes into the final markup fragment.

mod markup;

pub use markup::{render, render_attrs, slot_count, AttrEscape, SLOT_COUNT};
