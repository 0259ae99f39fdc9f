//! Core domain types.
//!
//! - `Family` - closed set of icon families
//! - `Attributes` - ordered render attributes
//! - `IconProps` - per-request family, class and attributes

mod attrs;
mod family;
mod props;

pub use attrs::{Attribute, Attributes};
pub use family::Family;
pub use props::IconProps;
