//! icons - Icon resolution and markup cache
//!
//! Resolves icon names, scoped to a family of icon sets, into SVG markup.
//! Markup is generated on first use and memoized by name, family, class
//! and attributes.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
mod presets;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod service;
pub mod types;

pub use cache::{CacheKey, CachedIcon, IconCache};
pub use config::IconConfig;
pub use error::{IconError, Result};
pub use registry::{CustomIconStore, FamilyRegistry, Template};
pub use render::AttrEscape;
pub use resolve::Resolved;
pub use service::{IconHandle, IconListing, Icons};
pub use types::{Attribute, Attributes, Family, IconProps};
