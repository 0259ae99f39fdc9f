//! Shorthand constructors for families and common icons.

use crate::service::{IconHandle, Icons};
use crate::types::Family;

fn with_variants(base: &str, variants: &[&str]) -> String {
    let mut name = base.to_string();
    for v in variants {
        name.push('-');
        name.push_str(v);
    }
    name
}

impl Icons {
    /// Boxicons. Names without a `bx` marker get the `bx-` prefix.
    pub fn box_icon(&self, name: &str) -> IconHandle {
        let name = if name.contains("bx") {
            name.to_string()
        } else {
            format!("bx-{name}")
        };
        self.icon_with(name, Family::Box)
    }

    pub fn bootstrap_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::Bootstrap)
    }

    pub fn font_awesome_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::FontAwesome)
    }

    pub fn hero_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::Hero)
    }

    pub fn ionic_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::Ionic)
    }

    pub fn line_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::Line)
    }

    pub fn lucide_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::Lucide)
    }

    pub fn material_design_icon(&self, name: &str) -> IconHandle {
        self.icon_with(name, Family::MaterialDesign)
    }

    /// Material Design `alert`.
    pub fn alert(&self) -> IconHandle {
        self.material_design_icon("alert")
    }

    /// Material Design `check`.
    pub fn success(&self) -> IconHandle {
        self.material_design_icon("check")
    }

    /// `information`, e.g. `information(&["outline"])` -> `information-outline`.
    pub fn information(&self, variants: &[&str]) -> IconHandle {
        self.material_design_icon(&with_variants("information", variants))
    }

    /// `close`, e.g. `close(&["circle"])` -> `close-circle`.
    pub fn close(&self, variants: &[&str]) -> IconHandle {
        self.material_design_icon(&with_variants("close", variants))
    }

    /// `chevron-<variants>`; with no variants, `chevron-down`.
    pub fn chevron(&self, variants: &[&str]) -> IconHandle {
        if variants.is_empty() {
            self.material_design_icon("chevron-down")
        } else {
            self.material_design_icon(&with_variants("chevron", variants))
        }
    }
}
