//! Compiled-in icon tables.
//!
//! Every template carries two `%s` slots: the class token, then the
//! rendered attribute string.

use crate::types::Family;

macro_rules! fill_svg {
    ($view_box:literal, $($path:literal),+ $(,)?) => {
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"",
            $view_box,
            "\" fill=\"currentColor\" class=\"%s\"%s>",
            $("<path d=\"", $path, "\"/>",)+
            "</svg>"
        )
    };
}

macro_rules! stroke_svg {
    ($($path:literal),+ $(,)?) => {
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" ",
            "fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" ",
            "stroke-linejoin=\"round\" class=\"%s\"%s>",
            $("<path d=\"", $path, "\"/>",)+
            "</svg>"
        )
    };
}

const MATERIAL_DESIGN: &[(&str, &str)] = &[
    ("alert", fill_svg!("0 0 24 24", "M13 14H11V9H13M13 18H11V16H13M1 21H23L12 2L1 21Z")),
    (
        "information",
        fill_svg!(
            "0 0 24 24",
            "M13,9H11V7H13M13,17H11V11H13M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2Z"
        ),
    ),
    (
        "information-outline",
        fill_svg!(
            "0 0 24 24",
            "M11,9H13V7H11M12,20C7.59,20 4,16.41 4,12C4,7.59 7.59,4 12,4C16.41,4 20,7.59 20,12C20,16.41 16.41,20 12,20M12,2A10,10 0 0,0 2,12A10,10 0 0,0 12,22A10,10 0 0,0 22,12A10,10 0 0,0 12,2M11,17H13V11H11V17Z"
        ),
    ),
    ("check", fill_svg!("0 0 24 24", "M21,7L9,19L3.5,13.5L4.91,12.09L9,16.17L19.59,5.59L21,7Z")),
    (
        "close",
        fill_svg!(
            "0 0 24 24",
            "M19,6.41L17.59,5L12,10.59L6.41,5L5,6.41L10.59,12L5,17.59L6.41,19L12,13.41L17.59,19L19,17.59L13.41,12L19,6.41Z"
        ),
    ),
    (
        "close-circle",
        fill_svg!(
            "0 0 24 24",
            "M12,2C17.53,2 22,6.47 22,12C22,17.53 17.53,22 12,22C6.47,22 2,17.53 2,12C2,6.47 6.47,2 12,2M15.59,7L12,10.59L8.41,7L7,8.41L10.59,12L7,15.59L8.41,17L12,13.41L15.59,17L17,15.59L13.41,12L17,8.41L15.59,7Z"
        ),
    ),
    ("chevron-down", fill_svg!("0 0 24 24", "M7.41,8.58L12,13.17L16.59,8.58L18,10L12,16L6,10L7.41,8.58Z")),
    ("chevron-up", fill_svg!("0 0 24 24", "M7.41,15.41L12,10.83L16.59,15.41L18,14L12,8L6,14L7.41,15.41Z")),
    ("chevron-left", fill_svg!("0 0 24 24", "M15.41,16.58L10.83,12L15.41,7.41L14,6L8,12L14,18L15.41,16.58Z")),
    ("chevron-right", fill_svg!("0 0 24 24", "M8.59,16.58L13.17,12L8.59,7.41L10,6L16,12L10,18L8.59,16.58Z")),
    ("home", fill_svg!("0 0 24 24", "M10,20V14H14V20H19V12H22L12,3L2,12H5V20H10Z")),
    ("menu", fill_svg!("0 0 24 24", "M3,6H21V8H3V6M3,11H21V13H3V11M3,16H21V18H3V16Z")),
    (
        "magnify",
        fill_svg!(
            "0 0 24 24",
            "M9.5,3A6.5,6.5 0 0,1 16,9.5C16,11.11 15.41,12.59 14.44,13.73L14.71,14H15.5L20.5,19L19,20.5L14,15.5V14.71L13.73,14.44C12.59,15.41 11.11,16 9.5,16A6.5,6.5 0 0,1 3,9.5A6.5,6.5 0 0,1 9.5,3M9.5,5C7,5 5,7 5,9.5C5,12 7,14 9.5,14C12,14 14,12 14,9.5C14,7 12,5 9.5,5Z"
        ),
    ),
];

const BOOTSTRAP: &[(&str, &str)] = &[
    (
        "house",
        fill_svg!(
            "0 0 16 16",
            "M8.707 1.5a1 1 0 0 0-1.414 0L.646 8.146a.5.5 0 0 0 .708.708L8 2.207l6.646 6.647a.5.5 0 0 0 .708-.708L13 5.793V2.5a.5.5 0 0 0-.5-.5h-1a.5.5 0 0 0-.5.5v1.293z",
            "m8 3.293 6 6V13.5a1.5 1.5 0 0 1-1.5 1.5h-9A1.5 1.5 0 0 1 2 13.5V9.293z"
        ),
    ),
    (
        "x-lg",
        fill_svg!(
            "0 0 16 16",
            "M2.146 2.854a.5.5 0 1 1 .708-.708L8 7.293l5.146-5.147a.5.5 0 0 1 .708.708L8.707 8l5.147 5.146a.5.5 0 0 1-.708.708L8 8.707l-5.146 5.147a.5.5 0 0 1-.708-.708L7.293 8z"
        ),
    ),
    (
        "check-lg",
        fill_svg!(
            "0 0 16 16",
            "M12.736 3.97a.733.733 0 0 1 1.047 0c.286.289.29.756.01 1.05L7.88 12.01a.733.733 0 0 1-1.065.02L3.217 8.384a.757.757 0 0 1 0-1.06.733.733 0 0 1 1.047 0l3.052 3.093 5.4-6.425z"
        ),
    ),
    (
        "alarm",
        fill_svg!(
            "0 0 16 16",
            "M8.5 5.5a.5.5 0 0 0-1 0v3.362l-1.429 2.38a.5.5 0 1 0 .858.515l1.5-2.5A.5.5 0 0 0 8.5 9z",
            "M6.5 0a.5.5 0 0 0 0 1H7v1.07a7.001 7.001 0 0 0-3.273 12.474l-.602.602a.5.5 0 0 0 .707.708l.746-.746A6.97 6.97 0 0 0 8 16a6.97 6.97 0 0 0 3.422-.892l.746.746a.5.5 0 0 0 .707-.708l-.601-.602A7.001 7.001 0 0 0 9 2.07V1h.5a.5.5 0 0 0 0-1z"
        ),
    ),
];

const BOX: &[(&str, &str)] = &[
    ("bx-home", fill_svg!("0 0 24 24", "M3 13h1v7c0 1.103.897 2 2 2h12c1.103 0 2-.897 2-2v-7h1a1 1 0 0 0 .707-1.707l-9-9a.999.999 0 0 0-1.414 0l-9 9A1 1 0 0 0 3 13z")),
    ("bx-x", fill_svg!("0 0 24 24", "m16.192 6.344-4.243 4.242-4.242-4.242-1.414 1.414L10.535 12l-4.242 4.242 1.414 1.414 4.242-4.242 4.243 4.242 1.414-1.414L13.364 12l4.242-4.242z")),
    ("bx-check", fill_svg!("0 0 24 24", "m10 15.586-3.293-3.293-1.414 1.414L10 18.414l9.707-9.707-1.414-1.414z")),
    ("bx-menu", fill_svg!("0 0 24 24", "M4 6h16v2H4zm0 5h16v2H4zm0 5h16v2H4z")),
];

const FONT_AWESOME: &[(&str, &str)] = &[
    ("house", fill_svg!("0 0 576 512", "M575.8 255.5c0 18-15 32.1-32 32.1h-32l.7 160.2c.2 35.5-28.5 64.3-64 64.3H128.1c-35.3 0-64-28.7-64-64V287.6H32c-18 0-32-14-32-32.1c0-9 3-17 10-24L266.4 8c7-7 15-8 22-8s15 2 21 7L564.8 231.5c8 7 12 15 11 24z")),
    ("xmark", fill_svg!("0 0 384 512", "M342.6 150.6c12.5-12.5 12.5-32.8 0-45.3s-32.8-12.5-45.3 0L192 210.7 86.6 105.4c-12.5-12.5-32.8-12.5-45.3 0s-12.5 32.8 0 45.3L146.7 256 41.4 361.4c-12.5 12.5-12.5 32.8 0 45.3s32.8 12.5 45.3 0L192 301.3 297.4 406.6c12.5 12.5 32.8 12.5 45.3 0s12.5-32.8 0-45.3L237.3 256 342.6 150.6z")),
    ("check", fill_svg!("0 0 448 512", "M438.6 105.4c12.5 12.5 12.5 32.8 0 45.3l-256 256c-12.5 12.5-32.8 12.5-45.3 0l-128-128c-12.5-12.5-12.5-32.8 0-45.3s32.8-12.5 45.3 0L160 338.7 393.4 105.4c12.5-12.5 32.8-12.5 45.3 0z")),
];

const HERO: &[(&str, &str)] = &[
    ("home", stroke_svg!("m2.25 12 8.954-8.955c.44-.439 1.152-.439 1.591 0L21.75 12M4.5 9.75v10.125c0 .621.504 1.125 1.125 1.125H9.75v-4.875c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21h4.125c.621 0 1.125-.504 1.125-1.125V9.75M8.25 21h8.25")),
    ("x-mark", stroke_svg!("M6 18 18 6M6 6l12 12")),
    ("check", stroke_svg!("m4.5 12.75 6 6 9-13.5")),
    ("bars-3", stroke_svg!("M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5")),
];

const IONIC: &[(&str, &str)] = &[
    ("home", fill_svg!("0 0 512 512", "M261.56 101.28a8 8 0 0 0-11.06 0L66.4 277.15a8 8 0 0 0-2.47 5.79L63.9 448a32 32 0 0 0 32 32H192a16 16 0 0 0 16-16V328a8 8 0 0 1 8-8h80a8 8 0 0 1 8 8v136a16 16 0 0 0 16 16h96.06a32 32 0 0 0 32-32V282.94a8 8 0 0 0-2.47-5.79z")),
    ("close", fill_svg!("0 0 512 512", "M289.94 256l95-95A24 24 0 0 0 351 127l-95 95-95-95a24 24 0 0 0-34 34l95 95-95 95a24 24 0 1 0 34 34l95-95 95 95a24 24 0 0 0 34-34z")),
    ("checkmark", fill_svg!("0 0 512 512", "M416 128 192 384l-96-96")),
];

const LINE: &[(&str, &str)] = &[
    ("la-home", fill_svg!("0 0 32 32", "M16 2.594l-.719.687-13 13 1.438 1.438L5 16.437V28h9V18h4v10h9V16.437l1.281 1.282 1.438-1.438-13-13zm0 2.844l9 9V26h-5V16h-8v10H7V14.437z")),
    ("la-times", fill_svg!("0 0 32 32", "M7.219 5.781L5.78 7.22 14.563 16 5.78 24.781l1.44 1.439L16 17.437l8.781 8.782 1.438-1.438L17.437 16l8.782-8.781L24.78 5.78 16 14.563z")),
    ("la-check", fill_svg!("0 0 32 32", "M28.281 6.281L11 23.563 3.719 16.28 2.28 17.72l8 8 .719.687.719-.687 18-18z")),
];

const LUCIDE: &[(&str, &str)] = &[
    ("house", stroke_svg!("M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8", "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z")),
    ("x", stroke_svg!("M18 6 6 18", "m6 6 12 12")),
    ("check", stroke_svg!("M20 6 9 17l-5-5")),
    ("menu", stroke_svg!("M4 12h16", "M4 6h16", "M4 18h16")),
];

/// Access to the compiled-in family tables.
pub struct BuiltinIcons;

impl BuiltinIcons {
    /// The table for a built-in family. `Custom` has no compiled-in table.
    pub fn table(family: Family) -> &'static [(&'static str, &'static str)] {
        match family {
            Family::Box => BOX,
            Family::Bootstrap => BOOTSTRAP,
            Family::FontAwesome => FONT_AWESOME,
            Family::Hero => HERO,
            Family::Ionic => IONIC,
            Family::Line => LINE,
            Family::Lucide => LUCIDE,
            Family::MaterialDesign => MATERIAL_DESIGN,
            Family::Custom => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_builtin_template_has_two_slots() {
        for family in Family::ALL.into_iter().filter(|f| f.is_builtin()) {
            for (name, template) in BuiltinIcons::table(family) {
                assert_eq!(
                    template.matches("%s").count(),
                    2,
                    "{}/{} has wrong slot count",
                    family,
                    name
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_names_within_family() {
        for family in Family::ALL {
            let table = BuiltinIcons::table(family);
            let unique: HashSet<&str> = table.iter().map(|(n, _)| *n).collect();
            assert_eq!(unique.len(), table.len(), "duplicate name in {}", family);
        }
    }

    #[test]
    fn test_custom_has_no_table() {
        assert!(BuiltinIcons::table(Family::Custom).is_empty());
    }

    #[test]
    fn test_fallback_table_has_common_icons() {
        let names: HashSet<&str> = BuiltinIcons::table(Family::FALLBACK)
            .iter()
            .map(|(n, _)| *n)
            .collect();
        for name in ["alert", "information", "check", "close", "chevron-down"] {
            assert!(names.contains(name), "missing {}", name);
        }
    }
}
