//! Families command implementation.

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::service::Icons;
use crate::types::Family;

pub fn run(icons: &Icons, printer: &Printer) -> Result<()> {
    let default = icons.default_family();

    for family in Family::ALL {
        let count = icons.registry().names(family).len();
        let mut line = plural(count, "icon", "icons");
        if family == default {
            line.push_str(&format!(" {}", printer.dim("(default)")));
        }
        if family == Family::FALLBACK {
            line.push_str(&format!(" {}", printer.dim("(fallback)")));
        }
        printer.info(family.name(), &line);
    }

    Ok(())
}
