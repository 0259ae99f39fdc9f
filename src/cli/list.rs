//! List command implementation.
//!
//! Prints available icon names grouped by family.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::service::Icons;
use crate::types::Family;

/// List available icon names
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Families to list (default: all)
    pub families: Vec<String>,
}

pub fn run(args: ListArgs, icons: &Icons, printer: &Printer) -> Result<()> {
    let requested: Vec<&str> = if args.families.is_empty() {
        Family::ALL.iter().map(|f| f.name()).collect()
    } else {
        args.families.iter().map(|s| s.as_str()).collect()
    };

    let listing = icons.list_available_icons(&requested);

    for family in requested.iter().filter_map(|f| Family::from_name(f)) {
        let names = sorted(icons.registry().names(family));
        if names.is_empty() {
            continue;
        }
        printer.info(family.name(), &names.join(", "));
    }

    printer.status("Found", &plural(listing.names.len(), "icon", "icons"));
    listing.into_result().map(|_| ())
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}
