//! Render command implementation.
//!
//! Renders one icon, warns on fallback, and writes the markup to stdout.

use std::io::Write;

use clap::Args;

use crate::error::{IconError, Result};
use crate::output::Printer;
use crate::service::Icons;
use crate::types::{Attribute, Attributes, Family};

/// Render an icon to stdout
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Icon name
    pub name: String,

    /// Icon family (defaults to the configured default family)
    #[arg(long, short)]
    pub family: Option<String>,

    /// Class token for the icon
    #[arg(long, short, default_value = "")]
    pub class: String,

    /// Attribute as key=value, or a bare key (repeatable, order preserved)
    #[arg(long = "attr", short = 'a')]
    pub attrs: Vec<String>,
}

pub fn run(args: RenderArgs, icons: &Icons, printer: &Printer) -> Result<()> {
    let attrs = parse_attrs(&args.attrs)?;

    let handle = match &args.family {
        Some(family) => icons.icon_in(args.name.as_str(), family)?,
        None => icons.icon(args.name.as_str()),
    }
    .with_class(args.class.as_str());

    let icon = handle.emit_resolved(&attrs)?;
    if let Some(note) = fallback_note(handle.name(), handle.family(), icon.family) {
        printer.warning("Fallback", &note);
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", icon.markup)?;
    Ok(())
}

fn fallback_note(name: &str, requested: Family, resolved: Family) -> Option<String> {
    (requested != resolved).then(|| format!("{} not in {}, using {}", name, requested, resolved))
}

fn parse_attrs(raw: &[String]) -> Result<Attributes> {
    raw.iter()
        .map(|s| {
            Attribute::parse(s).ok_or_else(|| IconError::Parse {
                message: format!("Invalid attribute '{}'", s),
                help: Some("Use key=value or a bare key".to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attrs_keeps_order() {
        let attrs = parse_attrs(&["hidden".to_string(), "title=Close".to_string()]).unwrap();
        assert_eq!(attrs.to_string(), "hidden,title=Close");
    }

    #[test]
    fn test_parse_attrs_rejects_empty_key() {
        let err = parse_attrs(&["=x".to_string()]).unwrap_err();
        assert!(matches!(err, IconError::Parse { .. }));
    }

    #[test]
    fn test_fallback_note_from_emitted_family() {
        let icons = Icons::new();
        let handle = icons.icon_with("alert", Family::Hero);
        let icon = handle.emit_resolved(&Attributes::new()).unwrap();

        assert_eq!(
            fallback_note(handle.name(), handle.family(), icon.family).as_deref(),
            Some("alert not in hero, using material-design")
        );
        assert_eq!(icons.cache().generations(), 1);
        assert!(fallback_note("close", Family::Bootstrap, Family::Bootstrap).is_none());
    }
}
