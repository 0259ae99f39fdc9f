pub mod families;
pub mod list;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::IconConfig;
use crate::error::Result;
use crate::service::Icons;

/// icons - resolve icon names to SVG markup
#[derive(Parser, Debug)]
#[command(name = "icons")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (icons.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Custom icon JSON document to import
    #[arg(long, global = true)]
    pub custom: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an icon to stdout
    Render(render::RenderArgs),

    /// List available icon names
    List(list::ListArgs),

    /// List known icon families
    Families,
}

impl Cli {
    /// Build the icon service from `--config` and `--custom`.
    pub fn icons(&self) -> Result<Icons> {
        let config = match &self.config {
            Some(path) => IconConfig::load(path)?,
            None => IconConfig::default(),
        };

        let icons = Icons::from_config(&config)?;
        if let Some(path) = &self.custom {
            icons.load_custom_icons(path)?;
        }
        Ok(icons)
    }
}
