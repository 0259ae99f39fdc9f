use clap::Parser;
use icons::cli::{Cli, Commands};
use icons::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "icons=debug" } else { "icons=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = cli.icons()?;
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => icons::cli::render::run(args, &service, &printer)?,
        Commands::List(args) => icons::cli::list::run(args, &service, &printer)?,
        Commands::Families => icons::cli::families::run(&service, &printer)?,
    }

    Ok(())
}
