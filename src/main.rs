use clap::Parser;
use miette::Result;
use storyres::cli::{Cli, Commands};
use storyres::output::Printer;
use storyres::TypeRegistry;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let manifest = cli.load_manifest()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(manifest.log.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(resources = manifest.resources.len(), format = ?manifest.format, "manifest loaded");

    match cli.command {
        Commands::Check(args) => {
            let summary = storyres::cli::check::run(args, &manifest, &Printer::new())?;
            if !summary.is_ok() {
                std::process::exit(1);
            }
        }
        Commands::Show(args) => storyres::cli::show::run(args, &manifest)?,
        Commands::Types => storyres::cli::types::run(TypeRegistry::standard()),
        Commands::Completions(args) => storyres::cli::completions::run(args),
    }

    Ok(())
}
