pub mod check;
pub mod completions;
pub mod show;
pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;

/// storyres - Story resource document loader
#[derive(Parser, Debug)]
#[command(name = "storyres")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest file (default: ./storyres.yaml when present)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the manifest named on the command line, or the one in the
    /// current directory, or defaults.
    pub fn load_manifest(&self) -> Result<Manifest> {
        match &self.manifest {
            Some(path) => Manifest::load(path),
            None => Ok(Manifest::find(std::path::Path::new("."))?.unwrap_or_default()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse resource files and report errors
    Check(check::CheckArgs),

    /// Print a parsed resource
    Show(show::ShowArgs),

    /// List supported resource types
    Types,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
