//! Show command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::error::{ParseError, Result};
use crate::manifest::{Manifest, OutputFormat};
use crate::parser::read_resource;
use crate::path::{FilePath, ResourcePath};
use crate::types::{Resource, ResourceBody};

/// Print a parsed resource
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Resource file to read
    pub file: PathBuf,

    /// Output format (default: the manifest's format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: ShowArgs, manifest: &Manifest) -> Result<()> {
    let path = FilePath::new(&args.file);
    let resource = read_resource(&path)?;

    let output = match args.format.unwrap_or(manifest.format) {
        OutputFormat::Text => describe(&resource),
        OutputFormat::Json => serde_json::to_string_pretty(&resource).map_err(|e| ParseError::Io {
            path: path.name(),
            source: e.into(),
        })?,
    };

    println!("{}", output);
    Ok(())
}

/// Human-readable summary of a resource.
pub fn describe(resource: &Resource) -> String {
    let mut out = format!("{} {}\n", resource.resource_type(), resource.id());

    // Writing to a String cannot fail.
    match resource.body() {
        ResourceBody::ChoiceScene(scene) => {
            if let Some(speaker) = &scene.speaker {
                let _ = writeln!(out, "  speaker: {}", speaker);
            }
            if let Some(background) = &scene.background {
                let _ = writeln!(out, "  background: {}", background);
            }
            let _ = writeln!(out, "  text: {}", scene.text);
            for choice in &scene.choices {
                let _ = write!(out, "  - {} -> {}", choice.label, choice.next);
                if let Some(requires) = &choice.requires {
                    let _ = write!(out, " [requires {}]", requires);
                }
                out.push('\n');
            }
        }
        ResourceBody::EndScene(scene) => {
            let _ = writeln!(out, "  title: {}", scene.title);
            if let Some(speaker) = &scene.speaker {
                let _ = writeln!(out, "  speaker: {}", speaker);
            }
            let _ = writeln!(out, "  text: {}", scene.text);
            if !scene.unlocks.is_empty() {
                let _ = writeln!(out, "  unlocks: {}", scene.unlocks.join(", "));
            }
        }
        ResourceBody::Story(story) => {
            let _ = writeln!(out, "  title: {}", story.title);
            let _ = writeln!(out, "  start: {}", story.start);
            for (label, value) in [
                ("author", &story.author),
                ("description", &story.description),
                ("version", &story.version),
            ] {
                if let Some(value) = value {
                    let _ = writeln!(out, "  {}: {}", label, value);
                }
            }
        }
        ResourceBody::Achievement(achievement) => {
            let _ = writeln!(out, "  name: {}", achievement.name);
            let _ = writeln!(out, "  description: {}", achievement.description);
            let _ = writeln!(out, "  points: {}", achievement.points);
            if achievement.hidden {
                let _ = writeln!(out, "  hidden");
            }
        }
    }

    out.truncate(out.trim_end().len());
    out
}
