//! Check command implementation.
//!
//! Parses each named resource file and reports the outcome per file.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::parser::ResourceReader;
use crate::path::FilePath;

/// Parse resource files and report errors
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check (default: the manifest's resources)
    pub files: Vec<PathBuf>,
}

/// Outcome of a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub failed: usize,
}

impl CheckSummary {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

pub fn run(args: CheckArgs, manifest: &Manifest, printer: &Printer) -> Result<CheckSummary> {
    let files = if args.files.is_empty() {
        manifest.resources.clone()
    } else {
        args.files
    };

    let reader = ResourceReader::standard();
    let mut summary = CheckSummary::default();

    if files.is_empty() {
        printer.info("Skipped", "no resource files given");
        return Ok(summary);
    }

    for file in &files {
        summary.checked += 1;
        let name = display_path(file);

        match reader.read(&FilePath::new(file)) {
            Ok(resource) => {
                let detail = format!("({} {})", resource.resource_type(), resource.id());
                printer.success("Checked", &format!("{} {}", name, printer.dim(&detail)));
            }
            Err(e) => {
                summary.failed += 1;
                printer.error("Failed", &format!("{}: {}", name, e));
            }
        }
    }

    if summary.is_ok() {
        printer.success("Finished", &format!("checked {}", plural(summary.checked, "file", "files")));
    } else {
        printer.error(
            "Finished",
            &format!(
                "{} of {} failed",
                summary.failed,
                plural(summary.checked, "file", "files")
            ),
        );
    }

    Ok(summary)
}
