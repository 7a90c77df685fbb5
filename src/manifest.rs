//! Project manifest (storyres.yaml) parsing.
//!
//! The manifest configures the command-line tool: which resource files to
//! check by default, how `show` prints, and the default log filter.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// File name looked up by `Manifest::find`.
pub const MANIFEST_FILE: &str = "storyres.yaml";

/// Output format for printed resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Tool configuration loaded from storyres.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Resource files checked when `check` is given no paths.
    pub resources: Vec<PathBuf>,

    /// Default output format for `show`.
    pub format: OutputFormat,

    /// Default tracing filter (e.g. "storyres=debug").
    pub log: Option<String>,
}

impl Manifest {
    /// Load manifest from a storyres.yaml file.
    ///
    /// Relative resource paths are resolved against the manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut manifest = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            manifest.resources = manifest
                .resources
                .into_iter()
                .map(|p| if p.is_relative() { base.join(p) } else { p })
                .collect();
        }
        Ok(manifest)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ParseError::Config {
            message: e.to_string(),
        })
    }

    /// Load `storyres.yaml` from `dir` if it exists.
    pub fn find(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILE);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
resources:
  - scenes/char1-start.xml
  - story.xml
format: json
log: storyres=debug
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest.resources,
            vec![PathBuf::from("scenes/char1-start.xml"), PathBuf::from("story.xml")]
        );
        assert_eq!(manifest.format, OutputFormat::Json);
        assert_eq!(manifest.log.as_deref(), Some("storyres=debug"));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("format: sideways").unwrap_err();
        assert!(matches!(err, ParseError::Config { .. }));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "resources: [story.xml]").unwrap();

        let manifest = Manifest::find(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.resources, vec![dir.path().join("story.xml")]);
    }

    #[test]
    fn test_find_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Manifest::find(dir.path()).unwrap().is_none());
    }
}
