//! Story-level descriptor.
//!
//! Describes a whole story: its title, credits, and the scene it starts at.

use serde::Serialize;

use super::factory::{non_empty, BuildError};

/// A story descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub title: String,
    /// Id of the first scene.
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Builder for story descriptors.
#[derive(Debug, Clone, Default)]
pub struct StoryBuilder {
    title: Option<String>,
    start: Option<String>,
    author: Option<String>,
    description: Option<String>,
    version: Option<String>,
}

impl StoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the starting scene id.
    pub fn start(&mut self, scene: impl Into<String>) -> Result<&mut Self, BuildError> {
        self.start = Some(non_empty("start", scene)?);
        Ok(self)
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = Some(author.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Result<Story, BuildError> {
        let title = self.title.ok_or(BuildError::MissingField("title"))?;
        let start = self.start.ok_or(BuildError::MissingField("start"))?;

        Ok(Story {
            title,
            start,
            author: self.author,
            description: self.description,
            version: self.version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_builder() {
        let mut builder = StoryBuilder::new();
        builder.title("Separate but UnEqual").author("T. M.");
        builder.start("char1-start").unwrap();

        let story = builder.build().unwrap();
        assert_eq!(story.title, "Separate but UnEqual");
        assert_eq!(story.start, "char1-start");
        assert_eq!(story.author.as_deref(), Some("T. M."));
        assert_eq!(story.version, None);
    }

    #[test]
    fn test_story_missing_start() {
        let mut builder = StoryBuilder::new();
        builder.title("Untitled");
        assert_eq!(builder.build().unwrap_err(), BuildError::MissingField("start"));
    }

    #[test]
    fn test_story_rejects_blank_start() {
        let mut builder = StoryBuilder::new();
        assert!(builder.start("").is_err());
    }
}
