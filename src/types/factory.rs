//! Deferred-validation construction of resources.
//!
//! A `ResourceFactory` pairs a resource id with the draft builder for one
//! kind. Sub-parsers fill the draft through its setters; `build` validates
//! everything at once and produces the immutable `Resource`.

use thiserror::Error;

use super::{
    AchievementBuilder, ChoiceSceneBuilder, EndSceneBuilder, Resource, ResourceBody, ResourceType,
    StoryBuilder,
};

/// Failure raised by a builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A mandatory field was never set.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A setter rejected its value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Reject empty or whitespace-only values for reference-like fields.
pub(crate) fn non_empty(field: &'static str, value: impl Into<String>) -> Result<String, BuildError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(BuildError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value)
}

/// Kind-specific draft held by a factory.
#[derive(Debug, Clone)]
pub enum Draft {
    ChoiceScene(ChoiceSceneBuilder),
    EndScene(EndSceneBuilder),
    Story(StoryBuilder),
    Achievement(AchievementBuilder),
}

/// Mutable accumulator for one resource document.
///
/// `build` consumes the factory, so each instance finalizes at most once.
#[derive(Debug, Clone)]
pub struct ResourceFactory {
    id: String,
    draft: Draft,
}

impl ResourceFactory {
    /// Create the factory for a kind.
    pub fn new(resource_type: ResourceType, id: impl Into<String>) -> Self {
        let draft = match resource_type {
            ResourceType::ChoiceScene => Draft::ChoiceScene(ChoiceSceneBuilder::new()),
            ResourceType::EndScene => Draft::EndScene(EndSceneBuilder::new()),
            ResourceType::Story => Draft::Story(StoryBuilder::new()),
            ResourceType::Achievement => Draft::Achievement(AchievementBuilder::new()),
        };
        Self {
            id: id.into(),
            draft,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource_type(&self) -> ResourceType {
        match self.draft {
            Draft::ChoiceScene(_) => ResourceType::ChoiceScene,
            Draft::EndScene(_) => ResourceType::EndScene,
            Draft::Story(_) => ResourceType::Story,
            Draft::Achievement(_) => ResourceType::Achievement,
        }
    }

    pub fn choice_scene_mut(&mut self) -> Option<&mut ChoiceSceneBuilder> {
        match &mut self.draft {
            Draft::ChoiceScene(builder) => Some(builder),
            _ => None,
        }
    }

    pub fn end_scene_mut(&mut self) -> Option<&mut EndSceneBuilder> {
        match &mut self.draft {
            Draft::EndScene(builder) => Some(builder),
            _ => None,
        }
    }

    pub fn story_mut(&mut self) -> Option<&mut StoryBuilder> {
        match &mut self.draft {
            Draft::Story(builder) => Some(builder),
            _ => None,
        }
    }

    pub fn achievement_mut(&mut self) -> Option<&mut AchievementBuilder> {
        match &mut self.draft {
            Draft::Achievement(builder) => Some(builder),
            _ => None,
        }
    }

    /// Validate the draft and produce the resource.
    pub fn build(self) -> Result<Resource, BuildError> {
        let body = match self.draft {
            Draft::ChoiceScene(builder) => ResourceBody::ChoiceScene(builder.build()?),
            Draft::EndScene(builder) => ResourceBody::EndScene(builder.build()?),
            Draft::Story(builder) => ResourceBody::Story(builder.build()?),
            Draft::Achievement(builder) => ResourceBody::Achievement(builder.build()?),
        };
        Ok(Resource::new(self.id, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_kind_matches_type() {
        for kind in ResourceType::ALL {
            let factory = ResourceFactory::new(kind, "r1");
            assert_eq!(factory.resource_type(), kind);
            assert_eq!(factory.id(), "r1");
        }
    }

    #[test]
    fn test_factory_exposes_only_own_draft() {
        let mut factory = ResourceFactory::new(ResourceType::Story, "r1");
        assert!(factory.story_mut().is_some());
        assert!(factory.choice_scene_mut().is_none());
        assert!(factory.achievement_mut().is_none());
    }

    #[test]
    fn test_build_reports_first_missing_field() {
        let factory = ResourceFactory::new(ResourceType::Story, "r1");
        assert_eq!(factory.build().unwrap_err(), BuildError::MissingField("title"));
    }

    #[test]
    fn test_build_story_resource() {
        let mut factory = ResourceFactory::new(ResourceType::Story, "r1");
        let story = factory.story_mut().unwrap();
        story.title("Separate Paths");
        story.start("intro").unwrap();

        let resource = factory.build().unwrap();
        assert_eq!(resource.id(), "r1");
        assert_eq!(resource.resource_type(), ResourceType::Story);
        assert_eq!(resource.as_story().unwrap().title, "Separate Paths");
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        assert!(non_empty("next", "  ").is_err());
        assert_eq!(non_empty("next", "intro").unwrap(), "intro");
    }
}
