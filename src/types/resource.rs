//! The immutable resource value and its closed kind enumeration.
//!
//! Resources are identified by their id and kind. The kind is selected in a
//! document by the type element's tag, optionally qualified by a `type`
//! attribute (`<scene type="choice">` resolves to `CHOICE_SCENE`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Achievement, ChoiceScene, EndScene, Story};

/// The kind of resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    ChoiceScene,
    EndScene,
    Story,
    Achievement,
}

impl ResourceType {
    /// All kinds, in declaration order.
    pub const ALL: [ResourceType; 4] = [
        ResourceType::ChoiceScene,
        ResourceType::EndScene,
        ResourceType::Story,
        ResourceType::Achievement,
    ];

    /// The upper-case token documents resolve to.
    pub fn token(&self) -> &'static str {
        match self {
            ResourceType::ChoiceScene => "CHOICE_SCENE",
            ResourceType::EndScene => "END_SCENE",
            ResourceType::Story => "STORY",
            ResourceType::Achievement => "ACHIEVEMENT",
        }
    }

    /// Canonical type element: tag name and optional `type` attribute.
    pub fn element(&self) -> (&'static str, Option<&'static str>) {
        match self {
            ResourceType::ChoiceScene => ("scene", Some("choice")),
            ResourceType::EndScene => ("scene", Some("end")),
            ResourceType::Story => ("story", None),
            ResourceType::Achievement => ("achievement", None),
        }
    }

    /// Look up a kind by token, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.token().eq_ignore_ascii_case(token))
    }

    /// Combine a type element's tag with its optional subtype attribute.
    ///
    /// Returns the joined token alongside the resolved kind so callers can
    /// report the token when it does not resolve.
    pub fn resolve(tag: &str, subtype: Option<&str>) -> (String, Option<Self>) {
        let token = match subtype {
            Some(subtype) => format!("{}_{}", subtype, tag),
            None => tag.to_string(),
        };
        let token = token.to_uppercase();
        let resolved = Self::from_token(&token);
        (token, resolved)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown resource type '{}'", s))
    }
}

/// Kind-specific contents of a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceBody {
    ChoiceScene(ChoiceScene),
    EndScene(EndScene),
    Story(Story),
    Achievement(Achievement),
}

impl ResourceBody {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            ResourceBody::ChoiceScene(_) => ResourceType::ChoiceScene,
            ResourceBody::EndScene(_) => ResourceType::EndScene,
            ResourceBody::Story(_) => ResourceType::Story,
            ResourceBody::Achievement(_) => ResourceType::Achievement,
        }
    }
}

/// A fully validated resource.
///
/// Only builders construct resources, so a `Resource` always carries every
/// mandatory field of its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    id: String,
    #[serde(rename = "type")]
    resource_type: ResourceType,
    body: ResourceBody,
}

impl Resource {
    pub(crate) fn new(id: String, body: ResourceBody) -> Self {
        Self {
            id,
            resource_type: body.resource_type(),
            body,
        }
    }

    /// The resource id from the root element.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn body(&self) -> &ResourceBody {
        &self.body
    }

    pub fn as_choice_scene(&self) -> Option<&ChoiceScene> {
        match &self.body {
            ResourceBody::ChoiceScene(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn as_end_scene(&self) -> Option<&EndScene> {
        match &self.body {
            ResourceBody::EndScene(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn as_story(&self) -> Option<&Story> {
        match &self.body {
            ResourceBody::Story(story) => Some(story),
            _ => None,
        }
    }

    pub fn as_achievement(&self) -> Option<&Achievement> {
        match &self.body {
            ResourceBody::Achievement(achievement) => Some(achievement),
            _ => None,
        }
    }
}
