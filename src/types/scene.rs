//! Narrative scene resources.
//!
//! A choice scene shows text and offers the reader selectable continuations.
//! An end scene terminates a branch and may unlock achievements.
//!
//! # Example
//!
//! ```xml
//! <resource id="char1-start">
//!   <scene type="choice">
//!     <speaker>Narrator</speaker>
//!     <text>The bus stops at the corner.</text>
//!     <choices>
//!       <choice next="char1-board">Get on</choice>
//!       <choice next="char1-walk">Walk instead</choice>
//!     </choices>
//!   </scene>
//! </resource>
//! ```

use serde::Serialize;

use super::factory::{non_empty, BuildError};

/// A selectable continuation of a choice scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Text shown for the option.
    pub label: String,
    /// Id of the scene this choice leads to.
    pub next: String,
    /// Achievement that must be unlocked for the choice to be offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
}

impl Choice {
    /// Create a choice, rejecting an empty label or target.
    pub fn new(label: impl Into<String>, next: impl Into<String>) -> Result<Self, BuildError> {
        Ok(Self {
            label: non_empty("label", label)?,
            next: non_empty("next", next)?,
            requires: None,
        })
    }

    /// Gate the choice on an achievement.
    pub fn with_requires(mut self, achievement: impl Into<String>) -> Result<Self, BuildError> {
        self.requires = Some(non_empty("requires", achievement)?);
        Ok(self)
    }

    pub fn is_gated(&self) -> bool {
        self.requires.is_some()
    }
}

/// A branching narrative node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceScene {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub choices: Vec<Choice>,
}

impl ChoiceScene {
    /// Ids of every scene reachable from this one.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.next.as_str())
    }
}

/// A terminal narrative node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndScene {
    /// Title of the ending.
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// Achievements unlocked on reaching this ending.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unlocks: Vec<String>,
}

/// Builder for choice scenes.
#[derive(Debug, Clone, Default)]
pub struct ChoiceSceneBuilder {
    text: Option<String>,
    speaker: Option<String>,
    background: Option<String>,
    choices: Vec<Choice>,
}

impl ChoiceSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn speaker(&mut self, speaker: impl Into<String>) -> &mut Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn background(&mut self, background: impl Into<String>) -> &mut Self {
        self.background = Some(background.into());
        self
    }

    pub fn add_choice(&mut self, choice: Choice) -> &mut Self {
        self.choices.push(choice);
        self
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Build the scene. Requires text and at least one choice.
    pub fn build(self) -> Result<ChoiceScene, BuildError> {
        let text = self.text.ok_or(BuildError::MissingField("text"))?;
        if self.choices.is_empty() {
            return Err(BuildError::MissingField("choices"));
        }

        Ok(ChoiceScene {
            text,
            speaker: self.speaker,
            background: self.background,
            choices: self.choices,
        })
    }
}

/// Builder for end scenes.
#[derive(Debug, Clone, Default)]
pub struct EndSceneBuilder {
    title: Option<String>,
    text: Option<String>,
    speaker: Option<String>,
    unlocks: Vec<String>,
}

impl EndSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn speaker(&mut self, speaker: impl Into<String>) -> &mut Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Record an achievement unlocked by this ending. Duplicates are ignored.
    pub fn unlock(&mut self, achievement: impl Into<String>) -> Result<&mut Self, BuildError> {
        let achievement = non_empty("unlock", achievement)?;
        if !self.unlocks.contains(&achievement) {
            self.unlocks.push(achievement);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<EndScene, BuildError> {
        let title = self.title.ok_or(BuildError::MissingField("title"))?;
        let text = self.text.ok_or(BuildError::MissingField("text"))?;

        Ok(EndScene {
            title,
            text,
            speaker: self.speaker,
            unlocks: self.unlocks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_rejects_empty_target() {
        let err = Choice::new("Go", "").unwrap_err();
        assert!(matches!(err, BuildError::InvalidField { field: "next", .. }));
    }

    #[test]
    fn test_choice_with_requires() {
        let choice = Choice::new("Open the door", "vault")
            .unwrap()
            .with_requires("found-key")
            .unwrap();
        assert!(choice.is_gated());
        assert_eq!(choice.requires.as_deref(), Some("found-key"));
    }

    #[test]
    fn test_choice_scene_builder() {
        let mut builder = ChoiceSceneBuilder::new();
        builder.text("Where to?").speaker("Guide");
        builder.add_choice(Choice::new("Left", "left-path").unwrap());
        builder.add_choice(Choice::new("Right", "right-path").unwrap());

        let scene = builder.build().unwrap();
        assert_eq!(scene.text, "Where to?");
        assert_eq!(scene.speaker.as_deref(), Some("Guide"));
        assert_eq!(scene.targets().collect::<Vec<_>>(), vec!["left-path", "right-path"]);
    }

    #[test]
    fn test_choice_scene_requires_text_first() {
        let builder = ChoiceSceneBuilder::new();
        assert_eq!(builder.build().unwrap_err(), BuildError::MissingField("text"));
    }

    #[test]
    fn test_choice_scene_requires_choices() {
        let mut builder = ChoiceSceneBuilder::new();
        builder.text("Nothing to pick");
        assert_eq!(builder.build().unwrap_err(), BuildError::MissingField("choices"));
    }

    #[test]
    fn test_end_scene_builder() {
        let mut builder = EndSceneBuilder::new();
        builder.title("Home").text("You made it.");
        builder.unlock("made-it-home").unwrap();
        builder.unlock("made-it-home").unwrap();

        let scene = builder.build().unwrap();
        assert_eq!(scene.title, "Home");
        assert_eq!(scene.unlocks, vec!["made-it-home"]);
    }

    #[test]
    fn test_end_scene_missing_title() {
        let mut builder = EndSceneBuilder::new();
        builder.text("The end.");
        assert_eq!(builder.build().unwrap_err(), BuildError::MissingField("title"));
    }

    #[test]
    fn test_end_scene_rejects_blank_unlock() {
        let mut builder = EndSceneBuilder::new();
        assert!(builder.unlock(" ").is_err());
    }
}
