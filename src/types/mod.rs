//! Core domain types for storyres.
//!
//! This module contains the values produced by the reader and the builders
//! that construct them:
//! - `Resource` / `ResourceType` - the immutable output and its kind
//! - `ResourceFactory` - per-document accumulator with deferred validation
//! - one value and builder per kind (scenes, story, achievement)

mod achievement;
mod factory;
mod resource;
mod scene;
mod story;

pub use achievement::{Achievement, AchievementBuilder};
pub use factory::{BuildError, Draft, ResourceFactory};
pub use resource::{Resource, ResourceBody, ResourceType};
pub use scene::{Choice, ChoiceScene, ChoiceSceneBuilder, EndScene, EndSceneBuilder};
pub use story::{Story, StoryBuilder};
