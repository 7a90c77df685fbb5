//! storyres - Story resource document loader
//!
//! A library for reading XML resource documents (choice scenes, end scenes,
//! stories and achievements) into immutable, validated resource values.
//!
//! ```ignore
//! use storyres::{read_resource, FilePath};
//!
//! let resource = read_resource(&FilePath::new("scenes/start.xml"))?;
//! assert_eq!(resource.id(), "start");
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod path;
pub mod registry;
pub mod types;

pub use error::{ErrorKind, ParseError, Result};
pub use manifest::{Manifest, OutputFormat};
pub use parser::{parse_str, read_resource, ResourceReader, TypeReader};
pub use path::{FilePath, MemoryPath, ResourcePath, ResourceStream};
pub use registry::TypeRegistry;
pub use types::{
    Achievement, AchievementBuilder, BuildError, Choice, ChoiceScene, ChoiceSceneBuilder, EndScene,
    EndSceneBuilder, Resource, ResourceBody, ResourceFactory, ResourceType, Story, StoryBuilder,
};
