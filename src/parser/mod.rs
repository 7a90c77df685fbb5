//! Parser modules for resource documents.
//!
//! This module turns one XML resource document into one `Resource`.
//!
//! # Document Structure
//!
//! Each document has:
//! - A `<resource id="...">` root carrying the resource id
//! - Exactly one type element, whose tag (optionally qualified by a `type`
//!   attribute) selects the resource kind
//! - A kind-specific body inside the type element
//!
//! # Usage
//!
//! ```ignore
//! use storyres::parser::read_resource;
//! use storyres::FilePath;
//!
//! let resource = read_resource(&FilePath::new("scenes/char1-start.xml"))?;
//! println!("Found: {} ({})", resource.id(), resource.resource_type());
//! ```

mod achievement;
mod body;
mod document;
mod reader;
mod scene;
mod story;
pub mod events;

// Re-export main entry points
pub use achievement::AchievementReader;
pub use document::{parse_str, read_resource, ResourceReader, ID_ATTRIBUTE, ROOT, TYPE_ATTRIBUTE};
pub use events::{EventSource, RecordedEvents, StartTag, XmlEvent, XmlEventReader};
pub use reader::TypeReader;
pub use scene::{ChoiceSceneReader, EndSceneReader};
pub use story::StoryReader;
