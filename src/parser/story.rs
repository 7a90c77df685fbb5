//! Story descriptor reader.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::path::ResourcePath;
use crate::types::{ResourceFactory, ResourceType};

use super::body::{next_child, read_text, unexpected};
use super::events::{EventSource, StartTag};
use super::reader::{mismatched_factory, TypeReader};

/// Reader for `<story>` bodies.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoryReader;

impl TypeReader for StoryReader {
    fn read(
        &self,
        events: &mut dyn EventSource,
        path: &dyn ResourcePath,
        element: &StartTag,
        factory: &mut ResourceFactory,
    ) -> Result<()> {
        let id = factory.id().to_string();
        let found = factory.resource_type();
        let builder = factory
            .story_mut()
            .ok_or_else(|| mismatched_factory(ResourceType::Story, found))?;

        while let Some(child) = next_child(events, &element.name)? {
            match child.name.as_str() {
                "title" => {
                    builder.title(read_text(events, "title")?);
                }
                "start" => {
                    let start = read_text(events, "start")?;
                    builder
                        .start(start)
                        .map_err(|e| ParseError::from_build(e, "start"))?;
                }
                "author" => {
                    builder.author(read_text(events, "author")?);
                }
                "description" => {
                    builder.description(read_text(events, "description")?);
                }
                "version" => {
                    builder.version(read_text(events, "version")?);
                }
                _ => return Err(unexpected(&child, &element.name)),
            }
        }

        debug!(path = %path.name(), id = %id, "Read story");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::events::{RecordedEvents, XmlEvent};
    use crate::path::MemoryPath;

    fn story_events(children: Vec<XmlEvent>) -> RecordedEvents {
        let mut events = children;
        events.push(XmlEvent::end("Story"));
        RecordedEvents::new(events)
    }

    #[test]
    fn test_read_story() {
        let mut events = story_events(vec![
            XmlEvent::start("title", &[]),
            XmlEvent::text("Separate but UnEqual"),
            XmlEvent::end("title"),
            XmlEvent::text("\n"),
            XmlEvent::start("start", &[]),
            XmlEvent::text("char1-start"),
            XmlEvent::end("start"),
            XmlEvent::start("version", &[]),
            XmlEvent::text("1.0"),
            XmlEvent::end("version"),
        ]);
        let mut factory = ResourceFactory::new(ResourceType::Story, "main");

        StoryReader
            .read(
                &mut events,
                &MemoryPath::new("main.xml", ""),
                &StartTag::new("Story"),
                &mut factory,
            )
            .unwrap();
        assert_eq!(events.remaining(), 0);

        let resource = factory.build().unwrap();
        let story = resource.as_story().unwrap();
        assert_eq!(story.title, "Separate but UnEqual");
        assert_eq!(story.start, "char1-start");
        assert_eq!(story.version.as_deref(), Some("1.0"));
        assert_eq!(story.author, None);
    }

    #[test]
    fn test_story_leaves_following_events() {
        let mut events = RecordedEvents::new(vec![
            XmlEvent::end("story"),
            XmlEvent::end("resource"),
        ]);
        let mut factory = ResourceFactory::new(ResourceType::Story, "main");

        StoryReader
            .read(
                &mut events,
                &MemoryPath::new("main.xml", ""),
                &StartTag::new("story"),
                &mut factory,
            )
            .unwrap();
        assert_eq!(events.next_event().unwrap(), XmlEvent::end("resource"));
    }

    #[test]
    fn test_story_empty_start() {
        let mut events = story_events(vec![
            XmlEvent::start("start", &[]),
            XmlEvent::text("   "),
            XmlEvent::end("start"),
        ]);
        let mut factory = ResourceFactory::new(ResourceType::Story, "main");

        let err = StoryReader
            .read(
                &mut events,
                &MemoryPath::new("main.xml", ""),
                &StartTag::new("Story"),
                &mut factory,
            )
            .unwrap_err();
        assert!(matches!(err, ParseError::MissingValue { ref element } if element == "start"));
    }
}
