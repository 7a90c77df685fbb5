//! Scene body readers.
//!
//! Reads `<scene type="choice">` and `<scene type="end">` bodies into their
//! builders.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::path::ResourcePath;
use crate::types::{Choice, ChoiceSceneBuilder, ResourceFactory, ResourceType};

use super::body::{next_child, read_optional_text, read_text, required_attribute, unexpected};
use super::events::{EventSource, StartTag};
use super::reader::{mismatched_factory, TypeReader};

/// Reader for branching scenes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChoiceSceneReader;

impl TypeReader for ChoiceSceneReader {
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
            .choice_scene_mut()
            .ok_or_else(|| mismatched_factory(ResourceType::ChoiceScene, found))?;

        while let Some(child) = next_child(events, &element.name)? {
            match child.name.as_str() {
                "text" => {
                    builder.text(read_text(events, "text")?);
                }
                "speaker" => {
                    builder.speaker(read_text(events, "speaker")?);
                }
                "background" => {
                    builder.background(read_text(events, "background")?);
                }
                "choices" => read_choices(events, builder)?,
                _ => return Err(unexpected(&child, &element.name)),
            }
        }

        debug!(
            path = %path.name(),
            id = %id,
            choices = builder.choice_count(),
            "Read choice scene"
        );
        Ok(())
    }
}

/// Read a `<choices>` list. At least one `<choice>` is required.
fn read_choices(events: &mut dyn EventSource, builder: &mut ChoiceSceneBuilder) -> Result<()> {
    let mut count = 0;

    while let Some(child) = next_child(events, "choices")? {
        if child.name != "choice" {
            return Err(unexpected(&child, "choices"));
        }

        let next = required_attribute(&child, "next")?;
        let label = read_text(events, "choice")?;
        let mut choice = Choice::new(label, next).map_err(|e| ParseError::from_build(e, "choice"))?;
        if let Some(requires) = child.attribute("requires") {
            choice = choice
                .with_requires(requires)
                .map_err(|e| ParseError::from_build(e, "choice"))?;
        }

        builder.add_choice(choice);
        count += 1;
    }

    if count == 0 {
        return Err(ParseError::MissingSubelements {
            element: "choices".to_string(),
            expected: "<choice>",
        });
    }

    Ok(())
}

/// Reader for terminal scenes.
#[derive(Debug, Default, Clone, Copy)]
pub struct EndSceneReader;

impl TypeReader for EndSceneReader {
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
            .end_scene_mut()
            .ok_or_else(|| mismatched_factory(ResourceType::EndScene, found))?;

        while let Some(child) = next_child(events, &element.name)? {
            match child.name.as_str() {
                "title" => {
                    builder.title(read_text(events, "title")?);
                }
                "text" => {
                    builder.text(read_text(events, "text")?);
                }
                "speaker" => {
                    builder.speaker(read_text(events, "speaker")?);
                }
                "unlock" => {
                    // An empty <unlock/> is tolerated and unlocks nothing.
                    if let Some(achievement) = read_optional_text(events, "unlock")? {
                        builder
                            .unlock(achievement)
                            .map_err(|e| ParseError::from_build(e, "unlock"))?;
                    }
                }
                _ => return Err(unexpected(&child, &element.name)),
            }
        }

        debug!(path = %path.name(), id = %id, "Read end scene");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::events::{XmlEvent, XmlEventReader};
    use crate::path::MemoryPath;
    use crate::types::Resource;

    fn read_body(reader: &dyn TypeReader, kind: ResourceType, xml: &str) -> Result<Resource> {
        let mut events = XmlEventReader::new(xml.as_bytes());
        let element = match events.next_event()? {
            XmlEvent::Start(tag) => tag,
            other => panic!("Expected start tag, got {:?}", other),
        };
        let mut factory = ResourceFactory::new(kind, "test");
        reader.read(&mut events, &MemoryPath::new("test", xml), &element, &mut factory)?;

        // The reader must stop right after its own closing tag.
        assert_eq!(events.next_event()?, XmlEvent::Eof);

        factory
            .build()
            .map_err(|e| ParseError::from_build(e, &element.name))
    }

    fn read_choice(xml: &str) -> Result<Resource> {
        read_body(&ChoiceSceneReader, ResourceType::ChoiceScene, xml)
    }

    fn read_end(xml: &str) -> Result<Resource> {
        read_body(&EndSceneReader, ResourceType::EndScene, xml)
    }

    #[test]
    fn test_read_choice_scene() {
        let xml = r#"<scene type="choice">
            <speaker>Narrator</speaker>
            <background>bus-stop.png</background>
            <text>The bus stops at the corner.</text>
            <choices>
                <choice next="board">Get on</choice>
                <choice next="walk" requires="patient">Walk instead</choice>
            </choices>
        </scene>"#;

        let resource = read_choice(xml).unwrap();
        let scene = resource.as_choice_scene().unwrap();
        assert_eq!(scene.text, "The bus stops at the corner.");
        assert_eq!(scene.speaker.as_deref(), Some("Narrator"));
        assert_eq!(scene.background.as_deref(), Some("bus-stop.png"));
        assert_eq!(scene.choices.len(), 2);
        assert_eq!(scene.choices[0].label, "Get on");
        assert_eq!(scene.choices[0].next, "board");
        assert_eq!(scene.choices[1].requires.as_deref(), Some("patient"));
    }

    #[test]
    fn test_choice_scene_empty_text() {
        let xml = r#"<scene type="choice"><text/><choices><choice next="a">A</choice></choices></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingValue);
    }

    #[test]
    fn test_choice_scene_empty_choices() {
        let xml = r#"<scene type="choice"><text>Hi</text><choices>  </choices></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSubelements { ref element, .. } if element == "choices"
        ));
    }

    #[test]
    fn test_choice_scene_without_choices_element() {
        let xml = r#"<scene type="choice"><text>Hi</text></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert!(matches!(err, ParseError::MissingRequiredField { field: "choices" }));
    }

    #[test]
    fn test_choice_missing_next() {
        let xml = r#"<scene type="choice"><text>Hi</text><choices><choice>A</choice></choices></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_choice_blank_requires() {
        let xml = r#"<scene type="choice"><text>Hi</text>
            <choices><choice next="a" requires="">A</choice></choices></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_choice_scene_unknown_child() {
        let xml = r#"<scene type="choice"><music>theme.ogg</music></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedElement { ref name, ref parent } if name == "music" && parent == "scene"
        ));
    }

    #[test]
    fn test_choices_rejects_other_children() {
        let xml = r#"<scene type="choice"><text>Hi</text><choices><option next="a">A</option></choices></scene>"#;
        let err = read_choice(xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedElement);
    }

    #[test]
    fn test_choice_scene_truncated() {
        let xml = r#"<scene type="choice"><text>Hi</text>"#;
        let err = read_choice(xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_end_scene() {
        let xml = r#"<scene type="end">
            <title>Home at last</title>
            <text>You made it home.</text>
            <unlock>made-it-home</unlock>
            <unlock/>
        </scene>"#;

        let resource = read_end(xml).unwrap();
        let scene = resource.as_end_scene().unwrap();
        assert_eq!(scene.title, "Home at last");
        assert_eq!(scene.text, "You made it home.");
        assert_eq!(scene.unlocks, vec!["made-it-home"]);
    }

    #[test]
    fn test_end_scene_missing_title() {
        let xml = r#"<scene type="end"><text>Done.</text></scene>"#;
        let err = read_end(xml).unwrap_err();
        assert!(matches!(err, ParseError::MissingRequiredField { field: "title" }));
    }

    #[test]
    fn test_reader_rejects_other_factory() {
        let xml = r#"<scene type="end"><text>Done.</text></scene>"#;
        let err = read_body(&EndSceneReader, ResourceType::Story, xml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }
}
