//! Achievement descriptor reader.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::path::ResourcePath;
use crate::types::{ResourceFactory, ResourceType};

use super::body::{next_child, read_text, unexpected};
use super::events::{EventSource, StartTag};
use super::reader::{mismatched_factory, TypeReader};

/// Reader for `<achievement>` bodies.
#[derive(Debug, Default, Clone, Copy)]
pub struct AchievementReader;

impl TypeReader for AchievementReader {
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
            .achievement_mut()
            .ok_or_else(|| mismatched_factory(ResourceType::Achievement, found))?;

        while let Some(child) = next_child(events, &element.name)? {
            match child.name.as_str() {
                "name" => {
                    builder.name(read_text(events, "name")?);
                }
                "description" => {
                    builder.description(read_text(events, "description")?);
                }
                "hidden" => {
                    let value = read_text(events, "hidden")?;
                    builder.hidden(parse_bool("hidden", &value)?);
                }
                "points" => {
                    let value = read_text(events, "points")?;
                    let points = value.parse::<u32>().map_err(|e| ParseError::InvalidValue {
                        element: "points".to_string(),
                        message: format!("'{}' is not a point count ({})", value, e),
                    })?;
                    builder.points(points);
                }
                _ => return Err(unexpected(&child, &element.name)),
            }
        }

        debug!(path = %path.name(), id = %id, "Read achievement");
        Ok(())
    }
}

fn parse_bool(element: &str, value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::InvalidValue {
            element: element.to_string(),
            message: format!("expected true or false, found '{}'", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::events::{XmlEvent, XmlEventReader};
    use crate::path::MemoryPath;
    use crate::types::Achievement;

    fn read(xml: &str) -> Result<Achievement> {
        let mut events = XmlEventReader::new(xml.as_bytes());
        let element = match events.next_event()? {
            XmlEvent::Start(tag) => tag,
            other => panic!("Expected start tag, got {:?}", other),
        };
        let mut factory = ResourceFactory::new(ResourceType::Achievement, "a1");
        AchievementReader.read(&mut events, &MemoryPath::new("a1.xml", xml), &element, &mut factory)?;
        let resource = factory
            .build()
            .map_err(|e| ParseError::from_build(e, "achievement"))?;
        Ok(resource.as_achievement().cloned().unwrap())
    }

    #[test]
    fn test_read_achievement() {
        let achievement = read(
            "<achievement>
                <name>Patience</name>
                <description>Wait for the next bus</description>
                <hidden>TRUE</hidden>
                <points>25</points>
            </achievement>",
        )
        .unwrap();

        assert_eq!(achievement.name, "Patience");
        assert_eq!(achievement.description, "Wait for the next bus");
        assert!(achievement.hidden);
        assert_eq!(achievement.points, 25);
    }

    #[test]
    fn test_invalid_hidden() {
        let err = read("<achievement><hidden>maybe</hidden></achievement>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_invalid_points() {
        let err = read("<achievement><points>-3</points></achievement>").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref element, .. } if element == "points"));
    }

    #[test]
    fn test_missing_name() {
        let err = read("<achievement><description>Hi</description></achievement>").unwrap_err();
        assert!(matches!(err, ParseError::MissingRequiredField { field: "name" }));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("hidden", "true").unwrap());
        assert!(!parse_bool("hidden", "False").unwrap());
        assert!(parse_bool("hidden", "1").is_err());
    }
}
