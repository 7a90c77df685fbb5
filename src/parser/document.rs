//! Resource document reading.
//!
//! A document has a fixed two-level grammar:
//!
//! ```xml
//! <resource id="ID">
//!   <TypeTag [type="subtype"]>
//!     ... kind-specific body ...
//!   </TypeTag>
//! </resource>
//! ```
//!
//! The root carries the resource id. Its single child selects the kind and
//! is handed to that kind's reader. The reader consumes the child through its
//! closing tag, and the root's closing tag finalizes the factory.

use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::path::{MemoryPath, ResourcePath, ResourceStream};
use crate::registry::TypeRegistry;
use crate::types::{Resource, ResourceFactory, ResourceType};

use super::events::{EventSource, StartTag, XmlEvent, XmlEventReader};

/// Tag name of the root element.
pub const ROOT: &str = "resource";
/// Root attribute holding the resource id.
pub const ID_ATTRIBUTE: &str = "id";
/// Type element attribute qualifying the kind.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Position in the document grammar.
///
/// Transitions only move forward. Reading the type body happens inside the
/// `AwaitingType → TypeRead` transition, and the machine is done once the
/// root closes.
#[derive(Debug)]
enum ParserState {
    AwaitingRoot,
    AwaitingType {
        id: String,
    },
    TypeRead {
        factory: ResourceFactory,
        tag: String,
    },
}

/// Reads resource documents, dispatching type elements through a registry.
#[derive(Debug, Clone, Copy)]
pub struct ResourceReader<'r> {
    registry: &'r TypeRegistry,
}

impl ResourceReader<'static> {
    /// A reader over the built-in kinds.
    pub fn standard() -> Self {
        Self::new(TypeRegistry::standard())
    }
}

impl Default for ResourceReader<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'r> ResourceReader<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Open the path and read the resource it describes.
    pub fn read(&self, path: &dyn ResourcePath) -> Result<Resource> {
        let stream = path.open().map_err(|source| ParseError::Io {
            path: path.name(),
            source,
        })?;
        self.read_stream(stream, path)
    }

    /// Read a resource from an already opened stream.
    ///
    /// The stream is closed once the root element closes. A failed close is
    /// logged and does not affect the result. On error the stream is dropped
    /// without calling `close`.
    pub fn read_stream<S: ResourceStream>(&self, stream: S, path: &dyn ResourcePath) -> Result<Resource> {
        let mut events = XmlEventReader::new(stream);
        let factory = self.read_document(&mut events, path)?;

        let mut stream = events.into_inner();
        if let Err(e) = stream.close() {
            warn!(path = %path.name(), error = %e, "Could not close input resource stream");
        }
        drop(stream);

        finish(factory)
    }

    /// Read a resource from an event source.
    pub fn read_events(&self, events: &mut dyn EventSource, path: &dyn ResourcePath) -> Result<Resource> {
        let factory = self.read_document(events, path)?;
        finish(factory)
    }

    /// Run the document grammar up to and including the root's closing tag.
    fn read_document(&self, events: &mut dyn EventSource, path: &dyn ResourcePath) -> Result<ResourceFactory> {
        let mut state = ParserState::AwaitingRoot;

        loop {
            let event = events.next_event()?;

            state = match (state, event) {
                (state, XmlEvent::Text(text)) => {
                    if !text.trim().is_empty() {
                        debug!(path = %path.name(), "Ignoring text outside the type element");
                    }
                    state
                }

                (ParserState::AwaitingRoot, XmlEvent::Start(tag)) => {
                    let id = read_root(&tag)?;
                    debug!(path = %path.name(), id = %id, "Read root element");
                    ParserState::AwaitingType { id }
                }
                (ParserState::AwaitingRoot, XmlEvent::Eof) => {
                    return Err(ParseError::MissingRootElement);
                }

                (ParserState::AwaitingType { id }, XmlEvent::Start(tag)) => {
                    let factory = self.read_type(events, path, &id, &tag)?;
                    ParserState::TypeRead {
                        factory,
                        tag: tag.name,
                    }
                }
                (ParserState::AwaitingType { .. }, XmlEvent::End(name)) if name == ROOT => {
                    return Err(ParseError::MissingTypeElement);
                }

                (ParserState::TypeRead { tag, .. }, XmlEvent::Start(extra)) => {
                    return Err(ParseError::DuplicateType {
                        first: tag,
                        found: extra.name,
                    });
                }
                (ParserState::TypeRead { factory, .. }, XmlEvent::End(name)) if name == ROOT => {
                    return Ok(factory);
                }

                (_, XmlEvent::End(name)) => {
                    return Err(ParseError::UnexpectedClosingTag { name });
                }
                (_, XmlEvent::Eof) => return Err(ParseError::UnexpectedEof),
            };
        }
    }

    /// Resolve the type element, then let the kind's reader consume its body.
    fn read_type(
        &self,
        events: &mut dyn EventSource,
        path: &dyn ResourcePath,
        id: &str,
        tag: &StartTag,
    ) -> Result<ResourceFactory> {
        let (token, resolved) = ResourceType::resolve(&tag.name, tag.attribute(TYPE_ATTRIBUTE));
        let resource_type = resolved.ok_or(ParseError::UnknownType { token })?;

        let mut factory = self.registry.new_factory(resource_type, id)?;
        let reader = self.registry.reader(resource_type)?;

        debug!(
            path = %path.name(),
            id = %id,
            resource_type = %resource_type,
            "Dispatching type element"
        );
        reader.read(events, path, tag, &mut factory)?;

        Ok(factory)
    }
}

/// Validate the root element and extract the resource id.
fn read_root(tag: &StartTag) -> Result<String> {
    if tag.name != ROOT {
        return Err(ParseError::InvalidRoot {
            found: tag.name.clone(),
        });
    }

    let id = match tag.attribute(ID_ATTRIBUTE) {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => return Err(ParseError::MissingId),
    };

    for (key, _) in tag.attributes.iter().filter(|(key, _)| key != ID_ATTRIBUTE) {
        debug!(attribute = %key, "Ignoring extra root attribute");
    }

    Ok(id)
}

fn finish(factory: ResourceFactory) -> Result<Resource> {
    let resource = factory
        .build()
        .map_err(|e| ParseError::from_build(e, ROOT))?;
    debug!(id = %resource.id(), resource_type = %resource.resource_type(), "Built resource");
    Ok(resource)
}

/// Read a resource with the built-in registry.
pub fn read_resource(path: &dyn ResourcePath) -> Result<Resource> {
    ResourceReader::standard().read(path)
}

/// Parse a resource document held in a string.
///
/// `name` only labels diagnostics.
pub fn parse_str(name: &str, source: &str) -> Result<Resource> {
    read_resource(&MemoryPath::new(name, source))
}
