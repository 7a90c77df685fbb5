//! Helpers for walking a type element's body.
//!
//! Whitespace-only text between elements is ignored. Text is only accepted
//! inside text-valued elements, where it is trimmed.

use crate::error::{ParseError, Result};

use super::events::{EventSource, StartTag, XmlEvent};

/// Advance to the next child element of `parent`.
///
/// Returns `None` once `parent`'s closing tag has been consumed.
pub fn next_child(events: &mut dyn EventSource, parent: &str) -> Result<Option<StartTag>> {
    loop {
        match events.next_event()? {
            XmlEvent::Start(tag) => return Ok(Some(tag)),
            XmlEvent::End(name) if name == parent => return Ok(None),
            XmlEvent::End(name) => return Err(ParseError::UnexpectedClosingTag { name }),
            XmlEvent::Text(text) if text.trim().is_empty() => continue,
            XmlEvent::Text(text) => {
                return Err(ParseError::InvalidValue {
                    element: parent.to_string(),
                    message: format!("unexpected text '{}'", text.trim()),
                })
            }
            XmlEvent::Eof => return Err(ParseError::UnexpectedEof),
        }
    }
}

/// Read the text of `element` through its closing tag.
///
/// Returns `None` when the element holds no text.
pub fn read_optional_text(events: &mut dyn EventSource, element: &str) -> Result<Option<String>> {
    let mut content = String::new();

    loop {
        match events.next_event()? {
            XmlEvent::Text(text) => content.push_str(&text),
            XmlEvent::End(name) if name == element => break,
            XmlEvent::End(name) => return Err(ParseError::UnexpectedClosingTag { name }),
            XmlEvent::Start(tag) => return Err(unexpected(&tag, element)),
            XmlEvent::Eof => return Err(ParseError::UnexpectedEof),
        }
    }

    let trimmed = content.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Read the text of `element`, failing with `MissingValue` when empty.
pub fn read_text(events: &mut dyn EventSource, element: &str) -> Result<String> {
    read_optional_text(events, element)?.ok_or_else(|| ParseError::MissingValue {
        element: element.to_string(),
    })
}

/// Error for a child element the grammar does not allow.
pub fn unexpected(tag: &StartTag, parent: &str) -> ParseError {
    ParseError::UnexpectedElement {
        name: tag.name.clone(),
        parent: parent.to_string(),
    }
}

/// Read a required attribute, failing with `InvalidValue` when absent or blank.
pub fn required_attribute<'a>(tag: &'a StartTag, name: &str) -> Result<&'a str> {
    match tag.attribute(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ParseError::InvalidValue {
            element: tag.name.clone(),
            message: format!("missing '{}' attribute", name),
        }),
    }
}
