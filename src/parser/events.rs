//! Pull-based markup event stream.
//!
//! `XmlEventReader` adapts quick-xml into owned events. Empty elements are
//! expanded into a start/end pair. Comments, processing instructions, the XML
//! declaration and doctype are skipped. CDATA is delivered as text.

use std::collections::VecDeque;
use std::io::BufRead;

use quick_xml::errors::{IllFormedError, SyntaxError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ParseError, Result};

/// An opening tag with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Local name (namespace prefix stripped).
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Get an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A markup event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    Start(StartTag),
    End(String),
    Text(String),
    Eof,
}

impl XmlEvent {
    pub fn start(name: &str, attributes: &[(&str, &str)]) -> Self {
        let tag = attributes
            .iter()
            .fold(StartTag::new(name), |tag, (k, v)| tag.with_attribute(*k, *v));
        XmlEvent::Start(tag)
    }

    pub fn end(name: &str) -> Self {
        XmlEvent::End(name.to_string())
    }

    pub fn text(text: &str) -> Self {
        XmlEvent::Text(text.to_string())
    }

    /// Whitespace-only text between elements carries no content.
    pub fn is_blank(&self) -> bool {
        matches!(self, XmlEvent::Text(text) if text.trim().is_empty())
    }
}

/// Source of markup events, consumed front to back.
///
/// After the end of input, `next_event` keeps returning `XmlEvent::Eof`.
pub trait EventSource {
    fn next_event(&mut self) -> Result<XmlEvent>;

    /// Byte offset of the reader, for diagnostics.
    fn position(&self) -> u64 {
        0
    }
}

/// Event source over an XML byte stream.
pub struct XmlEventReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> XmlEventReader<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;
        reader.config_mut().check_end_names = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    pub fn get_mut(&mut self) -> &mut R {
        self.reader.get_mut()
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn convert_error(&self, error: quick_xml::Error) -> ParseError {
        match error {
            quick_xml::Error::Syntax(SyntaxError::InvalidBangMarkup) => ParseError::Malformed {
                position: self.position(),
                message: SyntaxError::InvalidBangMarkup.to_string(),
            },
            // Every other syntax error is a construct left open at end of input.
            quick_xml::Error::Syntax(_) => ParseError::UnexpectedEof,
            quick_xml::Error::IllFormed(IllFormedError::UnmatchedEndTag(name)) => {
                ParseError::UnexpectedClosingTag { name }
            }
            quick_xml::Error::IllFormed(IllFormedError::MismatchedEndTag { found, .. }) => {
                ParseError::UnexpectedClosingTag { name: found }
            }
            other => ParseError::Malformed {
                position: self.position(),
                message: other.to_string(),
            },
        }
    }

    fn convert_start(&self, start: &BytesStart<'_>) -> Result<StartTag> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut tag = StartTag::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| ParseError::Malformed {
                position: self.position(),
                message: format!("Failed to parse XML attribute: {}", e),
            })?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| self.convert_error(e))?
                .into_owned();
            tag.attributes.push((key, value));
        }

        Ok(tag)
    }
}

impl<R: BufRead> EventSource for XmlEventReader<R> {
    fn next_event(&mut self) -> Result<XmlEvent> {
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map(|event| event.into_owned());
            let event = match event {
                Ok(event) => event,
                Err(e) => return Err(self.convert_error(e)),
            };

            match event {
                Event::Start(start) | Event::Empty(start) => {
                    return self.convert_start(&start).map(XmlEvent::Start);
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.local_name().as_ref()).into_owned();
                    return Ok(XmlEvent::End(name));
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| self.convert_error(e))?;
                    return Ok(XmlEvent::Text(text.into_owned()));
                }
                Event::CData(cdata) => {
                    let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    return Ok(XmlEvent::Text(text));
                }
                Event::Eof => return Ok(XmlEvent::Eof),
                // Comments, declarations, processing instructions, doctype
                _ => continue,
            }
        }
    }

    fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }
}

/// Event source replaying a fixed sequence.
///
/// Lets callers feed documents produced by another tokenizer, and drives the
/// state machine in tests with event orders a well-formed XML reader never
/// emits.
#[derive(Debug, Clone, Default)]
pub struct RecordedEvents {
    events: VecDeque<XmlEvent>,
}

impl RecordedEvents {
    pub fn new(events: impl IntoIterator<Item = XmlEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for RecordedEvents {
    fn next_event(&mut self) -> Result<XmlEvent> {
        Ok(self.events.pop_front().unwrap_or(XmlEvent::Eof))
    }
}
