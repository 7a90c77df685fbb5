//! The capability shared by all type-specific sub-parsers.

use crate::error::{ParseError, Result};
use crate::path::ResourcePath;
use crate::types::{ResourceFactory, ResourceType};

use super::events::{EventSource, StartTag};

/// Reads the body of one type element into a factory.
///
/// `element` is the type element's opening tag, already consumed. An
/// implementation must consume the body and the matching closing tag, and
/// nothing after it.
pub trait TypeReader: Send + Sync {
    fn read(
        &self,
        events: &mut dyn EventSource,
        path: &dyn ResourcePath,
        element: &StartTag,
        factory: &mut ResourceFactory,
    ) -> Result<()>;
}

/// Error for a reader wired to a factory of another kind.
pub(crate) fn mismatched_factory(expected: ResourceType, found: ResourceType) -> ParseError {
    tracing::debug!(
        expected = %expected,
        found = %found,
        "Reader received a factory of another kind"
    );
    ParseError::UnsupportedType {
        resource_type: found,
        missing: "matching reader",
    }
}
