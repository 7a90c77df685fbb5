use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{BuildError, ResourceType};

/// Error raised while reading a resource document.
///
/// Every variant aborts the current parse. `kind()` gives a fieldless view
/// for callers that only care about the category.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("IO error with {path}: {source}")]
    #[diagnostic(code(res::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML at byte {position}: {message}")]
    #[diagnostic(code(res::malformed))]
    Malformed { position: u64, message: String },

    #[error("Invalid root element <{found}>")]
    #[diagnostic(
        code(res::invalid_root),
        help("Resource documents start with <resource id=\"...\">")
    )]
    InvalidRoot { found: String },

    #[error("Missing Resource ID attribute in root element")]
    #[diagnostic(code(res::missing_id), help("Add a non-empty id attribute to <resource>"))]
    MissingId,

    #[error("Extra type element <{found}> found after <{first}>")]
    #[diagnostic(code(res::duplicate_type), help("A resource has exactly one type element"))]
    DuplicateType { first: String, found: String },

    #[error("Invalid Resource type <{token}>")]
    #[diagnostic(code(res::unknown_type))]
    UnknownType { token: String },

    #[error("Resource type {resource_type} does not have a {missing}")]
    #[diagnostic(code(res::unsupported_type))]
    UnsupportedType {
        resource_type: ResourceType,
        missing: &'static str,
    },

    #[error("Missing specific resource type element")]
    #[diagnostic(code(res::missing_type))]
    MissingTypeElement,

    #[error("Unexpected closing tag </{name}>")]
    #[diagnostic(code(res::unexpected_closing_tag))]
    UnexpectedClosingTag { name: String },

    #[error("Unexpected EOF encountered")]
    #[diagnostic(code(res::unexpected_eof))]
    UnexpectedEof,

    #[error("Missing root element")]
    #[diagnostic(code(res::missing_root))]
    MissingRootElement,

    #[error("Missing required element: {field}")]
    #[diagnostic(code(res::missing_field))]
    MissingRequiredField { field: &'static str },

    #[error("Invalid value in <{element}>: {message}")]
    #[diagnostic(code(res::invalid_value))]
    InvalidValue { element: String, message: String },

    #[error("Encountered element <{element}> with no value")]
    #[diagnostic(code(res::missing_value))]
    MissingValue { element: String },

    #[error("<{element}> element missing required subelements ({expected})")]
    #[diagnostic(code(res::missing_subelements))]
    MissingSubelements {
        element: String,
        expected: &'static str,
    },

    #[error("Unexpected element <{name}> inside <{parent}>")]
    #[diagnostic(code(res::unexpected_element))]
    UnexpectedElement { name: String, parent: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(res::config), help("Check storyres.yaml syntax"))]
    Config { message: String },
}

/// Category of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Malformed,
    InvalidRoot,
    MissingId,
    DuplicateType,
    UnknownType,
    UnsupportedType,
    MissingTypeElement,
    UnexpectedClosingTag,
    UnexpectedEof,
    MissingRootElement,
    MissingRequiredField,
    InvalidValue,
    MissingValue,
    MissingSubelements,
    UnexpectedElement,
    Config,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Io { .. } => ErrorKind::Io,
            ParseError::Malformed { .. } => ErrorKind::Malformed,
            ParseError::InvalidRoot { .. } => ErrorKind::InvalidRoot,
            ParseError::MissingId => ErrorKind::MissingId,
            ParseError::DuplicateType { .. } => ErrorKind::DuplicateType,
            ParseError::UnknownType { .. } => ErrorKind::UnknownType,
            ParseError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            ParseError::MissingTypeElement => ErrorKind::MissingTypeElement,
            ParseError::UnexpectedClosingTag { .. } => ErrorKind::UnexpectedClosingTag,
            ParseError::UnexpectedEof => ErrorKind::UnexpectedEof,
            ParseError::MissingRootElement => ErrorKind::MissingRootElement,
            ParseError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            ParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
            ParseError::MissingValue { .. } => ErrorKind::MissingValue,
            ParseError::MissingSubelements { .. } => ErrorKind::MissingSubelements,
            ParseError::UnexpectedElement { .. } => ErrorKind::UnexpectedElement,
            ParseError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Map a builder failure raised while reading `element`.
    pub(crate) fn from_build(error: BuildError, element: &str) -> Self {
        match error {
            BuildError::MissingField(field) => ParseError::MissingRequiredField { field },
            BuildError::InvalidField { field, reason } => ParseError::InvalidValue {
                element: element.to_string(),
                message: format!("{}: {}", field, reason),
            },
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
