//! Error handling types
//!
//! Encoding surfaces exactly one error type, [`EncodeError`]. Whatever goes
//! wrong while mapping the element tree or writing it out is wrapped into it,
//! and the original cause stays reachable through [`EncodeError::kind`] and
//! [`std::error::Error::source`].
//!
//! [`ParseError`] covers the JSON text reader and carries the line and column
//! where the input went wrong.

use std::{fmt, io, string::FromUtf8Error};
use thiserror::Error;

/// Failure of a single encode call
#[derive(Debug, Error)]
#[error("failed to encode JSON element tree: {kind}")]
pub struct EncodeError {
    #[source]
    kind: EncodeErrorKind,
}

/// Underlying cause of an [`EncodeError`]
#[derive(Debug, Error)]
pub enum EncodeErrorKind {
    /// A type name outside the six JSON element types
    #[error(transparent)]
    UnknownElementType(#[from] UnknownElementType),
    /// An element whose parts contradict its type
    #[error("malformed element at {path}: {reason}")]
    MalformedElement { path: String, reason: String },
    /// String text or an object key holding a character XML 1.0 forbids
    #[error("character {character:?} at {path} cannot be written to an XML document")]
    NonXmlChar { path: String, character: char },
    /// An element placed in a namespace that no declaration in scope binds
    #[error("no prefix is declared for namespace '{0}'")]
    UnboundNamespace(String),
    /// Number text that cannot be written as a JSON number
    #[error("invalid number text '{0}'")]
    InvalidNumber(String),
    /// A date-time scalar that could not be formatted
    #[error("date-time formatting failed: {0}")]
    DateTime(#[from] time::error::Format),
    /// The output sink rejected a write or flush
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The XML writer produced bytes that are not UTF-8
    #[error("writer produced invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// A type name that is not one of the six JSON element types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type '{0}'")]
pub struct UnknownElementType(pub String);

impl EncodeError {
    pub fn new(kind: EncodeErrorKind) -> Self {
        Self { kind }
    }

    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(EncodeErrorKind::MalformedElement {
            path: path.into(),
            reason: reason.into(),
        })
    }

    pub fn kind(&self) -> &EncodeErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> EncodeErrorKind {
        self.kind
    }
}

impl From<EncodeErrorKind> for EncodeError {
    fn from(kind: EncodeErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for EncodeError {
    fn from(err: io::Error) -> Self {
        Self::new(EncodeErrorKind::Io(err))
    }
}

impl From<UnknownElementType> for EncodeError {
    fn from(err: UnknownElementType) -> Self {
        Self::new(EncodeErrorKind::UnknownElementType(err))
    }
}

impl From<time::error::Format> for EncodeError {
    fn from(err: time::error::Format) -> Self {
        Self::new(EncodeErrorKind::DateTime(err))
    }
}

impl From<FromUtf8Error> for EncodeError {
    fn from(err: FromUtf8Error) -> Self {
        Self::new(EncodeErrorKind::Utf8(err))
    }
}

/// Error raised by the JSON text reader
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    kind: ParseErrorKind,
    location: Option<Location>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Security(#[from] SecurityError),
    #[error("I/O error: {0}")]
    Io(String),
}

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("invalid token '{0}'")]
    InvalidToken(String),
    #[error("invalid unicode escape")]
    InvalidUnicode,
    #[error("control character in string")]
    ControlCharacter,
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// Syntax parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("trailing comma")]
    TrailingComma,
    #[error("trailing content after document")]
    TrailingContent,
}

/// Limits enforced while reading untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,
    #[error("maximum number of object entries exceeded")]
    MaxObjectEntriesExceeded,
    #[error("maximum input size exceeded")]
    MaxSizeExceeded,
    #[error("maximum string length exceeded")]
    MaxStringLengthExceeded,
}

impl ParseError {
    pub fn new(kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            kind: kind.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(loc) = &self.location {
            write!(f, " at line {}, column {}", loc.line, loc.column)?;
        }
        Ok(())
    }
}

/// Errors of the file helpers, which read JSON text and then encode it
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
