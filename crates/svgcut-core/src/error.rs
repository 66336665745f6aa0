//! Error handling for SvgCut
//!
//! Provides the error types shared by every layer of the optimizer:
//! - Parse errors (path data and numeric attributes)
//! - Document errors (loading, locating and rewriting the SVG document)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Path data parse error
///
/// Raised while reading path mini-language text or numeric attributes.
/// Every variant is fatal for the transformation that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A numeric token is not a plain base-10 decimal
    #[error("Invalid number: '{token}'")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },

    /// An arc flag is neither `0` nor `1`
    #[error("Invalid arc flag: '{token}' (expected 0 or 1)")]
    InvalidFlag {
        /// The offending token.
        token: String,
    },

    /// A command ran out of parameters
    #[error("Command '{command}' expects {expected} parameters, found {found}")]
    MissingParameter {
        /// The command letter.
        command: char,
        /// Parameters required per repetition of the command.
        expected: usize,
        /// Parameters left over for the incomplete repetition.
        found: usize,
    },
}

/// Document error type
///
/// Represents failures while reading, interpreting or writing the SVG document
/// that carries the drawing.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content is not an SVG document
    #[error("Not an SVG document: {0}")]
    NotSvg(String),

    /// No group element to transform was found
    #[error("No group element found{}", .id.as_ref().map(|id| format!(" with id '{id}'")).unwrap_or_default())]
    MissingGroup {
        /// The requested group id, if one was configured.
        id: Option<String>,
    },

    /// An element is not closed before the end of its parent
    #[error("Unterminated <{element}> element")]
    UnterminatedElement {
        /// The element name.
        element: String,
    },

    /// A required attribute is absent
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The element name.
        element: String,
        /// The attribute name.
        attribute: String,
    },

    /// A required attribute does not hold a valid number
    #[error("<{element}> attribute '{attribute}' is invalid: {source}")]
    InvalidAttribute {
        /// The element name.
        element: String,
        /// The attribute name.
        attribute: String,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },
}

/// Main error type for SvgCut
///
/// Returned by a whole-document transformation, which can fail either while
/// reading the document or while parsing its path data.
#[derive(Error, Debug)]
pub enum Error {
    /// Path data or numeric parse error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type alias for SvgCut operations
pub type Result<T> = std::result::Result<T, Error>;
