//! Parse errors for docblock syntax.

use docgen_common::Diagnostic;
use std::fmt;

/// A syntax error in a docblock or one of its type expressions.
///
/// `offset` is a byte offset into the text handed to the parser (the
/// stripped docblock content for tag errors, the tag's type text for type
/// expression errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, offset: usize) -> ParseError {
        ParseError {
            message: message.into(),
            offset,
        }
    }

    /// Attach file context for a reporting layer.
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        Diagnostic::error(file, self.offset as u32, self.message.clone())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

impl std::error::Error for ParseError {}
