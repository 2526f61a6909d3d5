//! Resolution pass errors.

use docgen_common::Diagnostic;
use docgen_parser::ParseError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A docblock failed to parse; propagated from the parser, never
    /// recovered into a partial resolution.
    Parse(ParseError),
    /// A scope frame was popped with no matching push. This is a traversal
    /// bug (enter/leave mismatch), not a recoverable input condition.
    ScopeUnderflow,
}

impl ResolveError {
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        match self {
            ResolveError::Parse(err) => err.to_diagnostic(file),
            ResolveError::ScopeUnderflow => Diagnostic::error(file, 0, self.to_string()),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Parse(err) => write!(f, "docblock parse error: {err}"),
            ResolveError::ScopeUnderflow => {
                write!(f, "generic scope stack underflow: leave without matching enter")
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Parse(err) => Some(err),
            ResolveError::ScopeUnderflow => None,
        }
    }
}

impl From<ParseError> for ResolveError {
    fn from(err: ParseError) -> ResolveError {
        ResolveError::Parse(err)
    }
}
