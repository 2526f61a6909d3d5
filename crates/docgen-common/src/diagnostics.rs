//! Diagnostics reported to downstream consumers of the resolution pass.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

/// A diagnostic tied to a source file and a byte offset within it.
///
/// The resolution pass itself fails fast on malformed docblocks; this type
/// is how those failures are surfaced to a reporting layer that wants file
/// context attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub file: String,
    pub offset: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, offset: u32, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            file: file.into(),
            offset,
            message_text: message.into(),
        }
    }

    pub fn warning(file: impl Into<String>, offset: u32, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            file: file.into(),
            offset,
            message_text: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_constructor_sets_category() {
        let diag = Diagnostic::error("a.php", 12, "bad tag");
        assert_eq!(diag.category, DiagnosticCategory::Error);
        assert_eq!(diag.file, "a.php");
        assert_eq!(diag.offset, 12);
    }
}
