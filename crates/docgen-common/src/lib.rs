//! Common types and utilities for the docgen resolution pass.
//!
//! This crate provides the foundation shared by the docblock parser and the
//! resolver:
//! - Docblock comment framing utilities (`comments`)
//! - Diagnostics emitted to downstream consumers (`diagnostics`)

// Comment framing utilities
pub mod comments;
pub use comments::{doc_comment_content, is_doc_comment};

// Diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
