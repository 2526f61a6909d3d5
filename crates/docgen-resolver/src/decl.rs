//! The declaration tree consumed by the resolution pass.
//!
//! The source parser owns the real tree; the pass only needs to know
//! whether a node is class-like or function-like, read its raw doc comment,
//! and attach the resolved docblock. Those requirements are captured here
//! as a concrete minimal tree with explicit typed result fields instead of
//! an attribute bag.

use docgen_parser::DocBlock;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclKind {
    Class,
    Interface,
    Trait,
    Function,
    Method,
    Property,
    Constant,
}

impl DeclKind {
    /// Classes, interfaces, and traits own a generic scope.
    pub fn is_class_like(self) -> bool {
        matches!(self, DeclKind::Class | DeclKind::Interface | DeclKind::Trait)
    }

    /// Functions and methods own a generic scope.
    pub fn is_function_like(self) -> bool {
        matches!(self, DeclKind::Function | DeclKind::Method)
    }
}

/// A declaration node with an optional raw documentation comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub doc_comment: Option<String>,
    pub children: Vec<Declaration>,
    /// Attached by the resolution pass; identifiers inside are classified
    /// and class-like names fully qualified.
    pub resolved_doc: Option<DocBlock>,
}

impl Declaration {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Declaration {
        Declaration {
            kind,
            name: name.into(),
            doc_comment: None,
            children: Vec::new(),
            resolved_doc: None,
        }
    }

    pub fn with_doc(mut self, raw: impl Into<String>) -> Declaration {
        self.doc_comment = Some(raw.into());
        self
    }

    pub fn with_child(mut self, child: Declaration) -> Declaration {
        self.children.push(child);
        self
    }

    /// True for nodes that push (and pop) a generic scope frame.
    pub fn owns_scope(&self) -> bool {
        self.kind.is_class_like() || self.kind.is_function_like()
    }
}
