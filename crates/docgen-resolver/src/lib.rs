//! Semantic resolution pass for docblock type references.
//!
//! Given a declaration tree with attached documentation comments, this crate
//! resolves every type reference inside those comments to a fully-qualified
//! name and classifies each reference as a language keyword, a generic
//! (template) parameter, or a class-like entity:
//!
//! - [`walker`] - yields every identifier leaf of a type expression
//! - [`scope`] - the stack of generic-parameter scopes open during traversal
//! - [`resolver`] - classifies identifiers and rewrites class-like names
//! - [`visitor`] - drives the declaration tree walk, keeping scope
//!   push/pop symmetric
//! - [`context`] - the injected name-resolution service and its
//!   import-table implementation

pub mod context;
pub mod decl;
pub mod error;
pub mod keywords;
pub mod resolver;
pub mod scope;
pub mod visitor;
pub mod walker;

pub use context::{ImportContext, NameResolver};
pub use decl::{DeclKind, Declaration};
pub use error::ResolveError;
pub use resolver::TypeResolver;
pub use scope::{ScopeStack, extract_generics};
pub use visitor::DocResolver;
