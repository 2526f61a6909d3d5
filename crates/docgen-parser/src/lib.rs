//! Docblock parser for the docgen resolution pass.
//!
//! Turns a raw documentation comment into a structured [`DocBlock`]: an
//! ordered sequence of tags (`@param`, `@return`, `@var`, `@method`,
//! `@template`, ...), each carrying parsed [`TypeExpr`] trees. The resolver
//! crate mutates those trees in place when it qualifies names.
//!
//! Malformed syntax is reported as [`ParseError`] and never swallowed.

pub mod ast;
pub mod block;
pub mod error;
pub mod types;

pub use ast::{
    ArrayShapeItem, DefaultExpr, DocBlock, GenericMap, GenericParameter, MethodParam, Resolution,
    Tag, TypeExpr, Variance,
};
pub use block::parse_doc_block;
pub use error::ParseError;
pub use types::parse_type_expr;
