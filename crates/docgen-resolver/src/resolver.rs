//! Identifier classifier/resolver.
//!
//! For every identifier leaf reachable from a docblock tag, decides in
//! order: keyword, then generic parameter visible on the scope stack, then
//! class-like. Keyword wins over a same-named generic parameter (documented
//! tie-break). Class-like names are rewritten in place to their
//! fully-qualified form; keyword and generic names keep their text.
//!
//! Default-value expressions are handled separately: a class-constant fetch
//! with a non-empty class reference gets its class resolved like a
//! class-like type reference (defaults are never keywords or generics).

use crate::context::NameResolver;
use crate::keywords::is_keyword;
use crate::scope::ScopeStack;
use crate::walker::for_each_identifier_mut;
use docgen_parser::{DefaultExpr, DocBlock, Resolution, Tag, TypeExpr};
use tracing::trace;

pub struct TypeResolver<'a> {
    names: &'a dyn NameResolver,
    scopes: &'a ScopeStack,
}

impl<'a> TypeResolver<'a> {
    pub fn new(names: &'a dyn NameResolver, scopes: &'a ScopeStack) -> TypeResolver<'a> {
        TypeResolver { names, scopes }
    }

    /// Classify and resolve every type reference in the block, in place.
    /// Every identifier leaf ends up with exactly one classification.
    pub fn resolve_doc_block(&self, doc: &mut DocBlock) {
        for tag in &mut doc.tags {
            match tag {
                Tag::Param {
                    type_expr, default, ..
                } => {
                    if let Some(expr) = type_expr {
                        self.resolve_type(expr);
                    }
                    if let Some(default) = default {
                        self.resolve_default(default);
                    }
                }
                Tag::Property { type_expr, .. }
                | Tag::Return { type_expr, .. }
                | Tag::Throws { type_expr }
                | Tag::Var { type_expr, .. } => self.resolve_type(type_expr),
                Tag::Method {
                    return_type,
                    params,
                    ..
                } => {
                    if let Some(expr) = return_type {
                        self.resolve_type(expr);
                    }
                    for param in params {
                        if let Some(expr) = &mut param.type_expr {
                            self.resolve_type(expr);
                        }
                        if let Some(default) = &mut param.default {
                            self.resolve_default(default);
                        }
                    }
                }
                Tag::Template { bound, .. } => {
                    if let Some(expr) = bound {
                        self.resolve_type(expr);
                    }
                }
                Tag::Other { .. } => {}
            }
        }
    }

    /// Classify every identifier leaf of one type expression.
    pub fn resolve_type(&self, expr: &mut TypeExpr) {
        for_each_identifier_mut(expr, &mut |leaf| {
            if let TypeExpr::Identifier { name, resolved } = leaf {
                let lowered = name.to_ascii_lowercase();
                if is_keyword(&lowered) {
                    *resolved = Some(Resolution::Keyword);
                } else if self.scopes.lookup(&lowered).is_some() {
                    // Generic parameter names are not namespace-qualified.
                    *resolved = Some(Resolution::Generic);
                } else {
                    *name = self.qualify(name);
                    *resolved = Some(Resolution::ClassLike);
                }
                trace!(name = name.as_str(), classification = ?resolved, "classified identifier");
            }
        });
    }

    fn resolve_default(&self, default: &mut DefaultExpr) {
        if let DefaultExpr::ClassConstFetch {
            class, resolved, ..
        } = default
        {
            if !class.is_empty() {
                *class = self.qualify(class);
                *resolved = Some(Resolution::ClassLike);
            }
        }
    }

    /// A leading separator marks the name as already fully qualified: strip
    /// the marker, no service lookup. Everything else is delegated.
    fn qualify(&self, name: &str) -> String {
        match name.strip_prefix('\\') {
            Some(rest) => rest.to_string(),
            None => self.names.resolve(name),
        }
    }
}
