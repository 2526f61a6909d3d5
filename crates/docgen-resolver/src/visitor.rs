//! Declaration visitor: drives the resolution pass over a declaration
//! tree.
//!
//! Depth-first, pre-order enter / post-order leave, as explicit function
//! calls around a recursive traversal - no visitor framework, no shared
//! callback state. On enter, a declaration's docblock is parsed, its
//! generic-parameter map extracted and pushed, and the classifier run over
//! the block; on leave, the scope frame is popped. Every scope-owning
//! declaration pushes exactly one frame, doc comment or not, so push and
//! pop counts always match.

use crate::context::NameResolver;
use crate::decl::Declaration;
use crate::error::ResolveError;
use crate::resolver::TypeResolver;
use crate::scope::{ScopeStack, extract_generics};
use docgen_parser::parse_doc_block;
use tracing::debug;

pub struct DocResolver<'a> {
    names: &'a dyn NameResolver,
    scopes: ScopeStack,
}

impl<'a> DocResolver<'a> {
    pub fn new(names: &'a dyn NameResolver) -> DocResolver<'a> {
        DocResolver {
            names,
            scopes: ScopeStack::new(),
        }
    }

    /// Resolve every docblock in the tree, attaching results to the
    /// declarations. Stack depth is back to its pre-call value on return.
    pub fn resolve_tree(&mut self, decls: &mut [Declaration]) -> Result<(), ResolveError> {
        for decl in decls {
            self.resolve_decl(decl)?;
        }
        Ok(())
    }

    fn resolve_decl(&mut self, decl: &mut Declaration) -> Result<(), ResolveError> {
        debug!(name = decl.name.as_str(), kind = ?decl.kind, "enter declaration");

        let mut doc = match &decl.doc_comment {
            Some(raw) => Some(parse_doc_block(raw)?),
            None => None,
        };

        let owns_scope = decl.owns_scope();
        if owns_scope {
            // One frame per scope-owning declaration, empty when there is
            // no doc comment or no @template tags, keeping pop symmetric.
            let generics = doc.as_ref().map(extract_generics).unwrap_or_default();
            if let Some(doc) = doc.as_mut() {
                doc.generics = Some(generics.clone());
            }
            self.scopes.push_frame(generics);
        }

        if let Some(doc) = doc.as_mut() {
            TypeResolver::new(self.names, &self.scopes).resolve_doc_block(doc);
        }
        decl.resolved_doc = doc;

        for child in &mut decl.children {
            self.resolve_decl(child)?;
        }

        if owns_scope {
            self.scopes.pop_frame()?;
        }
        debug!(name = decl.name.as_str(), "leave declaration");
        Ok(())
    }

    /// Current scope depth, exposed for symmetry checks.
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }
}
