//! Generic-parameter scope stack.
//!
//! One frame per currently-open class-like or function-like declaration,
//! including declarations with zero generic parameters, so every enter has
//! a matching leave. Lookup searches innermost to outermost and the first
//! match wins; enclosing scopes stay visible to nested declarations.

use crate::error::ResolveError;
use docgen_parser::{DocBlock, GenericMap, GenericParameter, Tag, Variance};
use smallvec::SmallVec;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: SmallVec<[GenericMap; 4]>,
}

impl ScopeStack {
    pub fn new() -> ScopeStack {
        ScopeStack::default()
    }

    /// Push one frame for an entered declaration; the map is empty when the
    /// declaration has no doc comment or no `@template` tags.
    pub fn push_frame(&mut self, frame: GenericMap) {
        debug!(depth = self.frames.len() + 1, params = frame.len(), "push generic scope");
        self.frames.push(frame);
    }

    /// Discard the top frame. An empty stack means the driver produced a
    /// leave without a matching enter.
    pub fn pop_frame(&mut self) -> Result<(), ResolveError> {
        match self.frames.pop() {
            Some(_) => {
                debug!(depth = self.frames.len(), "pop generic scope");
                Ok(())
            }
            None => Err(ResolveError::ScopeUnderflow),
        }
    }

    /// Case-insensitive lookup, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<&GenericParameter> {
        let lowered = name.to_ascii_lowercase();
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&lowered))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Build a declaration's generic-parameter map from its `@template` tags,
/// keyed by lower-cased name. A later duplicate name overwrites an earlier
/// one.
pub fn extract_generics(doc: &DocBlock) -> GenericMap {
    let mut map = GenericMap::default();
    for tag in doc.template_tags() {
        let Tag::Template {
            name,
            covariant,
            bound,
            description,
        } = tag
        else {
            continue;
        };
        let variance = if *covariant {
            Variance::Covariant
        } else {
            Variance::Invariant
        };
        map.insert(
            name.to_ascii_lowercase(),
            GenericParameter {
                declared_name: name.clone(),
                variance,
                bound: bound.clone(),
                description: description.clone(),
            },
        );
    }
    map
}
