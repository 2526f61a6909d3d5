//! Type-expression identifier walker.
//!
//! Pure traversal over the closed [`TypeExpr`] sum: yields every
//! identifier-bearing leaf, in the order the references occur in the
//! expression, at any nesting depth. Both matches below are exhaustive, so
//! a newly added expression shape fails to compile until it is handled
//! here.
//!
//! Order rules: wrappers recurse into their inner type; unions and
//! intersections visit members in order; a generic visits its base before
//! its arguments; a callable yields its own pseudo-identifier tag, then its
//! return type, then each parameter; array-shape items contribute their
//! value types only (keys are not type references).

use docgen_parser::TypeExpr;

/// Lazy iterator over the identifier leaves of a type expression.
///
/// Each call builds a fresh iterator, so the sequence is restartable; the
/// expression itself is never mutated.
pub fn identifiers(expr: &TypeExpr) -> Identifiers<'_> {
    Identifiers { stack: vec![expr] }
}

pub struct Identifiers<'a> {
    stack: Vec<&'a TypeExpr>,
}

impl<'a> Iterator for Identifiers<'a> {
    type Item = &'a TypeExpr;

    fn next(&mut self) -> Option<&'a TypeExpr> {
        while let Some(expr) = self.stack.pop() {
            match expr {
                TypeExpr::Identifier { .. } => return Some(expr),
                TypeExpr::Nullable(inner) | TypeExpr::Array(inner) => self.stack.push(inner),
                TypeExpr::Union(members) | TypeExpr::Intersection(members) => {
                    self.stack.extend(members.iter().rev());
                }
                TypeExpr::Generic { base, args } => {
                    self.stack.extend(args.iter().rev());
                    self.stack.push(base);
                }
                TypeExpr::Callable {
                    tag,
                    params,
                    return_type,
                } => {
                    self.stack.extend(params.iter().rev());
                    if let Some(ret) = return_type {
                        self.stack.push(ret);
                    }
                    self.stack.push(tag);
                }
                TypeExpr::ArrayShape(items) => {
                    self.stack.extend(items.iter().rev().map(|item| &item.value));
                }
            }
        }
        None
    }
}

/// Mutable twin of [`identifiers`], used by the resolver to rewrite and tag
/// identifier leaves in place. Same visit order.
pub fn for_each_identifier_mut<F>(expr: &mut TypeExpr, visit: &mut F)
where
    F: FnMut(&mut TypeExpr),
{
    match expr {
        TypeExpr::Identifier { .. } => visit(expr),
        TypeExpr::Nullable(inner) | TypeExpr::Array(inner) => {
            for_each_identifier_mut(inner, visit);
        }
        TypeExpr::Union(members) | TypeExpr::Intersection(members) => {
            for member in members {
                for_each_identifier_mut(member, visit);
            }
        }
        TypeExpr::Generic { base, args } => {
            for_each_identifier_mut(base, visit);
            for arg in args {
                for_each_identifier_mut(arg, visit);
            }
        }
        TypeExpr::Callable {
            tag,
            params,
            return_type,
        } => {
            for_each_identifier_mut(tag, visit);
            if let Some(ret) = return_type {
                for_each_identifier_mut(ret, visit);
            }
            for param in params {
                for_each_identifier_mut(param, visit);
            }
        }
        TypeExpr::ArrayShape(items) => {
            for item in items {
                for_each_identifier_mut(&mut item.value, visit);
            }
        }
    }
}
