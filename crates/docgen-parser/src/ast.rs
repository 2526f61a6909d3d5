//! Docblock tree: tags and type expressions.
//!
//! `TypeExpr` is a closed sum type with one case per shape in the docblock
//! type grammar, so the resolver's walker can match exhaustively and a new
//! shape cannot be missed anywhere. Identifier leaves carry an explicit
//! `resolved` field instead of a side-channel attribute bag.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How the resolver classified an identifier.
///
/// Every identifier leaf carries exactly one classification after the
/// resolution pass has run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// A language built-in keyword or pseudo-type (`int`, `self`, ...).
    Keyword,
    /// A generic parameter visible in the current or an enclosing scope.
    Generic,
    /// A class-like entity; the identifier text has been rewritten to its
    /// fully-qualified form.
    ClassLike,
}

/// A type expression found inside a docblock tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A bare or (partially) qualified name. The only leaf the resolver
    /// mutates.
    Identifier {
        name: String,
        resolved: Option<Resolution>,
    },
    /// `?T`
    Nullable(Box<TypeExpr>),
    /// `T[]`
    Array(Box<TypeExpr>),
    /// `A|B|C` - member order is irrelevant to semantics but preserved for
    /// round-trip.
    Union(Vec<TypeExpr>),
    /// `A&B`
    Intersection(Vec<TypeExpr>),
    /// `Base<Arg, ...>` - the base is always an `Identifier`.
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// `callable(P1, P2): R` - the tag is the callable's own
    /// pseudo-identifier (`callable`, `Closure`, ...).
    Callable {
        tag: Box<TypeExpr>,
        params: Vec<TypeExpr>,
        return_type: Option<Box<TypeExpr>>,
    },
    /// `array{k: V, ...}` - keys are not type references and are never
    /// resolved.
    ArrayShape(Vec<ArrayShapeItem>),
}

impl TypeExpr {
    /// Shorthand for an unresolved identifier leaf.
    pub fn ident(name: impl Into<String>) -> TypeExpr {
        TypeExpr::Identifier {
            name: name.into(),
            resolved: None,
        }
    }
}

/// One item of an array-shape type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayShapeItem {
    pub key: Option<String>,
    pub optional: bool,
    pub value: TypeExpr,
}

/// A default-value expression attached to a parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DefaultExpr {
    /// Any scalar/array literal, kept as raw text.
    Literal(String),
    /// `SomeClass::CONSTANT` - the class reference is resolved like a
    /// class-like type reference.
    ClassConstFetch {
        class: String,
        constant: String,
        resolved: Option<Resolution>,
    },
}

/// A parameter of an `@method` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodParam {
    pub type_expr: Option<TypeExpr>,
    pub name: String,
    pub default: Option<DefaultExpr>,
}

/// A single docblock tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Tag {
    Param {
        type_expr: Option<TypeExpr>,
        name: Option<String>,
        default: Option<DefaultExpr>,
        description: Option<String>,
    },
    Property {
        type_expr: TypeExpr,
        name: Option<String>,
    },
    Return {
        type_expr: TypeExpr,
        description: Option<String>,
    },
    Throws {
        type_expr: TypeExpr,
    },
    Var {
        type_expr: TypeExpr,
        name: Option<String>,
    },
    Method {
        is_static: bool,
        return_type: Option<TypeExpr>,
        name: String,
        params: Vec<MethodParam>,
    },
    /// `@template T`, `@template-covariant T of Bound description`.
    /// Declares a generic parameter; the name itself is not a type
    /// reference.
    Template {
        name: String,
        covariant: bool,
        bound: Option<TypeExpr>,
        description: Option<String>,
    },
    /// Any tag the resolution pass does not interpret; round-trips
    /// untouched.
    Other {
        name: String,
        body: String,
    },
}

/// Variance of a generic parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variance {
    Invariant,
    Covariant,
}

/// A generic parameter declared by an `@template` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericParameter {
    /// The name with its original casing, for display.
    pub declared_name: String,
    pub variance: Variance,
    pub bound: Option<TypeExpr>,
    pub description: Option<String>,
}

/// Generic parameters of one declaration, keyed by lower-cased name.
pub type GenericMap = FxHashMap<String, GenericParameter>;

/// A parsed documentation comment.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DocBlock {
    /// Free text before the first tag.
    pub summary: String,
    /// Tags in document order.
    pub tags: Vec<Tag>,
    /// Attached by the resolver for scope-owning declarations.
    pub generics: Option<GenericMap>,
}

impl DocBlock {
    /// Iterate over the `@template` tags of this block.
    pub fn template_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags
            .iter()
            .filter(|tag| matches!(tag, Tag::Template { .. }))
    }
}
