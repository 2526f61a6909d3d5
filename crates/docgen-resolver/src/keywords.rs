//! The closed set of language built-in keywords and pseudo-types.
//!
//! Keyword classification is checked before generic-parameter visibility,
//! so a generic parameter deliberately named like a keyword always resolves
//! as the keyword. That tie-break is documented behavior.

/// Check a lower-cased identifier against the keyword set.
pub fn is_keyword(lowered: &str) -> bool {
    matches!(
        lowered,
        "string"
            | "int"
            | "integer"
            | "bool"
            | "boolean"
            | "float"
            | "double"
            | "real"
            | "array"
            | "object"
            | "mixed"
            | "void"
            | "null"
            | "scalar"
            | "callable"
            | "callable-string"
            | "resource"
            | "static"
            | "self"
            | "parent"
            | "iterable"
            | "never"
            | "list"
            | "class-string"
            | "number"
            | "numeric"
            | "true"
            | "false"
            | "$this"
    )
}
