//! Tests for the type-expression grammar.

use docgen_parser::{ArrayShapeItem, TypeExpr, parse_type_expr};

fn ident(name: &str) -> TypeExpr {
    TypeExpr::ident(name)
}

#[test]
fn parses_bare_and_qualified_identifiers() {
    assert_eq!(parse_type_expr("Foo").unwrap(), ident("Foo"));
    assert_eq!(parse_type_expr("Foo\\Bar").unwrap(), ident("Foo\\Bar"));
    assert_eq!(parse_type_expr("\\Foo\\Bar").unwrap(), ident("\\Foo\\Bar"));
}

#[test]
fn parses_nullable_and_array_suffix() {
    assert_eq!(
        parse_type_expr("?int").unwrap(),
        TypeExpr::Nullable(Box::new(ident("int")))
    );
    assert_eq!(
        parse_type_expr("Foo[][]").unwrap(),
        TypeExpr::Array(Box::new(TypeExpr::Array(Box::new(ident("Foo")))))
    );
}

#[test]
fn array_suffix_binds_tighter_than_union() {
    assert_eq!(
        parse_type_expr("int[]|null").unwrap(),
        TypeExpr::Union(vec![TypeExpr::Array(Box::new(ident("int"))), ident("null")])
    );
}

#[test]
fn parses_union_and_intersection_with_precedence() {
    // `&` binds tighter than `|`.
    assert_eq!(
        parse_type_expr("A|B&C").unwrap(),
        TypeExpr::Union(vec![
            ident("A"),
            TypeExpr::Intersection(vec![ident("B"), ident("C")]),
        ])
    );
}

#[test]
fn parenthesized_group_overrides_precedence() {
    assert_eq!(
        parse_type_expr("(A|B)[]").unwrap(),
        TypeExpr::Array(Box::new(TypeExpr::Union(vec![ident("A"), ident("B")])))
    );
}

#[test]
fn parses_nested_generics() {
    let expr = parse_type_expr("array<int, Foo[]>").unwrap();
    assert_eq!(
        expr,
        TypeExpr::Generic {
            base: Box::new(ident("array")),
            args: vec![ident("int"), TypeExpr::Array(Box::new(ident("Foo")))],
        }
    );
}

#[test]
fn parses_callable_with_params_and_return() {
    let expr = parse_type_expr("callable(int, Foo): ?string").unwrap();
    assert_eq!(
        expr,
        TypeExpr::Callable {
            tag: Box::new(ident("callable")),
            params: vec![ident("int"), ident("Foo")],
            return_type: Some(Box::new(TypeExpr::Nullable(Box::new(ident("string"))))),
        }
    );
}

#[test]
fn parses_closure_syntax_as_callable() {
    let expr = parse_type_expr("\\Closure(int): int").unwrap();
    let TypeExpr::Callable { tag, .. } = expr else {
        panic!("expected callable");
    };
    assert_eq!(*tag, ident("\\Closure"));
}

#[test]
fn parses_callable_without_signature_as_identifier() {
    assert_eq!(parse_type_expr("callable").unwrap(), ident("callable"));
}

#[test]
fn parses_array_shape_with_keys_and_optional_markers() {
    let expr = parse_type_expr("array{0: int, name?: string, Foo}").unwrap();
    assert_eq!(
        expr,
        TypeExpr::ArrayShape(vec![
            ArrayShapeItem {
                key: Some("0".to_string()),
                optional: false,
                value: ident("int"),
            },
            ArrayShapeItem {
                key: Some("name".to_string()),
                optional: true,
                value: ident("string"),
            },
            ArrayShapeItem {
                key: None,
                optional: false,
                value: ident("Foo"),
            },
        ])
    );
}

#[test]
fn parses_deeply_nested_combination() {
    // A union of a generic of a callable of an array-shape.
    let expr = parse_type_expr("Collection<callable(array{id: int}): Item>|null").unwrap();
    let TypeExpr::Union(members) = expr else {
        panic!("expected union");
    };
    assert_eq!(members.len(), 2);
    let TypeExpr::Generic { base, args } = &members[0] else {
        panic!("expected generic");
    };
    assert_eq!(**base, ident("Collection"));
    let TypeExpr::Callable {
        params,
        return_type,
        ..
    } = &args[0]
    else {
        panic!("expected callable argument");
    };
    assert!(matches!(params[0], TypeExpr::ArrayShape(_)));
    assert_eq!(*return_type.as_deref().unwrap(), ident("Item"));
}

#[test]
fn rejects_malformed_expressions() {
    assert!(parse_type_expr("").is_err());
    assert!(parse_type_expr("array<int").is_err());
    assert!(parse_type_expr("Foo|").is_err());
    assert!(parse_type_expr("callable(int").is_err());
}

#[test]
fn error_carries_offset() {
    let err = parse_type_expr("array<int").unwrap_err();
    assert!(err.offset > 0);
}
