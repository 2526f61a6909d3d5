//! Tests for the type-expression identifier walker.

use docgen_parser::{TypeExpr, parse_type_expr};
use docgen_resolver::walker::{for_each_identifier_mut, identifiers};

fn names(expr: &TypeExpr) -> Vec<&str> {
    identifiers(expr)
        .map(|leaf| match leaf {
            TypeExpr::Identifier { name, .. } => name.as_str(),
            other => panic!("walker yielded a non-identifier: {other:?}"),
        })
        .collect()
}

#[test]
fn identifier_yields_itself() {
    let expr = parse_type_expr("Foo").unwrap();
    assert_eq!(names(&expr), ["Foo"]);
}

#[test]
fn wrappers_recurse_into_inner_type() {
    let expr = parse_type_expr("?Foo[]").unwrap();
    assert_eq!(names(&expr), ["Foo"]);
}

#[test]
fn union_members_visit_in_order() {
    let expr = parse_type_expr("Foo|Bar|Baz").unwrap();
    assert_eq!(names(&expr), ["Foo", "Bar", "Baz"]);
}

#[test]
fn generic_visits_base_before_arguments() {
    let expr = parse_type_expr("array<int, Foo[]>").unwrap();
    assert_eq!(names(&expr), ["array", "int", "Foo"]);
}

#[test]
fn callable_yields_tag_then_return_then_params() {
    let expr = parse_type_expr("callable(A, B): R").unwrap();
    assert_eq!(names(&expr), ["callable", "R", "A", "B"]);
}

#[test]
fn array_shape_contributes_value_types_only() {
    let expr = parse_type_expr("array{id: int, owner: Foo}").unwrap();
    assert_eq!(names(&expr), ["int", "Foo"]);
}

#[test]
fn walker_is_complete_on_three_level_nesting() {
    // Every variant, three levels deep: union of nullable generic, a
    // callable over an array-shape, and an intersection.
    let expr = parse_type_expr(
        "?Collection<Key, Value[]>|callable(array{item: Inner}): Ret|First&Second",
    )
    .unwrap();
    let yielded = names(&expr);
    assert_eq!(
        yielded,
        ["Collection", "Key", "Value", "callable", "Ret", "Inner", "First", "Second"]
    );
    // Every leaf exactly once.
    let mut unique = yielded.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), yielded.len());
}

#[test]
fn walker_is_restartable() {
    let expr = parse_type_expr("Foo|Bar").unwrap();
    assert_eq!(names(&expr), names(&expr));
}

#[test]
fn mutable_walker_visits_the_same_leaves() {
    let mut expr = parse_type_expr("Collection<Key, callable(A): R>|Tail").unwrap();
    let expected: Vec<String> = names(&expr).iter().map(|s| s.to_string()).collect();
    let mut seen = Vec::new();
    for_each_identifier_mut(&mut expr, &mut |leaf| {
        if let TypeExpr::Identifier { name, .. } = leaf {
            seen.push(name.clone());
        }
    });
    assert_eq!(seen, expected);
}
