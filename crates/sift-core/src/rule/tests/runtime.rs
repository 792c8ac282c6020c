use super::row;
use crate::{
    compare::CompareOp,
    error::RuleError,
    predicate::{Predicate, PredicateExt},
    rule::{
        CompareRule, CompiledRule, FieldPresence, Row, Rule, Value, eval, normalize, validate,
    },
};
use std::collections::{BTreeMap, HashMap};

fn member(age: i64, role: &str) -> BTreeMap<String, Value> {
    row([("age", Value::Int(age)), ("role", Value::from(role))])
}

#[test]
fn compare_ops_evaluate_against_present_fields() {
    let row = member(25, "admin");

    assert!(eval(&row, &Rule::eq("role", "admin")));
    assert!(eval(&row, &Rule::ne("role", "editor")));
    assert!(eval(&row, &Rule::gt("age", 17)));
    assert!(eval(&row, &Rule::gte("age", 25)));
    assert!(eval(&row, &Rule::lt("age", 30)));
    assert!(eval(&row, &Rule::lte("age", 25)));
    assert!(!eval(&row, &Rule::lt("age", 25)));
    assert!(eval(&row, &Rule::in_("role", vec!["admin", "editor"])));
    assert!(eval(&row, &Rule::not_in("role", vec!["writer"])));
    assert!(!eval(&row, &Rule::not_in("role", vec!["admin"])));
}

#[test]
fn missing_fields_never_match() {
    let row = row([("age", Value::Int(40))]);

    assert!(!eval(&row, &Rule::eq("role", "admin")));
    assert!(!eval(&row, &Rule::ne("role", "admin")));
    assert!(!eval(&row, &Rule::not_in("role", vec!["admin"])));
    assert!(eval(&row, &Rule::not(Rule::eq("role", "admin"))));
}

#[test]
fn cross_variant_ordering_is_false() {
    let row = row([("age", Value::from("old"))]);

    assert!(!eval(&row, &Rule::gt("age", 17)));
    assert!(!eval(&row, &Rule::lte("age", 17)));
}

#[test]
fn null_is_a_present_value() {
    let row = row([("nickname", Value::Null)]);

    assert!(eval(&row, &Rule::eq("nickname", Value::Null)));
    assert!(!eval(&row, &Rule::gt("nickname", 1)));
}

#[test]
fn none_of_holds_when_no_child_holds() {
    let rule = Rule::none_of(vec![Rule::eq("role", "admin"), Rule::lt("age", 18)]);

    assert!(eval(&member(30, "editor"), &rule));
    assert!(!eval(&member(30, "admin"), &rule));
    assert!(!eval(&member(12, "editor"), &rule));
}

#[test]
fn bit_operators_build_and_or() {
    let adult = Rule::gt("age", 17);
    let editor = Rule::eq("role", "editor");

    assert_eq!(&adult & &editor, Rule::And(vec![adult.clone(), editor.clone()]));
    assert_eq!(adult.clone() | editor.clone(), Rule::Or(vec![adult, editor]));
}

#[test]
fn validate_rejects_empty_children() {
    for (rule, node) in [
        (Rule::and(vec![]), "and"),
        (Rule::or(vec![]), "or"),
        (Rule::none_of(vec![]), "none_of"),
        (Rule::not(Rule::and(vec![])), "and"),
    ] {
        let err = validate(&rule).unwrap_err();
        assert!(
            matches!(err, RuleError::EmptyChildren { node: n } if n == node),
            "unexpected error for {rule:?}: {err}"
        );
    }
}

#[test]
fn validate_rejects_scalar_membership_literal() {
    let rule = Rule::Compare(CompareRule::new("role", CompareOp::In, "admin"));
    let err = validate(&rule).unwrap_err();

    assert!(matches!(
        err,
        RuleError::ExpectedList { ref field, op: "in" } if field == "role"
    ));
    assert_eq!(
        err.to_string(),
        "'in' comparison on field 'role' requires a list literal"
    );
}

#[test]
fn validate_rejects_empty_field_name() {
    let err = validate(&Rule::eq("", 1)).unwrap_err();

    assert!(matches!(err, RuleError::EmptyField));
}

#[test]
fn normalize_flattens_and_orders() {
    let a = Rule::eq("a", 1);
    let b = Rule::eq("b", 2);
    let c = Rule::eq("c", 3);

    let nested = Rule::and(vec![
        c.clone(),
        Rule::and(vec![b.clone(), Rule::True, a.clone()]),
    ]);

    assert_eq!(normalize(&nested), Rule::And(vec![a, b, c]));
}

#[test]
fn normalize_folds_constants_and_negation() {
    let a = Rule::eq("a", 1);

    assert_eq!(normalize(&Rule::and(vec![a.clone(), Rule::False])), Rule::False);
    assert_eq!(normalize(&Rule::or(vec![a.clone(), Rule::True])), Rule::True);
    assert_eq!(normalize(&Rule::and(vec![Rule::True, a.clone()])), a);
    assert_eq!(normalize(&Rule::not(Rule::not(a.clone()))), a);
    assert_eq!(normalize(&Rule::not(Rule::True)), Rule::False);
    assert_eq!(normalize(&Rule::or(vec![Rule::False])), Rule::False);
}

#[test]
fn normalize_rewrites_none_of() {
    let a = Rule::eq("a", 1);
    let b = Rule::eq("b", 2);

    assert_eq!(
        normalize(&Rule::none_of(vec![b.clone(), a.clone()])),
        Rule::not(Rule::Or(vec![a, b]))
    );
}

#[test]
fn compiled_rule_is_a_predicate() {
    let rule = Rule::and(vec![
        Rule::gt("age", 17),
        Rule::or(vec![Rule::eq("role", "writer"), Rule::eq("role", "editor")]),
    ]);
    let compiled = CompiledRule::compile(&rule).unwrap();

    let rows = vec![
        member(25, "admin"),
        member(7, "subscriber"),
        member(18, "writer"),
        member(16, "editor"),
        member(32, "editor"),
    ];

    let ages: Vec<Value> = compiled
        .select(rows.as_slice())
        .into_iter()
        .map(|row| match row.field("age") {
            FieldPresence::Present(v) => v,
            FieldPresence::Missing => Value::Null,
        })
        .collect();

    assert_eq!(ages, vec![Value::Int(18), Value::Int(32)]);
    assert!(compiled.test(&member(40, "writer")));
}

#[test]
fn compile_rejects_invalid_rules() {
    let err = CompiledRule::compile(&Rule::or(vec![])).unwrap_err();

    assert!(matches!(err, RuleError::EmptyChildren { node: "or" }));
}

#[test]
fn hash_map_rows_evaluate_like_btree_rows() {
    let mut hashed: HashMap<String, Value> = HashMap::new();
    hashed.insert("age".to_string(), Value::Int(18));
    hashed.insert("role".to_string(), Value::from("writer"));

    let adult_writer = Rule::and(vec![Rule::gt("age", 17), Rule::eq("role", "writer")]);
    assert!(eval(&hashed, &adult_writer));
    assert_eq!(hashed.field("age"), FieldPresence::Present(Value::Int(18)));

    assert_eq!(hashed.field("team"), FieldPresence::Missing);
    assert!(!eval(&hashed, &Rule::eq("team", "red")));
    assert!(!eval(&hashed, &Rule::ne("team", "red")));

    let btree = member(18, "writer");
    assert_eq!(eval(&btree, &adult_writer), eval(&hashed, &adult_writer));
}
