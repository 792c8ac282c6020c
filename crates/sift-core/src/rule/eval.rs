use crate::{
    compare::CompareOp,
    rule::{
        ast::{CompareRule, Rule},
        value::Value,
    },
};
use std::collections::{BTreeMap, HashMap};

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during rule
/// evaluation. This distinguishes between a missing field and a
/// present field whose value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),

    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a record that can expose fields by name.
/// This decouples rule evaluation from concrete record types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        self.get(name).map_or(FieldPresence::Missing, |value| {
            FieldPresence::Present(value.clone())
        })
    }
}

impl<H: std::hash::BuildHasher> Row for HashMap<String, Value, H> {
    fn field(&self, name: &str) -> FieldPresence {
        self.get(name).map_or(FieldPresence::Missing, |value| {
            FieldPresence::Present(value.clone())
        })
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> FieldPresence {
        (**self).field(name)
    }
}

///
/// Evaluate a rule against a single row.
///
/// This function performs **pure runtime evaluation**:
/// - no validation
/// - no normalization
///
/// Children are evaluated left to right with short-circuiting.
/// A comparison against a missing field, or between incomparable values,
/// evaluates to `false`.
///
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, rule: &Rule) -> bool {
    match rule {
        Rule::True => true,
        Rule::False => false,

        Rule::And(children) => children.iter().all(|child| eval(row, child)),
        Rule::Or(children) => children.iter().any(|child| eval(row, child)),
        Rule::Not(inner) => !eval(row, inner),
        Rule::NoneOf(children) => !children.iter().any(|child| eval(row, child)),

        Rule::Compare(cmp) => eval_compare(row, cmp),
    }
}

// Evaluate a comparison only when the field is present.
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &CompareRule) -> bool {
    let FieldPresence::Present(actual) = row.field(&cmp.field) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => actual == cmp.value,
        CompareOp::Ne => actual != cmp.value,
        CompareOp::Lt | CompareOp::Lte | CompareOp::Gt | CompareOp::Gte => cmp
            .op
            .matches_ordering(actual.strict_order_cmp(&cmp.value)),
        CompareOp::In => cmp
            .value
            .as_list()
            .is_some_and(|items| items.contains(&actual)),
        CompareOp::NotIn => cmp
            .value
            .as_list()
            .is_some_and(|items| !items.contains(&actual)),
    }
}
