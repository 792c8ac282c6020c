use crate::{compare::CompareOp, rule::value::Value};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// Rule AST
///
/// Pure, schema-agnostic representation of a declarative predicate.
/// This layer carries no evaluation semantics; interpretation happens in
/// later passes:
///
/// - validation
/// - normalization
/// - evaluation
///

///
/// CompareRule
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompareRule {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl CompareRule {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

///
/// Rule
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    NoneOf(Vec<Self>),
    Compare(CompareRule),
}

impl Rule {
    #[must_use]
    pub const fn and(rules: Vec<Self>) -> Self {
        Self::And(rules)
    }

    #[must_use]
    pub const fn or(rules: Vec<Self>) -> Self {
        Self::Or(rules)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(rule: Self) -> Self {
        Self::Not(Box::new(rule))
    }

    #[must_use]
    pub const fn none_of(rules: Vec<Self>) -> Self {
        Self::NoneOf(rules)
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::Eq, value))
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::Ne, value))
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::Lt, value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::Lte, value))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::Gt, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::Gte, value))
    }

    #[must_use]
    pub fn in_<V: Into<Value>>(field: impl Into<String>, values: Vec<V>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::In, values))
    }

    #[must_use]
    pub fn not_in<V: Into<Value>>(field: impl Into<String>, values: Vec<V>) -> Self {
        Self::Compare(CompareRule::new(field, CompareOp::NotIn, values))
    }
}

impl BitAnd for Rule {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Rule {
    type Output = Rule;

    fn bitand(self, rhs: Self) -> Self::Output {
        Rule::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Rule {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Rule {
    type Output = Rule;

    fn bitor(self, rhs: Self) -> Self::Output {
        Rule::Or(vec![self.clone(), rhs.clone()])
    }
}
