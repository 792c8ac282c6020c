use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Umbrella error for callers that build both typed combinators and
/// declarative rules in one place.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Combinator(#[from] CombinatorError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

///
/// CombinatorKind
///
/// Variadic combinator that rejected its input.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CombinatorKind {
    And,
    Or,
    NoneOf,
}

impl fmt::Display for CombinatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::And => "and",
            Self::Or => "or",
            Self::NoneOf => "none_of",
        };

        f.write_str(label)
    }
}

///
/// CombinatorError
///
/// Construction-time misuse of a variadic combinator.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CombinatorError {
    #[error("{kind} requires at least one predicate")]
    Empty { kind: CombinatorKind },
}

///
/// RuleError
///
/// Failures while validating, compiling or loading declarative rules.
///

#[derive(Debug, ThisError)]
pub enum RuleError {
    #[error("'{node}' rule requires at least one child rule")]
    EmptyChildren { node: &'static str },

    #[error("'{op}' comparison on field '{field}' requires a list literal")]
    ExpectedList { field: String, op: &'static str },

    #[error("comparison field name must not be empty")]
    EmptyField,

    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("rule set parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
