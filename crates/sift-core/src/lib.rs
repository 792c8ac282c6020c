//! Core runtime for Sift: the `Predicate` trait, boolean combinators,
//! selector-driven predicate factories, and declarative rules that can be
//! loaded from configuration.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod combinator;
pub mod compare;
pub mod error;
pub mod factory;
pub mod predicate;
pub mod rule;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only predicate vocabulary.
/// No errors, rule sets or row adapters are re-exported here.
///

pub mod prelude {
    pub use crate::{
        combinator::{and, none_of, not, or},
        compare::CompareOp,
        factory::{
            at_least, at_most, equals, field, greater_than, less_than, membership, not_equals,
        },
        predicate::{BoxedPredicate, Predicate, PredicateExt as _},
    };
}
