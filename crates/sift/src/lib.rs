//! ## Crate layout
//! - `core`: predicate trait, combinators, factories and declarative rules.
//! - `combinator`: variadic `and` / `or` / `none_of` and single `not`.
//! - `factory`: selector-driven comparison and membership predicates.
//! - `rule`: serializable rule trees, rows and JSON rule sets.
//!
//! The `prelude` module carries the vocabulary needed to build and compose
//! typed predicates.

pub use sift_core as core;

pub use sift_core::{Error, combinator, compare, error, factory, predicate, rule};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::rule::{CompiledRule, Row as _, Rule, RuleSet, Value};
}
