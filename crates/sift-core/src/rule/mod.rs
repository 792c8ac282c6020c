//! Module: rule
//! Responsibility: declarative, serializable predicate trees evaluated
//! against name-addressed rows, and named rule sets loaded from JSON.
//! Does not own: typed closure predicates (see `factory` / `combinator`).
//!
//! Pipeline: parse → validate → normalize → evaluate.

mod ast;
mod eval;
mod normalize;
mod set;
mod validate;
mod value;

#[cfg(test)]
mod tests;

pub use ast::{CompareRule, Rule};
pub use eval::{FieldPresence, Row, eval};
pub use normalize::normalize;
pub use set::RuleSet;
pub use validate::validate;
pub use value::Value;

use crate::{error::RuleError, predicate::Predicate};

///
/// CompiledRule
///
/// Validated, normalized rule ready for repeated evaluation.
/// Implements `Predicate` for every `Row` type.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompiledRule {
    rule: Rule,
}

impl CompiledRule {
    /// Validate then normalize a rule.
    pub fn compile(rule: &Rule) -> Result<Self, RuleError> {
        validate(rule)?;
        let rule = normalize(rule);
        tracing::trace!(?rule, "compiled rule");

        Ok(Self { rule })
    }

    /// Borrow the normalized rule tree.
    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }
}

impl<R: Row + ?Sized> Predicate<R> for CompiledRule {
    fn test(&self, row: &R) -> bool {
        eval(row, &self.rule)
    }
}
