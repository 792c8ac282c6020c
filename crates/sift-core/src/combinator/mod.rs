//! Module: combinator
//! Responsibility: variadic boolean combinators over ordered predicate lists.
//! Does not own: the binary fluent forms (see `predicate::PredicateExt`).
//!
//! `not` is single-predicate negation. The "none of these hold" form over
//! several predicates is `none_of`.
//! Every variadic combinator rejects an empty list at construction time.


use crate::{
    error::{CombinatorError, CombinatorKind},
    predicate::{Not, Predicate},
};
use derive_more::Deref;

///
/// PredicateList
///
/// Ordered, non-empty list of predicates owned by a variadic combinator.
/// Evaluation order is list order.
///

#[derive(Clone, Debug, Deref)]
pub struct PredicateList<P>(Vec<P>);

impl<P> PredicateList<P> {
    /// Collect predicates in order, rejecting an empty input.
    pub fn new(
        kind: CombinatorKind,
        predicates: impl IntoIterator<Item = P>,
    ) -> Result<Self, CombinatorError> {
        let predicates: Vec<P> = predicates.into_iter().collect();

        if predicates.is_empty() {
            tracing::debug!(%kind, "rejected empty predicate list");
            return Err(CombinatorError::Empty { kind });
        }

        Ok(Self(predicates))
    }
}

///
/// All
///
/// True iff every predicate holds; stops at the first failure.
///

#[derive(Clone, Debug)]
pub struct All<P> {
    predicates: PredicateList<P>,
}

impl<P> All<P> {
    #[must_use]
    pub const fn predicates(&self) -> &PredicateList<P> {
        &self.predicates
    }
}

impl<D: ?Sized, P: Predicate<D>> Predicate<D> for All<P> {
    fn test(&self, value: &D) -> bool {
        self.predicates.iter().all(|p| p.test(value))
    }
}

///
/// Any
///
/// True iff at least one predicate holds; stops at the first success.
///

#[derive(Clone, Debug)]
pub struct Any<P> {
    predicates: PredicateList<P>,
}

impl<P> Any<P> {
    #[must_use]
    pub const fn predicates(&self) -> &PredicateList<P> {
        &self.predicates
    }
}

impl<D: ?Sized, P: Predicate<D>> Predicate<D> for Any<P> {
    fn test(&self, value: &D) -> bool {
        self.predicates.iter().any(|p| p.test(value))
    }
}

///
/// NoneOf
///
/// True iff no predicate holds; stops at the first success.
/// Equivalent to `and(not(p1), .., not(pn))`.
///

#[derive(Clone, Debug)]
pub struct NoneOf<P> {
    predicates: PredicateList<P>,
}

impl<P> NoneOf<P> {
    #[must_use]
    pub const fn predicates(&self) -> &PredicateList<P> {
        &self.predicates
    }
}

impl<D: ?Sized, P: Predicate<D>> Predicate<D> for NoneOf<P> {
    fn test(&self, value: &D) -> bool {
        !self.predicates.iter().any(|p| p.test(value))
    }
}

/// Conjunction over an ordered, non-empty list of predicates.
pub fn and<P>(predicates: impl IntoIterator<Item = P>) -> Result<All<P>, CombinatorError> {
    let predicates = PredicateList::new(CombinatorKind::And, predicates)?;

    Ok(All { predicates })
}

/// Disjunction over an ordered, non-empty list of predicates.
pub fn or<P>(predicates: impl IntoIterator<Item = P>) -> Result<Any<P>, CombinatorError> {
    let predicates = PredicateList::new(CombinatorKind::Or, predicates)?;

    Ok(Any { predicates })
}

/// "None of these hold" over an ordered, non-empty list of predicates.
pub fn none_of<P>(predicates: impl IntoIterator<Item = P>) -> Result<NoneOf<P>, CombinatorError> {
    let predicates = PredicateList::new(CombinatorKind::NoneOf, predicates)?;

    Ok(NoneOf { predicates })
}

/// Negate a single predicate.
#[must_use]
pub const fn not<P>(predicate: P) -> Not<P> {
    Not::new(predicate)
}
