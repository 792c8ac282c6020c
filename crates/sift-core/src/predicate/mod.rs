//! Module: predicate
//! Responsibility: the `Predicate` trait, boxed predicates and the fluent
//! binary combinators (`and`, `or`, `not`).
//! Does not own: variadic combinators or comparison factories.

#[cfg(test)]
mod tests;

use std::fmt;

///
/// Predicate
///
/// Pure boolean test over one borrowed input.
/// Any `Fn(&D) -> bool` closure is a predicate.
///

pub trait Predicate<D: ?Sized> {
    fn test(&self, value: &D) -> bool;
}

impl<D, F> Predicate<D> for F
where
    D: ?Sized,
    F: Fn(&D) -> bool,
{
    fn test(&self, value: &D) -> bool {
        self(value)
    }
}

///
/// BoxedPredicate
///
/// Type-erased predicate, used to hold heterogeneous predicates in one
/// ordered list.
///

pub struct BoxedPredicate<'a, D: ?Sized>(Box<dyn Predicate<D> + Send + Sync + 'a>);

impl<'a, D: ?Sized> BoxedPredicate<'a, D> {
    #[must_use]
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<D> + Send + Sync + 'a,
    {
        Self(Box::new(predicate))
    }
}

impl<D: ?Sized> Predicate<D> for BoxedPredicate<'_, D> {
    fn test(&self, value: &D) -> bool {
        self.0.test(value)
    }
}

impl<D: ?Sized> fmt::Debug for BoxedPredicate<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedPredicate(..)")
    }
}

///
/// And
///
/// Binary conjunction; `right` is only consulted when `left` holds.
///

#[derive(Clone, Copy, Debug)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    #[must_use]
    pub const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<D: ?Sized, A: Predicate<D>, B: Predicate<D>> Predicate<D> for And<A, B> {
    fn test(&self, value: &D) -> bool {
        self.left.test(value) && self.right.test(value)
    }
}

///
/// Or
///
/// Binary disjunction; `right` is only consulted when `left` fails.
///

#[derive(Clone, Copy, Debug)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    #[must_use]
    pub const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<D: ?Sized, A: Predicate<D>, B: Predicate<D>> Predicate<D> for Or<A, B> {
    fn test(&self, value: &D) -> bool {
        self.left.test(value) || self.right.test(value)
    }
}

///
/// Not
///
/// Single-predicate negation.
///

#[derive(Clone, Copy, Debug)]
pub struct Not<P> {
    inner: P,
}

impl<P> Not<P> {
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<D: ?Sized, P: Predicate<D>> Predicate<D> for Not<P> {
    fn test(&self, value: &D) -> bool {
        !self.inner.test(value)
    }
}

///
/// ByRef
///
/// Borrowed view of a predicate, so one predicate can feed several
/// combinators without being cloned.
///

#[derive(Debug)]
pub struct ByRef<'a, P: ?Sized>(&'a P);

impl<P: ?Sized> Clone for ByRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for ByRef<'_, P> {}

impl<D: ?Sized, P: Predicate<D> + ?Sized> Predicate<D> for ByRef<'_, P> {
    fn test(&self, value: &D) -> bool {
        self.0.test(value)
    }
}

///
/// PredicateExt
///
/// Fluent composition and filtering helpers for every predicate.
///

pub trait PredicateExt<D: ?Sized>: Predicate<D> {
    /// Conjunction with `other`, evaluated left to right.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<D>,
    {
        And::new(self, other)
    }

    /// Disjunction with `other`, evaluated left to right.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<D>,
    {
        Or::new(self, other)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    fn boxed<'a>(self) -> BoxedPredicate<'a, D>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedPredicate::new(self)
    }

    fn by_ref(&self) -> ByRef<'_, Self> {
        ByRef(self)
    }

    /// Borrow the items that satisfy this predicate, preserving order.
    /// The input slice is never reordered or modified.
    fn select<'a>(&self, items: &'a [D]) -> Vec<&'a D>
    where
        D: Sized,
    {
        let selected: Vec<&D> = items.iter().filter(|item| self.test(item)).collect();
        tracing::trace!(
            total = items.len(),
            selected = selected.len(),
            "predicate select"
        );

        selected
    }

    /// Split items into (matching, rejected), preserving order in both.
    fn partition<'a>(&self, items: &'a [D]) -> (Vec<&'a D>, Vec<&'a D>)
    where
        D: Sized,
    {
        items.iter().partition(|item| self.test(item))
    }
}

impl<D: ?Sized, P: Predicate<D> + ?Sized> PredicateExt<D> for P {}
