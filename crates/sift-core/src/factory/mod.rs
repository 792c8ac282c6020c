//! Module: factory
//! Responsibility: selector-driven predicate factories (equality, ordering,
//! set membership) curried over a fixed comparison value.
//! Does not own: boolean composition of the produced predicates.
//!
//! A selector is any `Fn(&D) -> T`; it decides *which* field is checked,
//! the factory argument decides *which values* are acceptable.

mod set;

pub use set::ValueSet;

use crate::{
    compare::CompareOp,
    predicate::{Not, Predicate},
};

///
/// Field
///
/// Builder that binds a selector once and hands out comparison predicates.
///

#[derive(Clone, Copy, Debug)]
pub struct Field<S> {
    selector: S,
}

/// Start a comparison against the value returned by `selector`.
#[must_use]
pub const fn field<S>(selector: S) -> Field<S> {
    Field { selector }
}

impl<S> Field<S> {
    #[must_use]
    pub fn eq<T>(self, value: T) -> Equals<S, T> {
        Equals::new(self.selector, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne<T>(self, value: T) -> Equals<S, T> {
        Equals::new(self.selector, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt<T>(self, value: T) -> Ordered<S, T> {
        Ordered::new(self.selector, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte<T>(self, value: T) -> Ordered<S, T> {
        Ordered::new(self.selector, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt<T>(self, value: T) -> Ordered<S, T> {
        Ordered::new(self.selector, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte<T>(self, value: T) -> Ordered<S, T> {
        Ordered::new(self.selector, CompareOp::Gte, value)
    }

    /// Membership in `allowed`; lookup cost is the container's own.
    #[must_use]
    pub fn is_in<V>(self, allowed: V) -> Membership<S, V> {
        Membership {
            selector: self.selector,
            allowed,
        }
    }

    #[must_use]
    pub fn not_in<V>(self, excluded: V) -> Not<Membership<S, V>> {
        Not::new(self.is_in(excluded))
    }
}

///
/// Equals
///
/// Equality (`Eq` / `Ne`) between the selected value and a fixed value.
///

#[derive(Clone, Copy, Debug)]
pub struct Equals<S, T> {
    selector: S,
    op: CompareOp,
    value: T,
}

impl<S, T> Equals<S, T> {
    const fn new(selector: S, op: CompareOp, value: T) -> Self {
        Self {
            selector,
            op,
            value,
        }
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<D, S, T> Predicate<D> for Equals<S, T>
where
    D: ?Sized,
    S: Fn(&D) -> T,
    T: PartialEq,
{
    fn test(&self, value: &D) -> bool {
        let selected = (self.selector)(value);

        match self.op {
            CompareOp::Ne => selected != self.value,
            _ => selected == self.value,
        }
    }
}

///
/// Ordered
///
/// Ordering comparison between the selected value and a fixed threshold.
/// Incomparable values (e.g. NaN) never match.
///

#[derive(Clone, Copy, Debug)]
pub struct Ordered<S, T> {
    selector: S,
    op: CompareOp,
    threshold: T,
}

impl<S, T> Ordered<S, T> {
    const fn new(selector: S, op: CompareOp, threshold: T) -> Self {
        Self {
            selector,
            op,
            threshold,
        }
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn threshold(&self) -> &T {
        &self.threshold
    }
}

impl<D, S, T> Predicate<D> for Ordered<S, T>
where
    D: ?Sized,
    S: Fn(&D) -> T,
    T: PartialOrd,
{
    fn test(&self, value: &D) -> bool {
        let selected = (self.selector)(value);

        self.op.matches_ordering(selected.partial_cmp(&self.threshold))
    }
}

///
/// Membership
///
/// True iff the selected value is an element of the allowed set.
///

#[derive(Clone, Copy, Debug)]
pub struct Membership<S, V> {
    selector: S,
    allowed: V,
}

impl<S, V> Membership<S, V> {
    #[must_use]
    pub const fn allowed(&self) -> &V {
        &self.allowed
    }
}

impl<D, S, V, T> Predicate<D> for Membership<S, V>
where
    D: ?Sized,
    S: Fn(&D) -> T,
    V: ValueSet<T>,
{
    fn test(&self, value: &D) -> bool {
        self.allowed.contains_value(&(self.selector)(value))
    }
}

///
/// Free-function factories
///

/// Predicate holding when `selector(v)` is an element of `allowed`.
#[must_use]
pub fn membership<S, V>(selector: S, allowed: V) -> Membership<S, V> {
    field(selector).is_in(allowed)
}

#[must_use]
pub fn equals<S, T>(selector: S, value: T) -> Equals<S, T> {
    field(selector).eq(value)
}

#[must_use]
pub fn not_equals<S, T>(selector: S, value: T) -> Equals<S, T> {
    field(selector).ne(value)
}

#[must_use]
pub fn greater_than<S, T>(selector: S, threshold: T) -> Ordered<S, T> {
    field(selector).gt(threshold)
}

#[must_use]
pub fn less_than<S, T>(selector: S, threshold: T) -> Ordered<S, T> {
    field(selector).lt(threshold)
}

#[must_use]
pub fn at_least<S, T>(selector: S, threshold: T) -> Ordered<S, T> {
    field(selector).gte(threshold)
}

#[must_use]
pub fn at_most<S, T>(selector: S, threshold: T) -> Ordered<S, T> {
    field(selector).lte(threshold)
}
