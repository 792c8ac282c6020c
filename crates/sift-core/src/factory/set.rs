use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

///
/// ValueSet
///
/// Read-only membership test over a caller-supplied collection.
/// Sequences scan linearly; hashed and ordered sets use their own lookup.
///

pub trait ValueSet<T> {
    fn contains_value(&self, value: &T) -> bool;
}

impl<T: PartialEq> ValueSet<T> for [T] {
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq, const N: usize> ValueSet<T> for [T; N] {
    fn contains_value(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T: PartialEq> ValueSet<T> for Vec<T> {
    fn contains_value(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}

impl<T: Eq + Hash, H: BuildHasher> ValueSet<T> for HashSet<T, H> {
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Ord> ValueSet<T> for BTreeSet<T> {
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T, V: ValueSet<T> + ?Sized> ValueSet<T> for &V {
    fn contains_value(&self, value: &T) -> bool {
        (**self).contains_value(value)
    }
}
