use crate::predicate::{BoxedPredicate, Predicate, PredicateExt};
use std::cell::Cell;

fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

fn is_positive(n: &i64) -> bool {
    *n > 0
}

#[test]
fn closures_and_fns_are_predicates() {
    let small = |n: &i64| *n < 10;

    assert!(small.test(&3));
    assert!(!small.test(&30));
    assert!(is_even.test(&4));
}

#[test]
fn fluent_and_or_not() {
    let even_and_positive = is_even.and(is_positive);
    assert!(even_and_positive.test(&4));
    assert!(!even_and_positive.test(&-4));
    assert!(!even_and_positive.test(&3));

    let even_or_positive = is_even.or(is_positive);
    assert!(even_or_positive.test(&-4));
    assert!(even_or_positive.test(&3));
    assert!(!even_or_positive.test(&-3));

    let odd = is_even.not();
    assert!(odd.test(&3));
    assert!(!odd.test(&4));
}

#[test]
fn fluent_and_short_circuits_left_to_right() {
    let calls = Cell::new(0);
    let counted = |_: &i64| {
        calls.set(calls.get() + 1);
        true
    };

    let pred = (|_: &i64| false).and(counted);
    assert!(!pred.test(&1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn fluent_or_short_circuits_left_to_right() {
    let pred = (|_: &i64| true).or(|_: &i64| -> bool { panic!("right side evaluated") });

    assert!(pred.test(&1));
}

#[test]
fn by_ref_shares_one_predicate() {
    let positive = |n: &i64| *n > 0;
    let a = positive.by_ref().and(is_even);
    let b = positive.by_ref().or(is_even);

    assert!(a.test(&2));
    assert!(!a.test(&1));
    assert!(b.test(&1));
}

#[test]
fn boxed_predicates_mix_types_in_one_list() {
    let list: Vec<BoxedPredicate<'_, i64>> = vec![
        is_even.boxed(),
        (|n: &i64| *n > 100).boxed(),
        is_positive.not().boxed(),
    ];

    let results: Vec<bool> = list.iter().map(|p| p.test(&200)).collect();
    assert_eq!(results, vec![true, true, false]);
}

#[test]
fn select_preserves_order_and_input() {
    let items = vec![5_i64, 2, 8, -4, 7];
    let selected = is_even.select(&items);

    assert_eq!(selected, vec![&2_i64, &8, &-4]);
    assert_eq!(items, vec![5, 2, 8, -4, 7]);
}

#[test]
fn partition_splits_matching_and_rejected() {
    let items = [1_i64, 2, 3, 4];
    let (even, odd) = is_even.partition(&items);

    assert_eq!(even, vec![&2_i64, &4]);
    assert_eq!(odd, vec![&1_i64, &3]);
}

#[test]
#[should_panic(expected = "selector failed")]
fn panics_propagate_through_combinators() {
    let failing = |_: &i64| -> bool { panic!("selector failed") };
    let pred = is_even.or(failing);

    let _ = pred.test(&1);
}
