//! Transforming combinators
//!
//! `take` and `filter` wrap an input list in a new deferred list. Forcing
//! the result forces the input only as far as needed to produce one step,
//! which keeps both safe on infinite inputs.

use crate::list::{LazyList, Step};
use crate::thunk::Thunk;
use std::rc::Rc;
use tracing::trace;

/// The first `n` elements of `list`
///
/// `n` is evaluated when the result is forced. A non-positive count yields
/// an empty list without forcing `list` at all; otherwise `list` is forced
/// once per step and never past the `n`th element.
pub fn take<T: 'static>(n: Thunk<i64>, list: LazyList<T>) -> LazyList<T> {
    LazyList::new(move || {
        let remaining = n.force();
        if remaining <= 0 {
            return Step::Empty;
        }
        match list.force() {
            Step::Empty => Step::Empty,
            Step::Cons { head, tail } => Step::cons(head, take(Thunk::value(remaining - 1), tail)),
        }
    })
}

/// The elements of `list` for which `predicate` holds
///
/// Forcing the result advances through `list` until an element passes or
/// the list ends. Rejected elements are skipped in a loop, so a long run of
/// them costs no stack. On an infinite list with no further matches this
/// never returns.
pub fn filter<T, P>(predicate: P, list: LazyList<T>) -> LazyList<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    filter_shared(Rc::new(predicate), list)
}

fn filter_shared<T: 'static>(
    predicate: Rc<dyn Fn(&T) -> bool>,
    list: LazyList<T>,
) -> LazyList<T> {
    LazyList::new(move || {
        let mut cursor = list.clone();
        let mut skipped = 0usize;
        loop {
            let (head, tail) = match cursor.force() {
                Step::Empty => return Step::Empty,
                Step::Cons { head, tail } => (head, tail),
            };
            if predicate(&head.force()) {
                trace!(skipped, "filter matched");
                return Step::cons(head, filter_shared(Rc::clone(&predicate), tail));
            }
            skipped += 1;
            cursor = tail;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{arr_to_list, range};
    use std::cell::Cell;

    fn is_even(n: &i64) -> bool {
        n % 2 == 0
    }

    /// A list of `0, 1, 2, ...` that counts how many cells were forced
    fn counted_naturals(forced: &Rc<Cell<usize>>) -> LazyList<i64> {
        fn naturals_from(n: i64, forced: Rc<Cell<usize>>) -> LazyList<i64> {
            LazyList::new(move || {
                forced.set(forced.get() + 1);
                Step::cons(Thunk::value(n), naturals_from(n + 1, Rc::clone(&forced)))
            })
        }
        naturals_from(0, Rc::clone(forced))
    }

    #[test]
    fn test_take_from_infinite() {
        let list = take(Thunk::value(3), range(Thunk::value(6)));
        assert_eq!(list.to_vec(), vec![6, 7, 8]);
    }

    #[test]
    fn test_take_zero_is_empty() {
        let list = take(Thunk::value(0), range(Thunk::value(1)));
        assert!(list.force().is_empty());
    }

    #[test]
    fn test_take_zero_does_not_force_input() {
        let list: LazyList<i64> = LazyList::new(|| panic!("input forced"));
        assert!(take(Thunk::value(0), list).force().is_empty());
    }

    #[test]
    fn test_take_negative_is_empty() {
        let list = take(Thunk::value(-4), range(Thunk::value(1)));
        assert!(list.to_vec().is_empty());
    }

    #[test]
    fn test_take_more_than_available() {
        let list = take(Thunk::value(10), arr_to_list([1, 2]));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_take_forces_only_prefix() {
        let forced = Rc::new(Cell::new(0));
        let list = take(Thunk::value(4), counted_naturals(&forced));
        assert_eq!(forced.get(), 0);

        assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(forced.get(), 4);
    }

    #[test]
    fn test_take_keeps_heads_deferred() {
        let list: LazyList<i64> = LazyList::new(|| {
            Step::cons(Thunk::new(|| panic!("head forced")), LazyList::empty())
        });
        let step = take(Thunk::value(1), list).force();
        assert!(!step.is_empty());
    }

    #[test]
    fn test_filter_evens_from_range() {
        let evens = filter(is_even, range(Thunk::value(3)));
        let list = take(Thunk::value(5), evens);
        assert_eq!(list.to_vec(), vec![4, 6, 8, 10, 12]);
    }

    #[test]
    fn test_filter_finite() {
        let list = filter(|n: &i64| *n > 2, arr_to_list([1, 5, 2, 7, 0]));
        assert_eq!(list.to_vec(), vec![5, 7]);
    }

    #[test]
    fn test_filter_empty_skips_predicate() {
        let list = filter(
            |_: &i64| -> bool { panic!("predicate called") },
            arr_to_list(Vec::<i64>::new()),
        );
        assert!(list.force().is_empty());
    }

    #[test]
    fn test_filter_no_matches_in_finite_list() {
        let list = filter(|n: &i64| *n > 100, arr_to_list([1, 2, 3]));
        assert!(list.force().is_empty());
    }

    #[test]
    fn test_filter_forces_only_to_first_match() {
        let forced = Rc::new(Cell::new(0));
        let list = filter(|n: &i64| n % 5 == 4, counted_naturals(&forced));
        let step = list.force();
        assert_eq!(step.head_value(), Some(4));
        assert_eq!(forced.get(), 5);
    }

    #[test]
    fn test_filter_long_rejected_run() {
        // Half a million rejected elements before the first match
        let list = filter(|n: &i64| *n >= 500_000, range(Thunk::value(0)));
        assert_eq!(list.force().head_value(), Some(500_000));
    }

    #[test]
    fn test_filter_predicate_panic_propagates() {
        let list = filter(
            |n: &i64| if *n == 2 { panic!("bad element") } else { true },
            arr_to_list([1, 2, 3]),
        );
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| list.to_vec()));
        assert!(result.is_err());
    }

    #[test]
    fn test_forcing_twice_is_equal() {
        let list = take(Thunk::value(5), filter(is_even, range(Thunk::value(3))));
        assert_eq!(list.to_vec(), list.to_vec());
    }
}
