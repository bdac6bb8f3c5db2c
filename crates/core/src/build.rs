//! List construction
//!
//! Both constructors only capture their input. Each forcing step does a
//! constant amount of work and produces a tail that is still unforced.

use crate::list::{LazyList, Step};
use crate::thunk::Thunk;
use std::rc::Rc;

/// Lazily expose the elements of a slice as a list
///
/// The items are moved into a shared buffer once; every cell of the list
/// refers to it by offset, so walking the list never copies the remainder.
pub fn arr_to_list<T: Clone + 'static>(items: impl Into<Rc<[T]>>) -> LazyList<T> {
    list_from(items.into(), 0)
}

fn list_from<T: Clone + 'static>(items: Rc<[T]>, offset: usize) -> LazyList<T> {
    LazyList::new(move || {
        if offset >= items.len() {
            return Step::Empty;
        }
        let cell = Rc::clone(&items);
        Step::cons(
            Thunk::new(move || cell[offset].clone()),
            list_from(Rc::clone(&items), offset + 1),
        )
    })
}

/// The infinite ascending sequence `start, start + 1, start + 2, ...`
///
/// Forcing the list evaluates `start` exactly once. The tail starts from
/// the already computed value, so deep positions do not replay a chain of
/// earlier thunks.
///
/// # Panics
///
/// The sequence never wraps. Forcing the element after `i64::MAX` panics
/// with `range: successor of ... overflows i64`, in every build profile.
pub fn range(start: Thunk<i64>) -> LazyList<i64> {
    LazyList::new(move || {
        let begin = start.force();
        Step::cons(Thunk::value(begin), range(Thunk::value(begin).map(successor)))
    })
}

fn successor(n: i64) -> i64 {
    match n.checked_add(1) {
        Some(next) => next,
        None => panic!("range: successor of {} overflows i64", n),
    }
}
