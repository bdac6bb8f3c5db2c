//! Deferred logic and arithmetic
//!
//! Each combinator takes thunks and returns a new thunk. Operands are forced
//! left to right, and only when the result itself is forced.

use crate::thunk::Thunk;

/// Short-circuit conjunction
///
/// Forces `a`; if it is false, returns false without forcing `b`.
pub fn and(a: Thunk<bool>, b: Thunk<bool>) -> Thunk<bool> {
    Thunk::new(move || a.force() && b.force())
}

/// Short-circuit disjunction
///
/// Forces `a`; if it is true, returns true without forcing `b`.
pub fn or(a: Thunk<bool>, b: Thunk<bool>) -> Thunk<bool> {
    Thunk::new(move || a.force() || b.force())
}

/// Deferred sum
///
/// # Panics
///
/// Forcing the result panics if the sum overflows `i64`, in every build
/// profile; it never wraps.
pub fn add(a: Thunk<i64>, b: Thunk<i64>) -> Thunk<i64> {
    Thunk::new(move || {
        let (x, y) = (a.force(), b.force());
        match x.checked_add(y) {
            Some(sum) => sum,
            None => panic!("add: {} + {} overflows i64", x, y),
        }
    })
}

/// Deferred projection onto the first operand
///
/// `b` is never forced, so it may diverge.
pub fn first<T: 'static>(a: Thunk<T>, _b: Thunk<T>) -> Thunk<T> {
    Thunk::new(move || a.force())
}
