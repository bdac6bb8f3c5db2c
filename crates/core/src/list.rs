//! Lazy singly-linked lists
//!
//! A `LazyList<T>` is a thunk that, when forced, yields a [`Step`]: either
//! `Empty` or a `Cons` holding a deferred head and a tail that is itself
//! another unforced `LazyList`. Whether a list is empty can only be learned
//! by forcing it.
//!
//! Because the tail is never expanded ahead of time, a list may be infinite.
//! Consumers must bound such a list (see [`crate::take`]) before walking it
//! to the end.

use crate::thunk::Thunk;
use std::fmt;

/// The result of forcing a `LazyList` once
pub enum Step<T> {
    Empty,
    Cons { head: Thunk<T>, tail: LazyList<T> },
}

impl<T: 'static> Step<T> {
    pub fn cons(head: Thunk<T>, tail: LazyList<T>) -> Self {
        Step::Cons { head, tail }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Step::Empty)
    }

    /// Split into head and tail, or `None` at the end of the list
    pub fn split(self) -> Option<(Thunk<T>, LazyList<T>)> {
        match self {
            Step::Empty => None,
            Step::Cons { head, tail } => Some((head, tail)),
        }
    }

    /// Force the head, if there is one
    pub fn head_value(&self) -> Option<T> {
        match self {
            Step::Empty => None,
            Step::Cons { head, .. } => Some(head.force()),
        }
    }
}

impl<T> fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Empty => f.write_str("Empty"),
            Step::Cons { .. } => f.write_str("Cons(<deferred>, <deferred>)"),
        }
    }
}

/// A deferred list
pub struct LazyList<T>(Thunk<Step<T>>);

impl<T: 'static> LazyList<T> {
    /// Suspend a computation producing the first step of the list
    pub fn new(f: impl Fn() -> Step<T> + 'static) -> Self {
        LazyList(Thunk::new(f))
    }

    /// The list with no elements
    pub fn empty() -> Self {
        LazyList::new(|| Step::Empty)
    }

    /// Force one layer of the list
    pub fn force(&self) -> Step<T> {
        self.0.force()
    }

    /// Unwrap the underlying deferred step
    pub fn into_thunk(self) -> Thunk<Step<T>> {
        self.0
    }

    /// Walk the list one forced step at a time
    ///
    /// The iterator is itself lazy, so `list.iter().take(n)` is safe on an
    /// infinite list.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            next: Some(self.clone()),
        }
    }

    /// Collect every element
    ///
    /// Never returns for an infinite list.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Clone for LazyList<T> {
    fn clone(&self) -> Self {
        LazyList(self.0.clone())
    }
}

impl<T> fmt::Debug for LazyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyList(<deferred>)")
    }
}

impl<T> From<Thunk<Step<T>>> for LazyList<T> {
    fn from(thunk: Thunk<Step<T>>) -> Self {
        LazyList(thunk)
    }
}

/// Iterator over the forced head values of a `LazyList`
pub struct Iter<T> {
    next: Option<LazyList<T>>,
}

impl<T: 'static> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let list = self.next.take()?;
        let (head, tail) = list.force().split()?;
        self.next = Some(tail);
        Some(head.force())
    }
}

impl<T: 'static> IntoIterator for LazyList<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter { next: Some(self) }
    }
}

impl<T: 'static> IntoIterator for &LazyList<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}
