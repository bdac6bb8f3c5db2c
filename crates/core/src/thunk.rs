//! Deferred values
//!
//! A `Thunk<T>` is a zero-argument computation that produces a `T` when
//! forced. Thunks are reference counted so they can be cloned into as many
//! closures as need them; every clone forces the same computation.
//!
//! Forcing a thunk either returns a value or never returns. Nothing is
//! cached unless the thunk was built with [`Thunk::memoize`].

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A deferred computation producing `T`
pub struct Thunk<T>(Rc<dyn Fn() -> T>);

impl<T: 'static> Thunk<T> {
    /// Suspend `f` until the thunk is forced
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Thunk(Rc::new(f))
    }

    /// Evaluate the computation
    ///
    /// Each call runs the underlying closure again.
    pub fn force(&self) -> T {
        (self.0)()
    }

    /// A thunk that never produces a value
    ///
    /// Forcing it loops forever. Handing it to a combinator is a cheap way
    /// to show that the combinator never forces the operand.
    pub fn bottom() -> Self {
        Thunk::new(diverge)
    }

    /// Defer a transformation of this thunk's value
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Thunk<U> {
        Thunk::new(move || f(self.force()))
    }
}

impl<T: Clone + 'static> Thunk<T> {
    /// A thunk returning an already computed value
    pub fn value(value: T) -> Self {
        Thunk::new(move || value.clone())
    }

    /// Cache the result of the first force
    ///
    /// Later forces return a clone of the cached value without running the
    /// computation again. Only observable for thunks with side effects.
    pub fn memoize(self) -> Self {
        let cell: Rc<OnceCell<T>> = Rc::new(OnceCell::new());
        Thunk::new(move || cell.get_or_init(|| self.force()).clone())
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Thunk(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(<deferred>)")
    }
}

/// Never return
pub fn diverge<T>() -> T {
    loop {
        std::hint::spin_loop();
    }
}
