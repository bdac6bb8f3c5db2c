//! Thunk Core: lazy evaluation primitives
//!
//! This crate provides deferred computations and the structures built from
//! them: short-circuiting boolean logic and singly-linked lists whose head
//! and tail are both suspended.
//!
//! Key design principles:
//! - Thunk: a zero-argument computation, forced on demand
//! - LazyList: a thunk yielding either `Empty` or a head thunk plus a tail list
//! - Combinators close over their inputs and never force more than the
//!   consumer asks for, so infinite lists stay finite in memory
//!
//! # Modules
//!
//! - `thunk`: The `Thunk` type, memoization and divergence
//! - `logic`: Deferred `and` / `or` plus deferred arithmetic helpers
//! - `list`: `LazyList`, the forced `Step`, and iteration
//! - `build`: Constructing lists from slices and infinite ranges
//! - `combinators`: `take` and `filter`
//! - `print`: Consumers that write a bounded list to a sink
//!
//! # Example
//!
//! ```
//! use thunk_core::{Thunk, filter, range, take};
//!
//! let evens = filter(|n: &i64| n % 2 == 0, range(Thunk::value(3)));
//! let first_five = take(Thunk::value(5), evens);
//! assert_eq!(first_five.to_vec(), vec![4, 6, 8, 10, 12]);
//! ```

pub mod build;
pub mod combinators;
pub mod list;
pub mod logic;
pub mod print;
pub mod thunk;

// Re-export key types and functions
pub use build::{arr_to_list, range};
pub use combinators::{filter, take};
pub use list::{Iter, LazyList, Step};
pub use logic::{add, and, first, or};
pub use print::{print_list, write_list};
pub use thunk::{Thunk, diverge};
