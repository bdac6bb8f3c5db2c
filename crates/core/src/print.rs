//! List consumers
//!
//! These walk a list to its end, forcing every head. They are only safe on
//! bounded lists: on an infinite list they never return.

use crate::list::{LazyList, Step};
use std::fmt::Display;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Write each element of `list` on its own line
///
/// Returns the number of elements written.
pub fn write_list<T, W>(out: &mut W, list: &LazyList<T>) -> io::Result<usize>
where
    T: Display + 'static,
    W: Write + ?Sized,
{
    let mut written = 0usize;
    let mut step = list.force();
    while let Step::Cons { head, tail } = step {
        let value = head.force();
        trace!(index = written, %value, "emit");
        writeln!(out, "{}", value)?;
        written += 1;
        step = tail.force();
    }
    debug!(written, "list exhausted");
    Ok(written)
}

/// Print each element of `list` to stdout, one per line
pub fn print_list<T: Display + 'static>(list: &LazyList<T>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out, list)?;
    out.flush()
}
