//! Demonstrations of the lazy primitives
//!
//! Each function builds a deferred structure, forces a bounded part of it,
//! and writes what it sees to `out`, one value per line.

use crate::config::{DemoConfig, FilterConfig, RangeConfig};
use std::io::{self, Write};
use thunk_core::{Thunk, add, and, arr_to_list, filter, first, or, range, take, write_list};
use tracing::info;

/// Truth tables for deferred `and` / `or`
pub fn logic<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let cases = [(true, true), (true, false), (false, true), (false, false)];

    writeln!(out, "---- and:")?;
    for (a, b) in cases {
        let result = and(Thunk::value(a), Thunk::value(b)).force();
        writeln!(out, "and({}, {}) = {}", a, b, result)?;
    }

    writeln!(out, "---- or:")?;
    for (a, b) in cases {
        let result = or(Thunk::value(a), Thunk::value(b)).force();
        writeln!(out, "or({}, {}) = {}", a, b, result)?;
    }
    Ok(())
}

/// Operands that are never needed are never forced, even if they diverge
pub fn unforced<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let picked = first(Thunk::value(3), Thunk::bottom()).force();
    writeln!(out, "first(3, <diverges>) = {}", picked)?;

    let sum = add(Thunk::value(2), Thunk::new(|| 3));
    writeln!(out, "add(2, 3) = {}", sum.force())?;

    let skipped = and(Thunk::value(false), Thunk::bottom()).force();
    writeln!(out, "and(false, <diverges>) = {}", skipped)?;

    let taken = or(Thunk::value(true), Thunk::bottom()).force();
    writeln!(out, "or(true, <diverges>) = {}", taken)?;
    Ok(())
}

/// Walk a finite list built from `items`
pub fn list<W: Write + ?Sized>(out: &mut W, items: &[i64]) -> io::Result<usize> {
    write_list(out, &arr_to_list(items.to_vec()))
}

/// The first `count` naturals from `start`
pub fn bounded_range<W: Write + ?Sized>(out: &mut W, settings: &RangeConfig) -> io::Result<usize> {
    let list = take(Thunk::value(settings.count), range(Thunk::value(settings.start)));
    write_list(out, &list)
}

/// The first `count` multiples of `divisor` at or after `start`
///
/// The divisor must be non-zero; see [`crate::config::validate_divisor`].
pub fn bounded_multiples<W: Write + ?Sized>(
    out: &mut W,
    settings: &FilterConfig,
) -> io::Result<usize> {
    let divisor = settings.divisor;
    let multiples = filter(
        move |n: &i64| n.checked_rem(divisor) == Some(0),
        range(Thunk::value(settings.start)),
    );
    write_list(out, &take(Thunk::value(settings.count), multiples))
}

/// Run every demonstration in order
pub fn tour<W: Write + ?Sized>(out: &mut W, config: &DemoConfig) -> io::Result<()> {
    info!("starting tour");

    writeln!(out, "---- Unforced operands:")?;
    unforced(out)?;

    writeln!(out, "---- Short-circuit logic:")?;
    logic(out)?;

    writeln!(out, "---- List from items:")?;
    list(out, &config.list.items)?;

    writeln!(
        out,
        "---- Take {} from range starting at {}:",
        config.range.count, config.range.start
    )?;
    bounded_range(out, &config.range)?;

    writeln!(
        out,
        "---- Take {} multiples of {} starting at {}:",
        config.filter.count, config.filter.divisor, config.filter.start
    )?;
    bounded_multiples(out, &config.filter)?;
    Ok(())
}
