// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximum form under a dual budget.
//!
//! Given binary strings and two budgets, `m` zeros and `n` ones, find how many
//! strings can be selected (each at most once) without exceeding either
//! budget. This is a 0/1 knapsack where every item draws on two capacity
//! pools at once; the [`CapacityTable`] solves it in O(k·m·n) time and
//! O(m·n) space for k strings.
//!
//! # Example
//!
//! ```
//! use dp_kernels::max_form::find_max_form;
//!
//! // "10", "0001", "1" and "0" use 5 zeros and 3 ones.
//! assert_eq!(find_max_form(&["10", "0001", "111001", "1", "0"], 5, 3), 4);
//! assert_eq!(find_max_form(&["10", "0", "1"], 1, 1), 2);
//! ```

pub mod counts;
pub mod table;

pub use counts::BitCounts;
pub use table::CapacityTable;

use crate::config::Limits;
use crate::errors::InputError;
use crate::statistics::Statistics;

/// Largest number of `strs` selectable with at most `m` zeros and `n` ones.
///
/// Characters other than '0' are counted as ones; see
/// [`find_max_form_checked`] for strict validation.
///
/// # Panics
///
/// Panics if the `(m + 1) × (n + 1)` table overflows `usize` or cannot be
/// allocated. Use [`find_max_form_checked`] to bound it instead.
pub fn find_max_form<S: AsRef<str>>(strs: &[S], m: usize, n: usize) -> usize {
    find_max_form_with_stats(strs, m, n, &mut Statistics::new())
}

/// [`find_max_form`], recording the work done in `stats`.
pub fn find_max_form_with_stats<S: AsRef<str>>(
    strs: &[S],
    m: usize,
    n: usize,
    stats: &mut Statistics,
) -> usize {
    let counts = strs.iter().map(|s| BitCounts::of(s.as_ref()));
    select(counts, m, n, stats)
}

/// Validating version of [`find_max_form`].
///
/// Rejects the first string holding a character other than '0' or '1', and
/// budgets whose table would exceed `limits`.
///
/// # Example
///
/// ```
/// use dp_kernels::config::Limits;
/// use dp_kernels::errors::InputError;
/// use dp_kernels::max_form::find_max_form_checked;
///
/// let limits = Limits::default();
/// assert_eq!(find_max_form_checked(&["10", "0", "1"], 1, 1, &limits), Ok(2));
/// assert_eq!(
///     find_max_form_checked(&["10", "012"], 1, 1, &limits),
///     Err(InputError::NonBinaryCharacter { string_index: 1, position: 2, found: '2' })
/// );
/// ```
pub fn find_max_form_checked<S: AsRef<str>>(
    strs: &[S],
    m: usize,
    n: usize,
    limits: &Limits,
) -> Result<usize, InputError> {
    find_max_form_checked_with_stats(strs, m, n, limits, &mut Statistics::new())
}

/// [`find_max_form_checked`], recording work and failures in `stats`.
pub fn find_max_form_checked_with_stats<S: AsRef<str>>(
    strs: &[S],
    m: usize,
    n: usize,
    limits: &Limits,
    stats: &mut Statistics,
) -> Result<usize, InputError> {
    let counts = match validate(strs, m, n, limits) {
        Ok(counts) => counts,
        Err(failure) => {
            log::warn!("[MaxForm] rejected input: {}", failure);
            stats.record_failure(&failure);
            return Err(failure);
        }
    };
    Ok(select(counts.into_iter(), m, n, stats))
}

fn validate<S: AsRef<str>>(
    strs: &[S],
    m: usize,
    n: usize,
    limits: &Limits,
) -> Result<Vec<BitCounts>, InputError> {
    let counts = strs
        .iter()
        .enumerate()
        .map(|(string_index, s)| BitCounts::parse(string_index, s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    limits.check_table((m as u128 + 1) * (n as u128 + 1))?;
    Ok(counts)
}

fn select(
    counts: impl Iterator<Item = BitCounts>,
    m: usize,
    n: usize,
    stats: &mut Statistics,
) -> usize {
    log::debug!("[MaxForm] budgets: {} zeros, {} ones", m, n);
    let mut table = CapacityTable::new(m, n);
    for item in counts {
        let report = table.absorb(item);
        log::trace!(
            "[MaxForm] absorbed {:?}: {} cells visited, {} improved",
            item,
            report.visited,
            report.improved
        );
        report.record(stats);
    }
    let best = table.best();
    log::debug!("[MaxForm] best selection: {} strings", best);
    best
}
