// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equal-subset-sum partition.
//!
//! A sequence of positive integers splits into two groups of equal total
//! exactly when the total is even and some subset reaches half of it. The
//! [`ReachabilityTable`] answers the second question in O(n·target) time and
//! O(target) space.
//!
//! # Example
//!
//! ```
//! use dp_kernels::partition::can_partition;
//!
//! assert!(can_partition(&[1, 5, 11, 5])); // {1, 5, 5} and {11}
//! assert!(!can_partition(&[1, 2, 3, 5])); // total 11 is odd
//! ```

pub mod table;

pub use table::ReachabilityTable;

use crate::config::Limits;
use crate::errors::InputError;
use crate::statistics::{Counters, Statistics};

/// Decide whether `nums` can be split into two subsets with equal sums.
///
/// An empty sequence has total 0 and splits trivially.
///
/// # Panics
///
/// Panics if a table for half the total cannot be allocated, including when
/// half the total does not fit in `usize` (only possible where `usize` is
/// narrower than 64 bits). Use [`can_partition_checked`] to bound the
/// allocation instead.
pub fn can_partition(nums: &[u32]) -> bool {
    can_partition_with_stats(nums, &mut Statistics::new())
}

/// [`can_partition`], recording the work done in `stats`.
pub fn can_partition_with_stats(nums: &[u32], stats: &mut Statistics) -> bool {
    let sum: u64 = nums.iter().map(|&num| u64::from(num)).sum();
    log::debug!("[Partition] {} numbers, total {}", nums.len(), sum);

    if sum % 2 != 0 {
        stats.increment_counter(Counters::OddSumRejects);
        return false;
    }

    // A target beyond usize saturates and is refused by ReachabilityTable::new.
    let target = usize::try_from(sum / 2).unwrap_or(usize::MAX);
    reaches_half(nums.iter().map(|&num| num as usize), target, stats)
}

/// Validating version of [`can_partition`].
///
/// Rejects an empty sequence, any element that is not strictly positive, a
/// total that overflows `i64`, and a table larger than `limits` allows.
/// Elements are checked in order and the first violation is reported.
///
/// # Example
///
/// ```
/// use dp_kernels::config::Limits;
/// use dp_kernels::errors::InputError;
/// use dp_kernels::partition::can_partition_checked;
///
/// assert_eq!(can_partition_checked(&[3, 1, 2], &Limits::default()), Ok(true));
/// assert_eq!(
///     can_partition_checked(&[3, 0, 2], &Limits::default()),
///     Err(InputError::NonPositiveElement { index: 1, value: 0 })
/// );
/// ```
pub fn can_partition_checked(nums: &[i64], limits: &Limits) -> Result<bool, InputError> {
    can_partition_checked_with_stats(nums, limits, &mut Statistics::new())
}

/// [`can_partition_checked`], recording work and failures in `stats`.
pub fn can_partition_checked_with_stats(
    nums: &[i64],
    limits: &Limits,
    stats: &mut Statistics,
) -> Result<bool, InputError> {
    let sum = match validate(nums, limits) {
        Ok(sum) => sum,
        Err(failure) => {
            log::warn!("[Partition] rejected input: {}", failure);
            stats.record_failure(&failure);
            return Err(failure);
        }
    };

    if sum % 2 != 0 {
        stats.increment_counter(Counters::OddSumRejects);
        return Ok(false);
    }

    // validate() bounded target + 1 by the cell limit, so it fits in usize.
    let target = (sum / 2) as usize;
    // An element too large for usize is also larger than the target.
    let values = nums
        .iter()
        .map(|&num| usize::try_from(num).unwrap_or(usize::MAX));
    Ok(reaches_half(values, target, stats))
}

/// Check the preconditions and return the total.
fn validate(nums: &[i64], limits: &Limits) -> Result<i64, InputError> {
    if nums.is_empty() {
        return Err(InputError::EmptyInput);
    }
    let mut sum: i64 = 0;
    for (index, &value) in nums.iter().enumerate() {
        if value <= 0 {
            return Err(InputError::NonPositiveElement { index, value });
        }
        sum = sum
            .checked_add(value)
            .ok_or(InputError::SumOverflow { index })?;
    }
    if sum % 2 == 0 {
        limits.check_table(sum as u128 / 2 + 1)?;
    }
    Ok(sum)
}

/// Whether some subset of `values` sums to exactly `target`.
fn reaches_half(values: impl Iterator<Item = usize>, target: usize, stats: &mut Statistics) -> bool {
    let mut table = ReachabilityTable::new(target);
    for num in values {
        let report = table.absorb(num);
        log::trace!(
            "[Partition] absorbed {}: {} cells visited, {} newly reachable",
            num,
            report.visited,
            report.improved
        );
        report.record(stats);
    }
    let found = table.is_reachable(target);
    log::debug!("[Partition] target {} reachable: {}", target, found);
    found
}
