// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest substring without repeating characters.
//!
//! Two interchangeable strategies satisfy the same contract, the
//! [`DistinctWindow`] trait:
//!
//! - [`LastSeenMap`] remembers where each character last occurred and jumps
//!   the window start past a repeat in one step.
//! - [`SlidingSet`] keeps the set of characters in the window and shrinks it
//!   one character at a time until the repeat is gone.
//!
//! Both return the same length for every input. Lengths and positions count
//! `char`s (Unicode scalar values), not bytes.
//!
//! # Example
//!
//! ```
//! use dp_kernels::substring::{length_of_longest_substring, DistinctWindow, SlidingSet};
//!
//! assert_eq!(length_of_longest_substring("abcabcbb"), 3);
//! assert_eq!(SlidingSet::new().longest("pwwkew"), 3);
//! ```

pub mod last_seen;
pub mod sliding_set;

pub use last_seen::LastSeenMap;
pub use sliding_set::SlidingSet;

use crate::statistics::Statistics;
use std::fmt::Debug;

/// A strategy for finding the longest run of pairwise distinct characters.
///
/// Strategies keep their scratch buffers between calls, so reusing one
/// instance across many strings avoids reallocating.
pub trait DistinctWindow: Debug {
    /// Length of the longest contiguous run of `s` with no repeated character,
    /// recording the work done in `stats`.
    fn longest_with_stats(&mut self, s: &str, stats: &mut Statistics) -> usize;

    fn longest(&mut self, s: &str) -> usize {
        self.longest_with_stats(s, &mut Statistics::new())
    }

    /// Optional: Get a name for this strategy (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The strategy behind [`length_of_longest_substring`].
///
/// [`LastSeenMap`] unless the crate is built with the `window_two_pointer`
/// feature and without `window_map`.
#[cfg(window_map)]
pub type PrimaryWindow = LastSeenMap;

#[cfg(window_two_pointer)]
pub type PrimaryWindow = SlidingSet;

/// Length of the longest substring of `s` without a repeated character.
///
/// Returns 0 for the empty string.
pub fn length_of_longest_substring(s: &str) -> usize {
    PrimaryWindow::new().longest(s)
}

/// [`length_of_longest_substring`], recording the work done in `stats`.
pub fn length_of_longest_substring_with_stats(s: &str, stats: &mut Statistics) -> usize {
    PrimaryWindow::new().longest_with_stats(s, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategies() -> Vec<Box<dyn DistinctWindow>> {
        vec![Box::new(LastSeenMap::new()), Box::new(SlidingSet::new())]
    }

    #[test]
    fn test_known_examples() {
        for mut strategy in strategies() {
            assert_eq!(strategy.longest(""), 0, "{}", strategy.name());
            assert_eq!(strategy.longest("a"), 1, "{}", strategy.name());
            assert_eq!(strategy.longest("abcabcbb"), 3, "{}", strategy.name());
            assert_eq!(strategy.longest("bbbbb"), 1, "{}", strategy.name());
            assert_eq!(strategy.longest("pwwkew"), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn test_start_never_moves_back() {
        // The 'a' at 4 was last seen at 0, before the window start of 2.
        for mut strategy in strategies() {
            assert_eq!(strategy.longest("abba"), 2, "{}", strategy.name());
            assert_eq!(strategy.longest("tmmzuxt"), 5, "{}", strategy.name());
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        for mut strategy in strategies() {
            assert_eq!(strategy.longest("héllo wörld"), 7, "{}", strategy.name());
            assert_eq!(strategy.longest("日本日本語"), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn test_strategy_reuse() {
        for mut strategy in strategies() {
            assert_eq!(strategy.longest("abcdefg"), 7);
            // Leftover state from the previous string must not leak.
            assert_eq!(strategy.longest("gfedcba"), 7);
            assert_eq!(strategy.longest(""), 0);
        }
    }

    #[test]
    fn test_exactly_one_strategy_selected() {
        assert!(cfg!(window_map) != cfg!(window_two_pointer));
        #[cfg(window_map)]
        assert_eq!(PrimaryWindow::new().name(), "LastSeenMap");
        #[cfg(window_two_pointer)]
        assert_eq!(PrimaryWindow::new().name(), "SlidingSet");
    }

    #[test]
    fn test_primary_window() {
        assert_eq!(length_of_longest_substring("dvdf"), 3);
        assert_eq!(length_of_longest_substring(" "), 1);
    }
}
