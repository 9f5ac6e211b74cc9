// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Three small dynamic-programming and sliding-window kernels.
//!
//! Each kernel is a pure function from an in-memory input to a scalar. No
//! state is shared between calls: every call builds its own table or window
//! and drops it on return, so calls are safe from any number of threads.
//!
//! # Kernels
//!
//! 1. **Partition** ([`can_partition`]): can a multiset of positive integers be
//!    split into two groups of equal total? Boolean reachability table over
//!    sums `0..=total/2`.
//! 2. **Substring** ([`length_of_longest_substring`]): length of the longest run
//!    of pairwise distinct characters. Two interchangeable window strategies.
//! 3. **Max form** ([`find_max_form`]): how many binary strings fit in a budget
//!    of `m` zeros and `n` ones? Two-dimensional capacity table.
//!
//! Both table kernels merge one item at a time, scanning the table from the
//! top down so that an item is never counted twice.
//!
//! # Checked entry points
//!
//! The plain kernels trust their input. The `*_checked` variants validate it
//! first and bound table sizes with [`Limits`], returning an [`InputError`]
//! instead of computing on bad data.
//!
//! # Statistics
//!
//! Every kernel has a `*_with_stats` variant that records the work done in a
//! [`Statistics`] instance (items absorbed, cells visited, window shrinks, and
//! rejected inputs by kind).

pub mod config;
pub mod errors;
pub mod max_form;
pub mod partition;
pub mod statistics;
pub mod substring;

// Re-export commonly used types
pub use config::Limits;
pub use errors::InputError;
pub use max_form::{find_max_form, find_max_form_checked, BitCounts, CapacityTable};
pub use partition::{can_partition, can_partition_checked, ReachabilityTable};
pub use statistics::{Counters, Statistics};
pub use substring::{length_of_longest_substring, DistinctWindow, LastSeenMap, SlidingSet};
