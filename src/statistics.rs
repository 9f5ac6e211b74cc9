// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Work counters filled in by the `*_with_stats` kernels, plus one counter
//! per [`InputError`] kind for the checked entry points.

use crate::errors::InputError;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Numbers or strings merged into a DP table.
    ItemsAbsorbed,
    /// Table cells examined by a descending scan.
    CellsVisited,
    /// Cells whose value changed.
    CellsImproved,
    /// Partition inputs rejected early because the total is odd.
    OddSumRejects,
    /// Left-boundary moves of a sliding window.
    WindowShrinks,
    CharactersScanned,
}

const COUNT: usize = Counters::COUNT + InputError::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    pub(crate) fn record_failure(&mut self, failure: &InputError) {
        self.stats[Counters::COUNT + failure.ordinal()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of rejections of the same kind as `failure`.
    pub fn failures(&self, failure: &InputError) -> u64 {
        self.stats[Counters::COUNT + failure.ordinal()]
    }

    pub fn total_failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

/// Work done by one descending scan over a DP table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub visited: u64,
    pub improved: u64,
}

impl ScanReport {
    /// Add this scan to the running counters.
    pub(crate) fn record(self, stats: &mut Statistics) {
        stats.increment_counter(Counters::ItemsAbsorbed);
        stats.add(Counters::CellsVisited, self.visited);
        stats.add(Counters::CellsImproved, self.improved);
    }
}
