// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-budget capacity table.

use super::BitCounts;
use crate::statistics::ScanReport;

/// Best number of strings selectable under every pair of budgets up to `(m, n)`.
///
/// Cell `(i, j)` holds the largest count of absorbed strings, each used at
/// most once, with at most `i` zeros and `j` ones in total. Stored row-major
/// in a single vector. Values never decrease along either axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityTable {
    m: usize,
    n: usize,
    cells: Vec<usize>,
}

impl CapacityTable {
    /// Create an all-zero table for budgets `0..=m` zeros and `0..=n` ones.
    ///
    /// # Panics
    ///
    /// Panics if `(m + 1) * (n + 1)` overflows `usize` or the cells cannot be
    /// allocated.
    pub fn new(m: usize, n: usize) -> Self {
        let size = m
            .checked_add(1)
            .zip(n.checked_add(1))
            .and_then(|(rows, cols)| rows.checked_mul(cols));
        let Some(size) = size else {
            panic!("Capacity table too large: budgets ({}, {})", m, n);
        };
        Self {
            m,
            n,
            cells: vec![0; size],
        }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        i * (self.n + 1) + j
    }

    /// Best count with at most `i` zeros and `j` ones.
    ///
    /// # Panics
    ///
    /// Panics if `i > m` or `j > n`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i <= self.m && j <= self.n, "Budget ({}, {}) out of range", i, j);
        self.cells[self.index(i, j)]
    }

    /// Best count for the full budget.
    pub fn best(&self) -> usize {
        self.cells[self.index(self.m, self.n)]
    }

    /// Merge one more string into the table.
    ///
    /// Both axes are scanned from the top down so that the string is never
    /// selected twice. A string over either budget leaves the table unchanged.
    pub fn absorb(&mut self, counts: BitCounts) -> ScanReport {
        let mut report = ScanReport::default();
        if !counts.fits(self.m, self.n) {
            return report;
        }
        for i in (counts.zeros..=self.m).rev() {
            for j in (counts.ones..=self.n).rev() {
                report.visited += 1;
                let with = self.cells[self.index(i - counts.zeros, j - counts.ones)] + 1;
                let cell = self.index(i, j);
                if with > self.cells[cell] {
                    self.cells[cell] = with;
                    report.improved += 1;
                }
            }
        }
        report
    }
}
