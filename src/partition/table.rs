// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boolean reachability table for subset sums.

use crate::statistics::ScanReport;

/// Which sums in `0..=target` some subset of the absorbed numbers hits exactly.
///
/// Entry 0 is always reachable (the empty subset), and an entry never goes
/// back from reachable to unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityTable {
    reachable: Vec<bool>,
}

impl ReachabilityTable {
    /// Create a table for sums up to and including `target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is `usize::MAX` or `target + 1` entries cannot be
    /// allocated.
    pub fn new(target: usize) -> Self {
        let Some(size) = target.checked_add(1) else {
            panic!("Reachability table too large: target {}", target);
        };
        let mut reachable = vec![false; size];
        reachable[0] = true;
        Self { reachable }
    }

    /// The largest sum tracked by the table.
    pub fn target(&self) -> usize {
        self.reachable.len() - 1
    }

    /// Whether some subset of the absorbed numbers sums to exactly `sum`.
    pub fn is_reachable(&self, sum: usize) -> bool {
        self.reachable.get(sum).copied().unwrap_or(false)
    }

    /// Merge one more number into the table, using it at most once per subset.
    ///
    /// The scan runs from `target` down to `num` so that a cell updated in this
    /// pass is never read again in the same pass. A number larger than the
    /// target leaves the table unchanged.
    pub fn absorb(&mut self, num: usize) -> ScanReport {
        let mut report = ScanReport::default();
        let target = self.target();
        if num > target {
            return report;
        }
        for i in (num..=target).rev() {
            report.visited += 1;
            if !self.reachable[i] && self.reachable[i - num] {
                self.reachable[i] = true;
                report.improved += 1;
            }
        }
        report
    }

    /// Number of reachable sums, including 0.
    pub fn count_reachable(&self) -> usize {
        self.reachable.iter().filter(|&&r| r).count()
    }
}
