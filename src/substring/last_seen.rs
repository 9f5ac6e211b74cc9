// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Map strategy: jump the window start past the previous occurrence.

use super::DistinctWindow;
use crate::statistics::{Counters, Statistics};
use std::collections::HashMap;

/// Scans once, remembering the last index of every character seen.
///
/// For every character in the map, the stored index is the largest index at
/// or before the scan position where that character occurs.
#[derive(Debug, Default)]
pub struct LastSeenMap {
    last_seen: HashMap<char, usize>,
}

impl LastSeenMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DistinctWindow for LastSeenMap {
    fn longest_with_stats(&mut self, s: &str, stats: &mut Statistics) -> usize {
        self.last_seen.clear();
        let mut start = 0;
        let mut max = 0;

        for (i, c) in s.chars().enumerate() {
            stats.increment_counter(Counters::CharactersScanned);
            if let Some(&p) = self.last_seen.get(&c) {
                // A repeat from before the window is harmless.
                if p + 1 > start {
                    start = p + 1;
                    stats.increment_counter(Counters::WindowShrinks);
                }
            }
            max = max.max(i - start + 1);
            self.last_seen.insert(c, i);
        }

        log::debug!("[LastSeenMap] longest distinct run: {}", max);
        max
    }

    fn name(&self) -> &str {
        "LastSeenMap"
    }
}
