// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-pointer strategy: shrink the window until the repeat is gone.

use super::DistinctWindow;
use crate::statistics::{Counters, Statistics};
use std::collections::HashSet;

/// Keeps the characters of the window `[left, right]` in a set.
///
/// No character occurs twice in the window. Each character enters and leaves
/// the set at most once, so the whole scan is O(n) amortized.
#[derive(Debug, Default)]
pub struct SlidingSet {
    window: HashSet<char>,
    chars: Vec<char>,
}

impl SlidingSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DistinctWindow for SlidingSet {
    fn longest_with_stats(&mut self, s: &str, stats: &mut Statistics) -> usize {
        self.window.clear();
        self.chars.clear();
        self.chars.extend(s.chars());

        let mut left = 0;
        let mut max = 0;
        for right in 0..self.chars.len() {
            stats.increment_counter(Counters::CharactersScanned);
            let c = self.chars[right];
            while self.window.contains(&c) {
                self.window.remove(&self.chars[left]);
                left += 1;
                stats.increment_counter(Counters::WindowShrinks);
            }
            self.window.insert(c);
            max = max.max(right - left + 1);
        }

        log::debug!("[SlidingSet] longest distinct run: {}", max);
        max
    }

    fn name(&self) -> &str {
        "SlidingSet"
    }
}
