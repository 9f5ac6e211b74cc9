// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! Brute-force oracles for each kernel, and seeded input generators.

#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Deterministic generator so failures reproduce.
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Try every subset of `nums` for one that sums to half the total.
pub fn brute_partition(nums: &[u32]) -> bool {
    let total: u64 = nums.iter().map(|&n| u64::from(n)).sum();
    if total % 2 != 0 {
        return false;
    }
    (0u32..1 << nums.len()).any(|mask| {
        let sum: u64 = nums
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &n)| u64::from(n))
            .sum();
        2 * sum == total
    })
}

/// Try every subset of `strs` and keep the largest one within budget.
pub fn brute_max_form(strs: &[String], m: usize, n: usize) -> usize {
    (0u32..1 << strs.len())
        .filter_map(|mask| {
            let chosen: Vec<&String> = strs
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| s)
                .collect();
            let zeros: usize = chosen.iter().map(|s| s.matches('0').count()).sum();
            let ones: usize = chosen.iter().map(|s| s.matches('1').count()).sum();
            (zeros <= m && ones <= n).then_some(chosen.len())
        })
        .max()
        .unwrap_or(0)
}

/// Check every substring of `s` for distinct characters.
pub fn brute_longest(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut best = 0;
    for start in 0..chars.len() {
        let mut seen = HashSet::new();
        for &c in &chars[start..] {
            if !seen.insert(c) {
                break;
            }
        }
        best = best.max(seen.len());
    }
    best
}

pub fn random_nums(rng: &mut SmallRng, max_len: usize, max_value: u32) -> Vec<u32> {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| rng.gen_range(1..=max_value)).collect()
}

pub fn random_text(rng: &mut SmallRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

pub fn random_binary_strings(rng: &mut SmallRng, max_count: usize, max_len: usize) -> Vec<String> {
    let count = rng.gen_range(0..=max_count);
    (0..count)
        .map(|_| random_text(rng, &['0', '1'], max_len))
        .collect()
}
