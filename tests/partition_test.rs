// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the equal-subset-sum partition kernel.

mod common;

use dp_kernels::partition::{can_partition, can_partition_checked, can_partition_with_stats};
use dp_kernels::{Counters, Limits, Statistics};

#[test]
fn test_known_examples() {
    assert!(can_partition(&[1, 5, 11, 5]));
    assert!(!can_partition(&[1, 2, 3, 5]));
}

#[test]
fn test_odd_total_never_splits() {
    let mut rng = common::rng(416);
    let mut seen = 0;
    while seen < 200 {
        let nums = common::random_nums(&mut rng, 12, 50);
        let total: u64 = nums.iter().map(|&n| u64::from(n)).sum();
        if total % 2 == 1 {
            assert!(!can_partition(&nums), "{:?}", nums);
            seen += 1;
        }
    }
}

#[test]
fn test_even_count_of_equal_values_splits() {
    for value in [1, 2, 7, 100, 12345] {
        for count in [2, 4, 6, 10] {
            let nums = vec![value; count];
            assert!(can_partition(&nums), "{} x {}", count, value);
        }
    }
}

#[test]
fn test_matches_subset_enumeration() {
    let mut rng = common::rng(11);
    for _ in 0..300 {
        let nums = common::random_nums(&mut rng, 12, 30);
        assert_eq!(
            can_partition(&nums),
            common::brute_partition(&nums),
            "{:?}",
            nums
        );
    }
}

#[test]
fn test_checked_agrees_on_valid_input() {
    let mut rng = common::rng(5);
    let limits = Limits::default();
    for _ in 0..100 {
        let nums = common::random_nums(&mut rng, 10, 40);
        let wide: Vec<i64> = nums.iter().map(|&n| i64::from(n)).collect();
        assert_eq!(
            can_partition_checked(&wide, &limits),
            Ok(can_partition(&nums))
        );
    }
}

#[test]
fn test_large_values() {
    assert!(can_partition(&[100_000, 60_000, 40_000]));
    assert!(!can_partition(&[100_000, 60_000, 40_002]));
}

#[test]
fn test_cells_visited_bounded_by_items_times_target() {
    let nums = [3, 1, 4, 1, 5, 9, 2, 7];
    let mut stats = Statistics::new();
    assert!(can_partition_with_stats(&nums, &mut stats)); // 9 + 7 = 16
    let target = nums.iter().sum::<u32>() as u64 / 2;
    assert_eq!(stats.get(Counters::ItemsAbsorbed), nums.len() as u64);
    assert!(stats.get(Counters::CellsVisited) <= nums.len() as u64 * target);
}
