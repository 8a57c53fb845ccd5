//! Partition coverage: the worker slices tile the first coordinate's range
//! exactly once, whether or not the worker count divides its width

use affine_offset::search::{partition_range, Partition, SearchError};
use proptest::prelude::*;

fn assert_tiles(parts: &[Partition], lo: i64, hi: i64, workers: usize) {
    assert_eq!(parts.len(), workers);
    assert_eq!(parts.first().unwrap().start, lo);
    assert_eq!(parts.last().unwrap().end, hi + 1);
    for pair in parts.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap");
    }
    let total: u64 = parts.iter().map(Partition::len).sum();
    assert_eq!(total, (hi - lo + 1) as u64);
}

#[test]
fn test_default_domain_eight_workers() {
    let parts = partition_range(-10_000..=10_000, 8).unwrap();
    assert_tiles(&parts, -10_000, 10_000, 8);
}

#[test]
fn test_dividing_worker_count() {
    // 20001 = 3 * 59 * 113
    let parts = partition_range(-10_000..=10_000, 3).unwrap();
    assert_tiles(&parts, -10_000, 10_000, 3);
    assert!(parts.iter().all(|p| p.len() == 6667));
}

#[test]
fn test_worker_indices_are_sequential() {
    let parts = partition_range(-5..=5, 4).unwrap();
    let workers: Vec<usize> = parts.iter().map(|p| p.worker).collect();
    assert_eq!(workers, vec![0, 1, 2, 3]);
}

#[test]
fn test_every_value_owned_once() {
    let parts = partition_range(-7..=7, 4).unwrap();
    for x in -7..=7 {
        let owners = parts.iter().filter(|p| p.values().contains(&x)).count();
        assert_eq!(owners, 1, "x = {}", x);
    }
}

#[test]
fn test_extreme_ranges_do_not_overflow() {
    let lo = -(i64::MAX / 2 + 1);
    let hi = i64::MAX / 2 + 1;
    let parts = partition_range(lo..=hi, 4).unwrap();
    assert_eq!(parts.first().unwrap().start, lo);
    assert_eq!(parts.last().unwrap().end, hi + 1);
    for pair in parts.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_range_ending_at_max_is_invalid() {
    let result = partition_range(-5..=i64::MAX, 4);
    assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
}

proptest! {
    #[test]
    fn prop_partitions_tile_range(lo in -5000i64..5000, width in 1i64..3000, workers in 1usize..64) {
        let hi = lo + width - 1;
        let parts = partition_range(lo..=hi, workers).unwrap();
        assert_tiles(&parts, lo, hi, workers);

        let max = parts.iter().map(Partition::len).max().unwrap();
        let min = parts.iter().map(Partition::len).min().unwrap();
        prop_assert!(max - min <= 1);
    }
}
