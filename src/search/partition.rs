//! Splitting the first coordinate's range across workers

use super::error::{SearchError, SearchResult};
use std::ops::RangeInclusive;

/// Contiguous slice of the first coordinate owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub worker: usize,
    /// First value (inclusive)
    pub start: i64,
    /// One past the last value
    pub end: i64,
}

impl Partition {
    pub fn len(&self) -> u64 {
        (i128::from(self.end) - i128::from(self.start)).max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn values(&self) -> std::ops::Range<i64> {
        self.start..self.end
    }
}

/// Split `range` into `workers` disjoint contiguous partitions
///
/// Widths differ by at most one; the first `len % workers` partitions take
/// the extra value. When there are more workers than values the trailing
/// partitions are empty.
///
/// A range ending at `i64::MAX` has no representable exclusive end and is
/// rejected with [`SearchError::InvalidConfig`].
pub fn partition_range(
    range: RangeInclusive<i64>,
    workers: usize,
) -> SearchResult<Vec<Partition>> {
    let (lo, hi) = (*range.start(), *range.end());
    if hi == i64::MAX {
        return Err(SearchError::InvalidConfig(format!(
            "range {}..={} cannot be partitioned",
            lo, hi
        )));
    }
    let len = (i128::from(hi) - i128::from(lo) + 1).max(0);
    let workers = workers.max(1) as i128;
    let base = len / workers;
    let extra = len % workers;

    let mut start = i128::from(lo);
    let mut partitions = Vec::with_capacity(workers as usize);
    for worker in 0..workers {
        let end = start + base + i128::from(worker < extra);
        // Bounded by hi + 1, which fits
        partitions.push(Partition {
            worker: worker as usize,
            start: start as i64,
            end: end as i64,
        });
        start = end;
    }
    Ok(partitions)
}
