//! Offset search
//!
//! Recovers the integer offset `r` of the affine scheme
//! `ciphertext = forward * plaintext + r` from a few ciphertext samples whose
//! plaintext characters are known. Candidates are enumerated over a cube of
//! integers and accepted only when every known sample decrypts to its
//! expected character.

mod cancel;
mod config;
mod error;
pub mod narrow;
mod parallel;
mod partition;
mod sequential;

pub use cancel::CancellationToken;
pub use config::{Aggregation, SearchConfig, DEFAULT_BOUND, DEFAULT_WORKERS, MAX_BOUND};
pub use error::{SearchError, SearchResult};
pub use parallel::{find_offset_parallel, find_offset_parallel_with_reporter, WorkerReport};
pub use partition::{partition_range, Partition};
pub use sequential::{find_offset_sequential, find_offset_sequential_with_reporter};

use crate::decrypt::decrypt_with_offset;
use crate::linalg::{Matrix3, Vector3};

/// A ciphertext sample paired with the character it is known to decrypt to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownPair {
    pub sample: Vector3,
    pub expected: char,
}

/// Align `expected` with the first `expected.len()` samples
pub fn known_pairs(samples: &[Vector3], expected: &[char]) -> SearchResult<Vec<KnownPair>> {
    if samples.len() < expected.len() {
        return Err(SearchError::MissingSamples {
            expected: expected.len(),
            available: samples.len(),
        });
    }
    Ok(samples
        .iter()
        .zip(expected)
        .map(|(&sample, &expected)| KnownPair { sample, expected })
        .collect())
}

/// True iff `offset` decrypts every pair to its expected character
///
/// Stops at the first mismatching pair.
#[inline]
pub fn check_offset(inverse: &Matrix3, pairs: &[KnownPair], offset: Vector3) -> bool {
    pairs
        .iter()
        .all(|pair| decrypt_with_offset(pair.sample, inverse, offset) == Some(pair.expected))
}

/// Scan `x_values` against the full `(y, z)` square in increasing order
///
/// `should_stop` is polled before each `x` and may end the scan early.
pub(crate) fn scan<I, F>(
    inverse: &Matrix3,
    pairs: &[KnownPair],
    x_values: I,
    axis: (i64, i64),
    mut should_stop: F,
) -> ScanOutcome
where
    I: IntoIterator<Item = i64>,
    F: FnMut() -> Option<StopReason>,
{
    let (lo, hi) = axis;
    for x in x_values {
        if let Some(reason) = should_stop() {
            return ScanOutcome::Stopped(reason);
        }
        for y in lo..=hi {
            for z in lo..=hi {
                let candidate = Vector3::from_ints(x, y, z);
                if check_offset(inverse, pairs, candidate) {
                    return ScanOutcome::Found(candidate);
                }
            }
        }
    }
    ScanOutcome::Exhausted
}

/// Why a scan ended before exhausting its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    TimedOut,
}

impl From<StopReason> for SearchError {
    fn from(reason: StopReason) -> Self {
        match reason {
            StopReason::Cancelled => SearchError::Cancelled,
            StopReason::TimedOut => SearchError::TimedOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScanOutcome {
    Found(Vector3),
    Exhausted,
    Stopped(StopReason),
}
