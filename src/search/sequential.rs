//! Single-threaded reference search

use super::{
    partition_range, scan, KnownPair, ScanOutcome, SearchConfig, SearchError, SearchResult,
    StopReason,
};
use crate::linalg::{Matrix3, Vector3};
use crate::reporters::{SearchReporter, SilentSearchReporter};
use log::{info, warn};
use std::time::Instant;

/// Scan the whole cube in `(x, y, z)` increasing order
///
/// Returns the first accepted candidate. Deterministic for identical input.
pub fn find_offset_sequential(
    inverse: &Matrix3,
    pairs: &[KnownPair],
    config: &SearchConfig,
) -> SearchResult<Vector3> {
    find_offset_sequential_with_reporter(inverse, pairs, config, &SilentSearchReporter)
}

/// Sequential search reporting as a single worker that owns the whole axis
pub fn find_offset_sequential_with_reporter<R: SearchReporter + ?Sized>(
    inverse: &Matrix3,
    pairs: &[KnownPair],
    config: &SearchConfig,
    reporter: &R,
) -> SearchResult<Vector3> {
    config.validate()?;
    let (lo, hi) = config.axis();
    info!(
        "Sequential offset search over [{}, {}]^3 with {} known characters",
        lo,
        hi,
        pairs.len()
    );
    reporter.report_search_start(config, &partition_range(lo..=hi, 1)?);

    let deadline = config.deadline.map(|budget| Instant::now() + budget);
    let outcome = scan(inverse, pairs, lo..=hi, (lo, hi), || {
        deadline
            .filter(|&at| Instant::now() >= at)
            .map(|_| StopReason::TimedOut)
    });

    let result = match outcome {
        ScanOutcome::Found(offset) => {
            info!("Found offset: {}", offset);
            Ok(offset)
        }
        ScanOutcome::Exhausted => {
            warn!("Sequential search exhausted the domain without a match");
            reporter.report_worker_exhausted(0);
            Err(SearchError::NotFound)
        }
        ScanOutcome::Stopped(reason) => {
            warn!("Sequential search stopped: {:?}", reason);
            Err(reason.into())
        }
    };

    match &result {
        Ok(offset) => reporter.report_offset_found(0, *offset),
        Err(e) => reporter.report_search_failed(e),
    }
    result
}
