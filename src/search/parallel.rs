//! Parallel exhaustive search
//!
//! The first coordinate's range is split into one partition per worker. Each
//! worker runs on its own thread of a dedicated rayon pool and reports once
//! over a shared channel. A winning worker raises a per-search stop token so
//! its siblings stop at their next first-coordinate value. The caller's
//! cancellation token is only ever read.

use super::{
    partition_range, scan, Aggregation, CancellationToken, KnownPair, Partition, ScanOutcome,
    SearchConfig, SearchError, SearchResult, StopReason,
};
use crate::linalg::{Matrix3, Vector3};
use crate::reporters::{SearchReporter, SilentSearchReporter};
use log::{debug, info, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

/// Message sent by a worker when it stops scanning
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkerReport {
    Found { worker: usize, offset: Vector3 },
    Exhausted { worker: usize },
    Stopped { worker: usize, reason: StopReason },
}

/// Parallel search with the default policy and no progress output
pub fn find_offset_parallel(
    inverse: &Matrix3,
    pairs: &[KnownPair],
    config: &SearchConfig,
) -> SearchResult<Vector3> {
    find_offset_parallel_with_reporter(
        inverse,
        pairs,
        config,
        &CancellationToken::new(),
        &SilentSearchReporter,
    )
}

/// Parallel search with an external cancellation token and a reporter
///
/// Raising `cancel` from another thread ends the search with
/// [`SearchError::Cancelled`] once a worker observes it. The search never
/// raises `cancel` itself, so one token can drive several searches.
pub fn find_offset_parallel_with_reporter<R: SearchReporter + ?Sized>(
    inverse: &Matrix3,
    pairs: &[KnownPair],
    config: &SearchConfig,
    cancel: &CancellationToken,
    reporter: &R,
) -> SearchResult<Vector3> {
    config.validate()?;
    let (lo, hi) = config.axis();
    let partitions = partition_range(lo..=hi, config.workers)?;
    info!(
        "Parallel offset search over [{}, {}]^3: {} workers, {:?} aggregation",
        lo, hi, config.workers, config.aggregation
    );
    reporter.report_search_start(config, &partitions);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("offset-search-{}", i))
        .build()?;

    let deadline = config.deadline.map(|budget| Instant::now() + budget);
    let inverse = *inverse;
    let stop = CancellationToken::new();

    let outcome = pool.in_place_scope(|scope| {
        let (tx, rx) = mpsc::channel();
        for partition in partitions.iter().copied() {
            let tx = tx.clone();
            let signals = StopSignals {
                stop: stop.clone(),
                cancel: cancel.clone(),
                deadline,
            };
            scope.spawn(move |_| run_worker(&inverse, pairs, partition, (lo, hi), &signals, &tx));
        }
        drop(tx);

        let outcome = aggregate(&rx, config.workers, config.aggregation, reporter);
        // Stop stragglers; the scope joins them after this closure returns
        stop.cancel();
        outcome
    });

    match &outcome {
        Ok((worker, offset)) => {
            info!("Found offset: {} (worker {})", offset, worker);
            reporter.report_offset_found(*worker, *offset);
        }
        Err(e) => {
            warn!("Parallel offset search failed: {}", e);
            reporter.report_search_failed(e);
        }
    }
    outcome.map(|(_, offset)| offset)
}

/// What a worker polls before each first-coordinate value
struct StopSignals {
    /// Raised once this search has an outcome
    stop: CancellationToken,
    /// Owned by the caller, never raised here
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl StopSignals {
    fn poll(&self) -> Option<StopReason> {
        if self.stop.is_cancelled() || self.cancel.is_cancelled() {
            Some(StopReason::Cancelled)
        } else if self.deadline.is_some_and(|at| Instant::now() >= at) {
            Some(StopReason::TimedOut)
        } else {
            None
        }
    }
}

fn run_worker(
    inverse: &Matrix3,
    pairs: &[KnownPair],
    partition: Partition,
    axis: (i64, i64),
    signals: &StopSignals,
    tx: &Sender<WorkerReport>,
) {
    let worker = partition.worker;
    debug!("worker {} scanning x in {:?}", worker, partition.values());

    let outcome = scan(inverse, pairs, partition.values(), axis, || signals.poll());

    let report = match outcome {
        ScanOutcome::Found(offset) => WorkerReport::Found { worker, offset },
        ScanOutcome::Exhausted => {
            debug!("worker {} range completed without success", worker);
            WorkerReport::Exhausted { worker }
        }
        ScanOutcome::Stopped(reason) => {
            debug!("worker {} stopped: {:?}", worker, reason);
            WorkerReport::Stopped { worker, reason }
        }
    };

    // The coordinator may already have decided and dropped the receiver
    let _ = tx.send(report);
    if matches!(report, WorkerReport::Found { .. }) {
        signals.stop.cancel();
    }
}

/// Turn worker reports into one outcome according to `policy`
///
/// Under [`Aggregation::FirstReport`] the first report decides, so an early
/// `Exhausted` yields `NotFound` even if a later report would have been a
/// match. Under [`Aggregation::AwaitAll`] `NotFound` needs every worker to
/// report exhaustion. A `Stopped` report ends the search under both policies.
pub(crate) fn aggregate<R: SearchReporter + ?Sized>(
    reports: &Receiver<WorkerReport>,
    workers: usize,
    policy: Aggregation,
    reporter: &R,
) -> SearchResult<(usize, Vector3)> {
    let mut exhausted = 0;
    while let Ok(report) = reports.recv() {
        match report {
            WorkerReport::Found { worker, offset } => return Ok((worker, offset)),
            WorkerReport::Exhausted { worker } => {
                reporter.report_worker_exhausted(worker);
                exhausted += 1;
                if policy == Aggregation::FirstReport || exhausted >= workers {
                    return Err(SearchError::NotFound);
                }
            }
            WorkerReport::Stopped { reason, .. } => return Err(reason.into()),
        }
    }
    // Every sender is gone without a decisive report
    Err(SearchError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(reports: &[WorkerReport]) -> Receiver<WorkerReport> {
        let (tx, rx) = mpsc::channel();
        for r in reports {
            tx.send(*r).unwrap();
        }
        rx
    }

    const HIT: Vector3 = Vector3::new(3.0, -2.0, 1.0);

    #[test]
    fn test_first_report_policy_reproduces_race() {
        let rx = feed(&[
            WorkerReport::Exhausted { worker: 0 },
            WorkerReport::Found {
                worker: 1,
                offset: HIT,
            },
        ]);
        let result = aggregate(&rx, 2, Aggregation::FirstReport, &SilentSearchReporter);
        assert!(matches!(result, Err(SearchError::NotFound)));
    }

    #[test]
    fn test_await_all_policy_waits_past_exhaustion() {
        let rx = feed(&[
            WorkerReport::Exhausted { worker: 0 },
            WorkerReport::Found {
                worker: 1,
                offset: HIT,
            },
        ]);
        let result = aggregate(&rx, 2, Aggregation::AwaitAll, &SilentSearchReporter);
        assert_eq!(result.unwrap(), (1, HIT));
    }

    #[test]
    fn test_await_all_not_found_after_every_worker() {
        let rx = feed(&[
            WorkerReport::Exhausted { worker: 1 },
            WorkerReport::Exhausted { worker: 0 },
            WorkerReport::Exhausted { worker: 2 },
        ]);
        let result = aggregate(&rx, 3, Aggregation::AwaitAll, &SilentSearchReporter);
        assert!(matches!(result, Err(SearchError::NotFound)));
    }

    #[test]
    fn test_stopped_report_maps_reason() {
        let rx = feed(&[WorkerReport::Stopped {
            worker: 0,
            reason: StopReason::TimedOut,
        }]);
        let result = aggregate(&rx, 4, Aggregation::AwaitAll, &SilentSearchReporter);
        assert!(matches!(result, Err(SearchError::TimedOut)));
    }

    #[test]
    fn test_disconnected_channel_is_not_found() {
        let rx = feed(&[WorkerReport::Exhausted { worker: 0 }]);
        let result = aggregate(&rx, 2, Aggregation::AwaitAll, &SilentSearchReporter);
        assert!(matches!(result, Err(SearchError::NotFound)));
    }
}
