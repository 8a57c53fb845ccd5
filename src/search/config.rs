//! Configuration for offset search operations

use super::error::{SearchError, SearchResult};
use std::time::Duration;

/// Default half-width of the search cube on every axis
pub const DEFAULT_BOUND: i64 = 10_000;
/// Default number of search workers
pub const DEFAULT_WORKERS: usize = 8;
/// Largest bound whose axis width `2 * bound + 1` still fits an `i64`
pub const MAX_BOUND: i64 = (i64::MAX - 1) / 2;

/// How the coordinator turns worker reports into a single outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// First report of any kind decides, so an exhausted worker can end the
    /// search with `NotFound` while another worker would still have matched
    FirstReport,
    /// A match still wins immediately, but `NotFound` is only returned once
    /// every worker has exhausted its range
    #[default]
    AwaitAll,
}

/// Configuration for the exhaustive offset search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Each coordinate ranges over `-bound..=bound`
    pub bound: i64,
    /// Number of concurrent workers (independent of available cores)
    pub workers: usize,
    pub aggregation: Aggregation,
    /// Optional wall-clock budget, polled once per first-coordinate value
    pub deadline: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            workers: DEFAULT_WORKERS,
            aggregation: Aggregation::default(),
            deadline: None,
        }
    }
}

impl SearchConfig {
    pub fn new(bound: i64, workers: usize) -> Self {
        Self {
            bound,
            workers,
            ..Self::default()
        }
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let bound = matches
            .get_one::<String>("bound")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BOUND);

        let workers = matches
            .get_one::<String>("workers")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_WORKERS);

        let aggregation = if matches.get_flag("race") {
            Aggregation::FirstReport
        } else {
            Aggregation::AwaitAll
        };

        let deadline = matches
            .get_one::<String>("timeout")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs);

        Self {
            bound,
            workers,
            aggregation,
            deadline,
        }
    }

    /// Inclusive range of every coordinate
    pub fn axis(&self) -> (i64, i64) {
        (-self.bound, self.bound)
    }

    /// Number of integer values on one axis
    pub fn axis_width(&self) -> u64 {
        u64::try_from(self.bound).map_or(0, |bound| 2 * bound + 1)
    }

    pub fn validate(&self) -> SearchResult<()> {
        if self.workers == 0 {
            return Err(SearchError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.bound < 0 {
            return Err(SearchError::InvalidConfig(format!(
                "bound must be non-negative, got {}",
                self.bound
            )));
        }
        if self.bound > MAX_BOUND {
            return Err(SearchError::InvalidConfig(format!(
                "bound must be at most {}, got {}",
                MAX_BOUND, self.bound
            )));
        }
        Ok(())
    }
}
