//! Silent reporter
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::SearchReporter;
use crate::linalg::Vector3;
use crate::search::{Partition, SearchConfig, SearchError};

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSearchReporter;

impl SilentSearchReporter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchReporter for SilentSearchReporter {
    fn report_search_start(&self, _config: &SearchConfig, _partitions: &[Partition]) {}
    fn report_worker_exhausted(&self, _worker: usize) {}
    fn report_offset_found(&self, _worker: usize, _offset: Vector3) {}
    fn report_search_failed(&self, _error: &SearchError) {}
    fn report_character(&self, _index: usize, _character: Option<char>) {}
    fn report_message(&self, _message: &str) {}
}
