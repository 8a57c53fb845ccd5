//! Progress and output reporting for offset recovery
//!
//! Decouples the search engines and the message decoder from how their
//! progress is shown to a user.

mod console;
mod silent;

pub use console::ConsoleSearchReporter;
pub use silent::SilentSearchReporter;

use crate::linalg::Vector3;
use crate::search::{Partition, SearchConfig, SearchError};

/// Trait for reporting search progress and decoding results
pub trait SearchReporter: Send + Sync {
    /// Report the start of a search with its partitioning
    fn report_search_start(&self, config: &SearchConfig, partitions: &[Partition]);

    /// Report that a worker scanned its whole partition without a match
    fn report_worker_exhausted(&self, worker: usize);

    /// Report the accepted offset and the worker that found it
    fn report_offset_found(&self, worker: usize, offset: Vector3);

    /// Report a search that ended without an offset
    fn report_search_failed(&self, error: &SearchError);

    /// Report one decoded position (`None` when it was skipped)
    fn report_character(&self, index: usize, character: Option<char>);

    /// Report the final decoded message
    fn report_message(&self, message: &str);
}
