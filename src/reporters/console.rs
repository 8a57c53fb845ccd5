//! Console reporter
//!
//! Prints search progress and the decoded message to stdout/stderr.

use super::SearchReporter;
use crate::linalg::Vector3;
use crate::search::{Aggregation, Partition, SearchConfig, SearchError};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSearchReporter {
    /// Also print every decoded position
    verbose: bool,
}

impl ConsoleSearchReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl SearchReporter for ConsoleSearchReporter {
    fn report_search_start(&self, config: &SearchConfig, partitions: &[Partition]) {
        let policy = match config.aggregation {
            Aggregation::FirstReport => "first report wins",
            Aggregation::AwaitAll => "await all workers",
        };
        println!(
            "Searching offsets in [{}, {}]^3 with {} workers ({})",
            -config.bound,
            config.bound,
            partitions.len(),
            policy
        );
        if self.verbose {
            for p in partitions {
                println!("  worker {}: x in [{}, {})", p.worker, p.start, p.end);
            }
        }
    }

    fn report_worker_exhausted(&self, worker: usize) {
        if self.verbose {
            println!("  worker {} finished without a match", worker);
        }
    }

    fn report_offset_found(&self, worker: usize, offset: Vector3) {
        println!("Found offset {} (worker {})", offset, worker);
    }

    fn report_search_failed(&self, error: &SearchError) {
        eprintln!("Search failed: {}", error);
    }

    fn report_character(&self, index: usize, character: Option<char>) {
        if !self.verbose {
            return;
        }
        match character {
            Some(c) => println!("  [{:>3}] {:?}", index, c),
            None => println!("  [{:>3}] skipped", index),
        }
    }

    fn report_message(&self, message: &str) {
        println!("Decrypted Message: {}", message);
    }
}
