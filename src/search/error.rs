//! Error types for offset search operations

use thiserror::Error;

/// Errors that can end an offset search
#[derive(Debug, Error)]
pub enum SearchError {
    /// The whole domain was scanned without an accepted candidate
    #[error("no matching offset found")]
    NotFound,

    /// The configured deadline passed before a candidate was accepted
    #[error("offset search timed out")]
    TimedOut,

    /// The caller cancelled the search
    #[error("offset search was cancelled")]
    Cancelled,

    /// Fewer ciphertext samples than expected characters
    #[error("{expected} expected characters but only {available} ciphertext samples")]
    MissingSamples { expected: usize, available: usize },

    /// Search configuration rejected before starting
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Type alias for search results
pub type SearchResult<T> = Result<T, SearchError>;
