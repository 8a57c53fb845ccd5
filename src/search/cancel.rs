//! One-shot cancellation signal shared between the coordinator and workers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable one-shot termination flag
///
/// Once raised it stays raised. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    raised: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Returns true if this call raised it first.
    pub fn cancel(&self) -> bool {
        self.raised
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
