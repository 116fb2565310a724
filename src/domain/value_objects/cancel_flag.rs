//! Operator interrupt flag shared between the signal handler and the executor

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set once by the interrupt handler; checked before every remote round trip.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Returns `true` if it had already been requested.
    pub fn cancel(&self) -> bool {
        self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
