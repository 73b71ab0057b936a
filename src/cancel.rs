use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Caller-side stop signal for long searches.
///
/// The engine never blocks on I/O, so cancellation is a plain flag checked
/// once per visited node. A search that observes the flag returns
/// [PathError::Cancelled](crate::PathError::Cancelled) instead of partial
/// results. Cloning shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
