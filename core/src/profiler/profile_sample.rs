//! Profile Sample

use std::sync::atomic::{AtomicU64, Ordering};

/// A slot in the profiler hash table counting one profiler state.
#[derive(Debug)]
pub struct ProfileSample {
    pub(super) profiler_state: AtomicU64,
    pub(super) count: AtomicU64,
}

impl ProfileSample {
    /// Returns an empty slot.
    pub const fn new() -> Self {
        Self {
            profiler_state: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Empties the slot.
    pub(super) fn clear(&self) {
        self.profiler_state.store(0, Ordering::SeqCst);
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for ProfileSample {
    fn default() -> Self {
        Self::new()
    }
}
