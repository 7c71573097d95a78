//! Profile Phase

use super::*;

/// Marks the current thread as being inside a profiling category until
/// dropped. Nested phases of the same category leave the state untouched.
pub struct ProfilePhase {
    reset: bool,
    category_bit: u64,
}

impl ProfilePhase {
    /// Enter a profiling category.
    ///
    /// * `p` - The category.
    pub fn new(p: Prof) -> Self {
        let category_bit = p.to_bits();

        let (reset, state) = PROFILER_STATE.with(|s| {
            let state = s.get();
            s.set(state | category_bit);
            (state & category_bit == 0, state | category_bit)
        });

        if reset && PROFILER_RUNNING.load(Ordering::Relaxed) {
            record_profile_sample(state);
        }

        Self {
            reset,
            category_bit,
        }
    }
}

impl Drop for ProfilePhase {
    fn drop(&mut self) {
        if self.reset {
            PROFILER_STATE.with(|s| s.set(s.get() & !self.category_bit));
        }
    }
}
