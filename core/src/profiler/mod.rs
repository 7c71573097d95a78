//! Profiler

use itertools::Itertools;
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

mod prof;
mod profile_phase;
mod profile_sample;

use profile_sample::*;

pub use prof::*;
pub use profile_phase::*;

thread_local! {
    /// Current profiler state of this thread; one bit per active category.
    static PROFILER_STATE: Cell<u64> = Cell::new(0);
}

/// Indicates whether profiler is running or not.
static PROFILER_RUNNING: AtomicBool = AtomicBool::new(false);

/// Time when profiler was initialized.
static PROFILE_START_TIME: Mutex<Option<Instant>> = Mutex::new(None);

/// Hash size for profiler samples.
const PROFILE_HASH_SIZE: usize = 256;

/// Profiler samples.
static PROFILE_SAMPLES: [ProfileSample; PROFILE_HASH_SIZE] = {
    const EMPTY: ProfileSample = ProfileSample::new();
    [EMPTY; PROFILE_HASH_SIZE]
};

/// Returns the profiler state of the calling thread.
pub fn current_profiler_state() -> u64 {
    PROFILER_STATE.with(|s| s.get())
}

/// Start counting profile phases.
pub fn init_profiler() {
    if PROFILER_RUNNING.load(Ordering::SeqCst) {
        panic!("Profiler is already running!");
    }

    if let Ok(mut start) = PROFILE_START_TIME.lock() {
        *start = Some(Instant::now());
    }

    clear_profiler();

    PROFILER_RUNNING.store(true, Ordering::SeqCst);
    info!("Profiler started.");
}

/// Stop counting profile phases. Counts are kept until the next
/// `clear_profiler()` or `init_profiler()`.
pub fn cleanup_profiler() {
    if !PROFILER_RUNNING.load(Ordering::SeqCst) {
        panic!("Profiler is not running!");
    }

    PROFILER_RUNNING.store(false, Ordering::SeqCst);
    info!("Profiler stopped.");
}

/// Returns true if the profiler is counting profile phases.
pub fn is_profiler_running() -> bool {
    PROFILER_RUNNING.load(Ordering::SeqCst)
}

/// Clear profiler.
pub fn clear_profiler() {
    for ps in PROFILE_SAMPLES.iter() {
        ps.clear();
    }
}

/// Count one entry into a profiler state.
///
/// * `profiler_state` - The profiler state.
fn record_profile_sample(profiler_state: u64) {
    let mut hasher = DefaultHasher::new();
    profiler_state.hash(&mut hasher);
    let mut h = hasher.finish() as usize % PROFILE_HASH_SIZE;

    for _ in 0..PROFILE_HASH_SIZE {
        let slot = &PROFILE_SAMPLES[h];
        match slot.profiler_state.compare_exchange(
            0,
            profiler_state,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(_) => {
                slot.count.fetch_add(1, Ordering::SeqCst);
                return;
            }
            Err(s) if s == profiler_state => {
                slot.count.fetch_add(1, Ordering::SeqCst);
                return;
            }
            Err(_) => {
                // Wrap around to the start if we hit the end.
                h = (h + 1) % PROFILE_HASH_SIZE;
            }
        }
    }

    error!("Profiler hash table filled up!");
}

/// Returns the flattened profiler counts, one entry per innermost category,
/// sorted from most to least frequent.
pub fn profiler_results() -> Vec<(String, u64)> {
    let mut flat_results: HashMap<&'static str, u64> = HashMap::new();

    for ps in PROFILE_SAMPLES.iter() {
        let count = ps.count.load(Ordering::SeqCst);
        let state = ps.profiler_state.load(Ordering::SeqCst);
        if count == 0 || state == 0 {
            continue;
        }

        let name_index = 63 - state.leading_zeros() as usize;
        if name_index < NUM_PROF_CATEGORIES {
            *flat_results.entry(PROF_NAMES[name_index]).or_insert(0) += count;
        } else {
            error!(
                "Problem getting profile category. profiler_state = {}, name_index = {}",
                state, name_index
            );
        }
    }

    flat_results
        .into_iter()
        .sorted_by(|(na, a), (nb, b)| Ord::cmp(b, a).then_with(|| na.cmp(nb)))
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Convert a share of the profiled time to a human readable `String`.
///
/// * `pct` - Percent value in [0, 100].
/// * `now` - Instant the report is generated at.
fn time_string(pct: f32, now: Instant) -> String {
    let start = PROFILE_START_TIME
        .lock()
        .ok()
        .and_then(|s| *s)
        .unwrap_or(now);
    let pct = pct / 100.0; // remap passed value to to [0,1]
    let ns = (now - start).as_nanos();
    // milliseconds for this category
    let mut ms = (ns as f32 * pct / 1000000.0) as u64;
    // Peel off hours, minutes, seconds, and remaining milliseconds.
    let h = ms / (3600 * 1000);
    ms -= h * 3600 * 1000;
    let m = ms / (60 * 1000);
    ms -= m * (60 * 1000);
    let s = ms / 1000;
    ms -= s * 1000;
    ms /= 10; // only printing 2 digits of fractional seconds
    format!("{:4}:{:02}:{:02}.{:02}", h, m, s, ms)
}

/// Log profiler results.
pub fn report_profiler_results() {
    let now = Instant::now();

    let mut overall_count = 0_u64;
    let mut used = 0_usize;
    let mut hierarchical_results: HashMap<String, u64> = HashMap::new();

    for ps in PROFILE_SAMPLES.iter() {
        let count = ps.count.load(Ordering::SeqCst);
        let state = ps.profiler_state.load(Ordering::SeqCst);
        if count == 0 {
            continue;
        }
        overall_count += count;
        used += 1;

        let mut s = String::new();
        for (b, name) in PROF_NAMES.iter().enumerate() {
            if state & (1_u64 << b) > 0 {
                if !s.is_empty() {
                    // contribute to the parents...
                    *hierarchical_results.entry(s.clone()).or_insert(0) += count;
                    s.push('/');
                }
                s.push_str(name);
            }
        }
        *hierarchical_results.entry(s).or_insert(0) += count;
    }

    if overall_count == 0 {
        info!("No profile samples recorded.");
        return;
    }

    info!(
        "Used: {} / {} entries in profiler hash table",
        used, PROFILE_HASH_SIZE
    );

    info!("  Profile");
    for (k, v) in hierarchical_results.into_iter().sorted() {
        let pct = (100.0 * v as f32) / overall_count as f32;
        let mut indent = 4_usize;
        let mut slash_index = 0_usize;
        if let Some(idx) = k.rfind('/') {
            indent += 2 * k.matches('/').count();
            slash_index = idx + 1;
        }

        let to_print = &k[slash_index..];
        let indent_rt = 67_usize.saturating_sub(to_print.len() + indent);
        info!(
            "{pad:>left$}{s}{pad:>right$} {p:5.2}% ({t})",
            pad = "",
            left = indent,
            s = to_print,
            right = indent_rt,
            p = pct,
            t = time_string(pct, now)
        );
    }

    info!("  Profile (flattened)");
    for (k, v) in profiler_results().into_iter() {
        let pct = (100.0 * v as f32) / overall_count as f32;
        let indent = 4_usize;
        let indent_rt = 67_usize.saturating_sub(k.len() + indent);
        info!(
            "{pad:>left$}{s}{pad:>right$} {p:5.2}% ({t})",
            pad = "",
            left = indent,
            s = k,
            right = indent_rt,
            p = pct,
            t = time_string(pct, now)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_innermost_categories_while_running() {
        init_profiler();
        {
            let _eval = ProfilePhase::new(Prof::BSDFEvaluate);
            for _ in 0..3 {
                let _tex = ProfilePhase::new(Prof::TextureEvaluate);
            }
        }
        cleanup_profiler();

        // Not counted once stopped.
        let _ignored = ProfilePhase::new(Prof::NormalMapFrame);

        let results = profiler_results();
        let count = |name: &str| {
            results
                .iter()
                .find(|(n, _)| n == name)
                .map_or(0, |(_, c)| *c)
        };
        // Mixed states are credited to the highest category bit.
        assert!(count(Prof::BSDFEvaluate.name()) >= 4);
        assert_eq!(count(Prof::NormalMapFrame.name()), 0);

        report_profiler_results();
        clear_profiler();
        assert!(profiler_results().is_empty());
    }
}
