//! Profiler Categories

/// Profiling categories of the shading graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prof {
    TextureEvaluate = 0,
    BSDFEvaluate,
    BSDFSample,
    BSDFPdf,
    NormalMapFrame,
}

/// Number of profiling categories.
pub const NUM_PROF_CATEGORIES: usize = 5;

/// Display names of the profiling categories, indexed by category.
pub const PROF_NAMES: [&str; NUM_PROF_CATEGORIES] = [
    "Texture evaluation",
    "BSDF evaluation",
    "BSDF sampling",
    "BSDF PDF",
    "Normal map frame",
];

impl Prof {
    /// Returns the category's bit in the profiler state.
    pub fn to_bits(self) -> u64 {
        1_u64 << (self as u64)
    }

    /// Returns the category's display name.
    pub fn name(self) -> &'static str {
        PROF_NAMES[self as usize]
    }
}
