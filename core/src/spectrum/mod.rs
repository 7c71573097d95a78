//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Textures and BSDFs exchange tristimulus RGB values.
pub type Spectrum = RGBSpectrum;
