//! BSDF Sample

use super::*;

/// Stores the outcome of sampling a BSDF.
#[derive(Copy, Clone, Debug)]
pub struct BSDFSample {
    /// The sampled outgoing direction in the local space of the shading frame.
    pub wo: Vector3f,

    /// The value of the PDF.
    pub pdf: Float,

    /// Relative index of refraction along the sampled direction.
    pub eta: Float,

    /// The type of the sampled component.
    pub sampled_type: BxDFType,

    /// Index of the sampled component.
    pub sampled_component: usize,
}

impl BSDFSample {
    /// Create a new `BSDFSample`.
    ///
    /// * `wo`                - The sampled outgoing direction.
    /// * `pdf`               - The value of the PDF.
    /// * `eta`               - Relative index of refraction.
    /// * `sampled_type`      - The type of the sampled component.
    /// * `sampled_component` - Index of the sampled component.
    pub fn new(
        wo: Vector3f,
        pdf: Float,
        eta: Float,
        sampled_type: BxDFType,
        sampled_component: usize,
    ) -> Self {
        Self {
            wo,
            pdf,
            eta,
            sampled_type,
            sampled_component,
        }
    }
}

impl Default for BSDFSample {
    /// Returns an empty sample with a zero PDF.
    fn default() -> Self {
        Self::new(Vector3f::zero(), 0.0, 1.0, BxDFType::empty(), 0)
    }
}

impl fmt::Display for BSDFSample {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BSDFSample[ wo: {}, pdf: {}, eta: {}, sampled_type: {:?}, sampled_component: {} ]",
            self.wo, self.pdf, self.eta, self.sampled_type, self.sampled_component
        )
    }
}
