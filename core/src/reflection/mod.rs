//! Reflection and surface scattering models

use crate::geometry::*;
use crate::interaction::*;
use crate::pbrt::*;
use crate::spectrum::*;
use crate::traversal::TraversalCallback;
use std::fmt;
use std::sync::Arc;

mod bsdf_context;
mod bsdf_sample;
mod bxdf_type;
mod common;
mod fresnel;

// Re-export
pub use bsdf_context::*;
pub use bsdf_sample::*;
pub use bxdf_type::*;
pub use common::*;
pub use fresnel::*;

/// BSDF interface.
///
/// Directions `wo` and `si.wi` are expressed in the local space of the
/// interaction's shading frame. Inactive lanes return zero values and an
/// empty sample.
pub trait BSDF: fmt::Display {
    /// Sample an outgoing direction. Returns the sample and its weight
    /// `eval / pdf`, which already contains the cosine foreshortening. A
    /// black weight means the lane produced no usable sample.
    ///
    /// * `ctx`     - Query context.
    /// * `si`      - Surface interaction.
    /// * `sample1` - 1D sample used to pick a component.
    /// * `sample2` - 2D sample used to pick a direction.
    /// * `active`  - Whether the lane is active.
    fn sample(
        &self,
        ctx: &BSDFContext,
        si: &SurfaceInteraction,
        sample1: Float,
        sample2: &Point2f,
        active: bool,
    ) -> (BSDFSample, Spectrum);

    /// Evaluate the BSDF times the cosine foreshortening for a pair of
    /// directions.
    ///
    /// * `ctx`    - Query context.
    /// * `si`     - Surface interaction.
    /// * `wo`     - Outgoing direction.
    /// * `active` - Whether the lane is active.
    fn eval(
        &self,
        ctx: &BSDFContext,
        si: &SurfaceInteraction,
        wo: &Vector3f,
        active: bool,
    ) -> Spectrum;

    /// Returns the density `sample()` would produce `wo` with.
    ///
    /// * `ctx`    - Query context.
    /// * `si`     - Surface interaction.
    /// * `wo`     - Outgoing direction.
    /// * `active` - Whether the lane is active.
    fn pdf(&self, ctx: &BSDFContext, si: &SurfaceInteraction, wo: &Vector3f, active: bool)
        -> Float;

    /// Returns the aggregate reflectance at the surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn albedo(&self, si: &SurfaceInteraction, active: bool) -> Spectrum;

    /// Returns the world space frame the BSDF actually shades with.
    ///
    /// * `si`      - Surface interaction.
    /// * `_active` - Whether the lane is active.
    fn shading_frame(&self, si: &SurfaceInteraction, _active: bool) -> Frame {
        si.sh_frame
    }

    /// Returns the flags of each component.
    fn components(&self) -> &[BxDFType];

    /// Returns the union of the flags of all components.
    fn flags(&self) -> BxDFType {
        self.components()
            .iter()
            .fold(BxDFType::empty(), |acc, &t| acc | t)
    }

    /// Returns the number of components.
    fn component_count(&self) -> usize {
        self.components().len()
    }

    /// Returns the flags of a component or empty flags if `index` is out of
    /// range.
    ///
    /// * `index` - Component index.
    fn component_flags(&self, index: usize) -> BxDFType {
        self.components()
            .get(index)
            .copied()
            .unwrap_or_else(BxDFType::empty)
    }

    /// Lists named parameters and children.
    ///
    /// * `callback` - Receives the parameters and children.
    fn traverse(&self, _callback: &mut dyn TraversalCallback) {}
}

/// Atomic reference counted `BSDF`.
pub type ArcBSDF = Arc<dyn BSDF + Send + Sync>;
