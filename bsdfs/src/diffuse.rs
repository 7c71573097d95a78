//! Diffuse BSDF

use super::*;
use shade_core::geometry::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::sampling::*;
use shade_core::spectrum::*;
use shade_core::traversal::*;
use shade_textures::ConstantTexture;
use std::fmt;

/// Implements the Lambertian model for the front side of a surface.
#[derive(Clone)]
pub struct DiffuseBSDF {
    /// Spectral diffuse reflectance.
    reflectance: ArcTexture,

    /// Flags of the single diffuse reflection component.
    components: [BxDFType; 1],
}

impl DiffuseBSDF {
    /// Create a new `DiffuseBSDF`.
    ///
    /// * `reflectance` - Spectral diffuse reflectance.
    pub fn new(reflectance: ArcTexture) -> Self {
        Self {
            reflectance,
            components: [BxDFType::REFLECTION | BxDFType::DIFFUSE],
        }
    }

    /// Returns the non-negative reflectance at the surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn reflectance(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        self.reflectance.evaluate(si, active).clamp(0.0, INFINITY)
    }

    /// Returns true if the query reaches the diffuse component from the front
    /// side of the surface.
    ///
    /// * `ctx` - Query context.
    /// * `si`  - Surface interaction.
    fn front_side_enabled(&self, ctx: &BSDFContext, si: &SurfaceInteraction) -> bool {
        ctx.is_enabled(self.components[0], 0) && cos_theta(&si.wi) > 0.0
    }
}

impl BSDF for DiffuseBSDF {
    fn sample(
        &self,
        ctx: &BSDFContext,
        si: &SurfaceInteraction,
        _sample1: Float,
        sample2: &Point2f,
        active: bool,
    ) -> (BSDFSample, Spectrum) {
        if !active || !self.front_side_enabled(ctx, si) {
            return (BSDFSample::default(), Spectrum::ZERO);
        }

        let wo = cosine_sample_hemisphere(sample2);
        let pdf = cosine_hemisphere_pdf(cos_theta(&wo));
        if pdf <= 0.0 {
            return (BSDFSample::default(), Spectrum::ZERO);
        }

        let bs = BSDFSample::new(wo, pdf, 1.0, self.components[0], 0);

        // f * cos / pdf reduces to the reflectance.
        (bs, self.reflectance(si, active))
    }

    fn eval(
        &self,
        ctx: &BSDFContext,
        si: &SurfaceInteraction,
        wo: &Vector3f,
        active: bool,
    ) -> Spectrum {
        if !active || !self.front_side_enabled(ctx, si) || cos_theta(wo) <= 0.0 {
            return Spectrum::ZERO;
        }
        self.reflectance(si, active) * (INV_PI * cos_theta(wo))
    }

    fn pdf(&self, ctx: &BSDFContext, si: &SurfaceInteraction, wo: &Vector3f, active: bool) -> Float {
        if !active || !self.front_side_enabled(ctx, si) || cos_theta(wo) <= 0.0 {
            return 0.0;
        }
        cosine_hemisphere_pdf(cos_theta(wo))
    }

    fn albedo(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        if !active {
            return Spectrum::ZERO;
        }
        self.reflectance(si, active)
    }

    fn components(&self) -> &[BxDFType] {
        &self.components
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_object("reflectance", SceneObject::Texture(&self.reflectance));
    }
}

impl From<&TextureParams> for DiffuseBSDF {
    /// Create a `DiffuseBSDF` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let reflectance =
            tp.get_texture_or_else("reflectance", Spectrum::new(0.5), ConstantTexture::arc);

        let bsdf = Self::new(reflectance);
        debug!("Created {}", bsdf);
        bsdf
    }
}

impl fmt::Display for DiffuseBSDF {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiffuseBSDF[\n  reflectance = {}\n]",
            indent(&self.reflectance)
        )
    }
}
