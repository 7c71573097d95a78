//! Fresnel Mix Texture

use super::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::reflection::{cos_theta, fresnel_dielectric_cos};
use shade_core::spectrum::*;
use shade_core::traversal::*;
use std::fmt;

/// Implements a texture that blends two textures by the dielectric Fresnel
/// reflectance seen along the incident direction.
///
/// Only color evaluation is supported. Scalar evaluation returns 0 and the
/// gradient is zero.
#[derive(Clone)]
pub struct FresnelTexture {
    /// Texture weighted by the transmitted fraction.
    color0: ArcTexture,

    /// Texture weighted by the reflected fraction.
    color1: ArcTexture,

    /// Relative index of refraction.
    eta: Float,
}

impl FresnelTexture {
    /// Create a new `FresnelTexture`.
    ///
    /// * `color0` - Texture weighted by the transmitted fraction.
    /// * `color1` - Texture weighted by the reflected fraction.
    /// * `eta`    - Relative index of refraction.
    pub fn new(color0: ArcTexture, color1: ArcTexture, eta: Float) -> Self {
        Self {
            color0,
            color1,
            eta,
        }
    }
}

impl Texture for FresnelTexture {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        if !active {
            return Spectrum::ZERO;
        }

        let f = fresnel_dielectric_cos(cos_theta(&si.wi), self.eta);
        let c0 = self.color0.evaluate(si, active);
        let c1 = self.color1.evaluate(si, active);
        c0 * (1.0 - f) + c1 * f
    }

    /// Scalar evaluation is not supported; always 0.
    ///
    /// * `_si`     - Surface interaction.
    /// * `_active` - Whether the lane is active.
    fn evaluate_float(&self, _si: &SurfaceInteraction, _active: bool) -> Float {
        0.0
    }

    /// Returns the unweighted average of the two children's means.
    fn mean(&self) -> Float {
        0.5 * (self.color0.mean() + self.color1.mean())
    }

    fn is_spatially_varying(&self) -> bool {
        true
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_parameter("ior", self.eta);
        callback.put_object("color0", SceneObject::Texture(&self.color0));
        callback.put_object("color1", SceneObject::Texture(&self.color1));
    }
}

impl From<&TextureParams> for FresnelTexture {
    /// Create a `FresnelTexture` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let color0 = tp.get_texture_or_else("color0", Spectrum::ZERO, ConstantTexture::arc);
        let color1 = tp.get_texture_or_else("color1", Spectrum::ONE, ConstantTexture::arc);
        let eta = tp.find_float("ior", 1.5);

        let tex = Self::new(color0, color1, eta);
        debug!("Created {}", tex);
        tex
    }
}

impl fmt::Display for FresnelTexture {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FresnelTexture[\n  color0 = {},\n  color1 = {},\n  ior = {}\n]",
            indent(&self.color0),
            indent(&self.color1),
            self.eta
        )
    }
}
