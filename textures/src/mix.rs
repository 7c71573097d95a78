//! Mix Texture

use super::*;
use shade_core::geometry::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::spectrum::*;
use shade_core::traversal::*;
use std::fmt;

/// Implements a texture that linearly interpolates between two textures with
/// a third texture. The weight is clamped to [0, 1] before blending.
#[derive(Clone)]
pub struct MixTexture {
    /// Texture used where the weight is 0.
    color0: ArcTexture,

    /// Texture used where the weight is 1.
    color1: ArcTexture,

    /// Blend weight.
    weight: ArcTexture,
}

impl MixTexture {
    /// Create a new `MixTexture`.
    ///
    /// * `color0` - Texture used where the weight is 0.
    /// * `color1` - Texture used where the weight is 1.
    /// * `weight` - Blend weight.
    pub fn new(color0: ArcTexture, color1: ArcTexture, weight: ArcTexture) -> Self {
        Self {
            color0,
            color1,
            weight,
        }
    }

    /// Returns the raw weight and the weight clamped to [0, 1].
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn weight(&self, si: &SurfaceInteraction, active: bool) -> (Float, Float) {
        let w = self.weight.evaluate_float(si, active);
        (w, clamp(w, 0.0, 1.0))
    }
}

impl Texture for MixTexture {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        if !active {
            return Spectrum::ZERO;
        }

        let (_, w) = self.weight(si, active);
        let c0 = self.color0.evaluate(si, active);
        let c1 = self.color1.evaluate(si, active);
        c0 * (1.0 - w) + c1 * w
    }

    /// Evaluate the texture as a scalar at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_float(&self, si: &SurfaceInteraction, active: bool) -> Float {
        if !active {
            return 0.0;
        }

        let (_, w) = self.weight(si, active);
        let c0 = self.color0.evaluate_float(si, active);
        let c1 = self.color1.evaluate_float(si, active);
        c0 * (1.0 - w) + c1 * w
    }

    /// Evaluate the gradient of the scalar blend using the product rule. The
    /// weight does not contribute where it is clamped.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_gradient(&self, si: &SurfaceInteraction, active: bool) -> Vector2f {
        if !active {
            return Vector2f::zero();
        }

        let (raw, w) = self.weight(si, active);
        let g0 = self.color0.evaluate_gradient(si, active);
        let g1 = self.color1.evaluate_gradient(si, active);
        let blended = g0 * (1.0 - w) + g1 * w;

        if raw > 0.0 && raw < 1.0 {
            let c0 = self.color0.evaluate_float(si, active);
            let c1 = self.color1.evaluate_float(si, active);
            blended + self.weight.evaluate_gradient(si, active) * (c1 - c0)
        } else {
            blended
        }
    }

    /// Returns the unweighted average of the two children's means.
    fn mean(&self) -> Float {
        0.5 * (self.color0.mean() + self.color1.mean())
    }

    fn is_spatially_varying(&self) -> bool {
        true
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_object("color0", SceneObject::Texture(&self.color0));
        callback.put_object("color1", SceneObject::Texture(&self.color1));
        callback.put_object("weight", SceneObject::Texture(&self.weight));
    }
}

impl From<&TextureParams> for MixTexture {
    /// Create a `MixTexture` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let color0 = tp.get_texture_or_else("color0", Spectrum::ZERO, ConstantTexture::arc);
        let color1 = tp.get_texture_or_else("color1", Spectrum::ONE, ConstantTexture::arc);
        let weight = tp.get_float_texture_or_else("weight", 0.5, ConstantTexture::arc_float);

        let tex = Self::new(color0, color1, weight);
        debug!("Created {}", tex);
        tex
    }
}

impl fmt::Display for MixTexture {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MixTexture[\n  color0 = {},\n  color1 = {},\n  weight = {}\n]",
            indent(&self.color0),
            indent(&self.color1),
            indent(&self.weight)
        )
    }
}
