//! Scale Texture

use super::*;
use shade_core::geometry::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::spectrum::*;
use shade_core::traversal::*;
use std::fmt;

/// Implements a texture that multiplies another texture by a constant factor.
///
/// The mean is the child's mean without the factor applied.
#[derive(Clone)]
pub struct ScaleTexture {
    /// The scaled texture.
    texture: ArcTexture,

    /// Scale factor.
    scale: Float,
}

impl ScaleTexture {
    /// Create a new `ScaleTexture`.
    ///
    /// * `texture` - The scaled texture.
    /// * `scale`   - Scale factor.
    pub fn new(texture: ArcTexture, scale: Float) -> Self {
        Self { texture, scale }
    }
}

impl Texture for ScaleTexture {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        if !active {
            return Spectrum::ZERO;
        }
        self.texture.evaluate(si, active) * self.scale
    }

    /// Evaluate the texture as a scalar at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_float(&self, si: &SurfaceInteraction, active: bool) -> Float {
        if !active {
            return 0.0;
        }
        self.texture.evaluate_float(si, active) * self.scale
    }

    /// Evaluate the gradient at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_gradient(&self, si: &SurfaceInteraction, active: bool) -> Vector2f {
        if !active {
            return Vector2f::zero();
        }
        self.texture.evaluate_gradient(si, active) * self.scale
    }

    fn mean(&self) -> Float {
        self.texture.mean()
    }

    fn is_spatially_varying(&self) -> bool {
        true
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_object("texture", SceneObject::Texture(&self.texture));
        callback.put_parameter("scale", self.scale);
    }
}

impl From<&TextureParams> for ScaleTexture {
    /// Create a `ScaleTexture` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let texture = tp.get_texture_or_else("texture", Spectrum::ZERO, ConstantTexture::arc);
        let scale = tp.find_float("scale", 1.0);

        let tex = Self::new(texture, scale);
        debug!("Created {}", tex);
        tex
    }
}

impl fmt::Display for ScaleTexture {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaleTexture[\n  texture = {},\n  scale = {}\n]",
            indent(&self.texture),
            self.scale
        )
    }
}
