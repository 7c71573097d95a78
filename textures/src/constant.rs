//! Constant Texture

use super::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::spectrum::*;
use std::fmt;

/// Implements a texture that returns the same value everywhere.
#[derive(Clone)]
pub struct ConstantTexture {
    /// The texture value.
    value: Spectrum,
}

impl ConstantTexture {
    /// Create a new `ConstantTexture`.
    ///
    /// * `value` - The texture value.
    pub fn new(value: Spectrum) -> Self {
        Self { value }
    }

    /// Create a new reference counted `ConstantTexture`.
    ///
    /// * `value` - The texture value.
    pub fn arc(value: Spectrum) -> ArcTexture {
        Arc::new(Self::new(value))
    }

    /// Create a new reference counted `ConstantTexture` with the same value in
    /// every channel.
    ///
    /// * `value` - The texture value.
    pub fn arc_float(value: Float) -> ArcTexture {
        Self::arc(Spectrum::new(value))
    }
}

impl Texture for ConstantTexture {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `_si`    - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate(&self, _si: &SurfaceInteraction, active: bool) -> Spectrum {
        if active {
            self.value
        } else {
            Spectrum::ZERO
        }
    }

    /// Evaluate the texture as the channel average at surface interaction.
    ///
    /// * `_si`    - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_float(&self, _si: &SurfaceInteraction, active: bool) -> Float {
        if active {
            self.value.average()
        } else {
            0.0
        }
    }

    fn mean(&self) -> Float {
        self.value.average()
    }
}

impl From<&TextureParams> for ConstantTexture {
    /// Create a `ConstantTexture` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let value = match tp.params.find_spectrum("value").first() {
            Some(v) => *v,
            None => Spectrum::new(tp.find_float("value", 1.0)),
        };
        Self::new(value)
    }
}

impl fmt::Display for ConstantTexture {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantTexture[ value = {} ]", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_core::geometry::*;

    #[test]
    fn evaluates_value_everywhere() {
        let tex = ConstantTexture::new(Spectrum::from_rgb(&[0.3, 0.6, 0.9]));
        let si = SurfaceInteraction {
            uv: Point2f::new(0.7, 0.2),
            ..SurfaceInteraction::default()
        };
        assert_eq!(tex.evaluate(&si, true), Spectrum::from_rgb(&[0.3, 0.6, 0.9]));
        assert!((tex.evaluate_float(&si, true) - 0.6).abs() < 1e-6);
        assert_eq!(tex.evaluate_gradient(&si, true), Vector2f::zero());
        assert!(!tex.is_spatially_varying());
    }

    #[test]
    fn inactive_lane_is_zero() {
        let tex = ConstantTexture::new(Spectrum::ONE);
        let si = SurfaceInteraction::default();
        assert_eq!(tex.evaluate(&si, false), Spectrum::ZERO);
        assert_eq!(tex.evaluate_float(&si, false), 0.0);
    }

    #[test]
    fn from_params_reads_value() {
        let mut tp = TextureParams::default();
        assert_eq!(ConstantTexture::from(&tp).mean(), 1.0);
        tp.params.add_float("value", &[0.25]);
        assert_eq!(ConstantTexture::from(&tp).mean(), 0.25);
        tp.params.add_rgb_spectrum("value", &[0.0, 0.0, 0.9]);
        assert!((ConstantTexture::from(&tp).mean() - 0.3).abs() < 1e-6);
    }
}
