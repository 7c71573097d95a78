//! UV Texture

use super::*;
use shade_core::geometry::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::spectrum::*;
use shade_core::traversal::*;
use std::fmt;

/// Implements a texture that converts the surface's (u, v) coordinates
/// into red and green components of a `Spectrum`.
#[derive(Clone)]
pub struct UVTexture {
    /// Scale for the u-coordinate.
    su: Float,

    /// Scale for the v-coordinate.
    sv: Float,

    /// Offset for the u-coordinate.
    du: Float,

    /// Offset for the v-coordinate.
    dv: Float,
}

impl UVTexture {
    /// Create a new `UVTexture`.
    ///
    /// * `su` - Scale for the u-coordinate.
    /// * `sv` - Scale for the v-coordinate.
    /// * `du` - Offset for the u-coordinate.
    /// * `dv` - Offset for the v-coordinate.
    pub fn new(su: Float, sv: Float, du: Float, dv: Float) -> Self {
        Self { su, sv, du, dv }
    }

    /// Returns the (s, t) mapping for the surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn map(&self, si: &SurfaceInteraction) -> Point2f {
        Point2f::new(self.su * si.uv.x + self.du, self.sv * si.uv.y + self.dv)
    }
}

impl Default for UVTexture {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0)
    }
}

impl Texture for UVTexture {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        if !active {
            return Spectrum::ZERO;
        }

        let st = self.map(si);
        Spectrum::from_rgb(&[frac(st.x), frac(st.y), 0.0])
    }

    /// Evaluate the texture as the channel average at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_float(&self, si: &SurfaceInteraction, active: bool) -> Float {
        self.evaluate(si, active).average()
    }

    /// Evaluate the gradient of the channel average. The wrap-around
    /// discontinuities of the fractional part are ignored.
    ///
    /// * `_si`    - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_gradient(&self, _si: &SurfaceInteraction, active: bool) -> Vector2f {
        if active {
            Vector2f::new(self.su / 3.0, self.sv / 3.0)
        } else {
            Vector2f::zero()
        }
    }

    fn mean(&self) -> Float {
        1.0 / 3.0
    }

    fn is_spatially_varying(&self) -> bool {
        true
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_parameter("uscale", self.su);
        callback.put_parameter("vscale", self.sv);
        callback.put_parameter("udelta", self.du);
        callback.put_parameter("vdelta", self.dv);
    }
}

impl From<&TextureParams> for UVTexture {
    /// Create a `UVTexture` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let su = tp.find_float("uscale", 1.0);
        let sv = tp.find_float("vscale", 1.0);
        let du = tp.find_float("udelta", 0.0);
        let dv = tp.find_float("vdelta", 0.0);
        Self::new(su, sv, du, dv)
    }
}

impl fmt::Display for UVTexture {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UVTexture[ uscale = {}, vscale = {}, udelta = {}, vdelta = {} ]",
            self.su, self.sv, self.du, self.dv
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn at(u: Float, v: Float) -> SurfaceInteraction {
        SurfaceInteraction {
            uv: Point2f::new(u, v),
            ..SurfaceInteraction::default()
        }
    }

    #[test]
    fn encodes_uv_in_red_and_green() {
        let tex = UVTexture::default();
        let c = tex.evaluate(&at(0.25, 0.75), true);
        assert_eq!(c, Spectrum::from_rgb(&[0.25, 0.75, 0.0]));
        assert!(approx_eq!(
            f32,
            tex.evaluate_float(&at(0.25, 0.75), true),
            1.0 / 3.0,
            epsilon = 1e-6
        ));
    }

    #[test]
    fn wraps_coordinates() {
        let tex = UVTexture::new(2.0, 1.0, 0.0, 0.5);
        let c = tex.evaluate(&at(0.75, 0.75), true);
        assert!(approx_eq!(f32, c[0], 0.5, epsilon = 1e-6));
        assert!(approx_eq!(f32, c[1], 0.25, epsilon = 1e-6));
        assert_eq!(
            tex.evaluate_gradient(&at(0.75, 0.75), true),
            Vector2f::new(2.0 / 3.0, 1.0 / 3.0)
        );
    }

    #[test]
    fn inactive_lane_is_zero() {
        let tex = UVTexture::default();
        assert_eq!(tex.evaluate(&at(0.5, 0.5), false), Spectrum::ZERO);
        assert_eq!(tex.evaluate_gradient(&at(0.5, 0.5), false), Vector2f::zero());
    }

    #[test]
    fn traverse_lists_mapping() {
        let mut tp = TextureParams::default();
        tp.params.add_float("uscale", &[4.0]);
        let tex = UVTexture::from(&tp);
        let mut record = TraversalRecord::default();
        tex.traverse(&mut record);
        assert_eq!(record.parameter("uscale"), Some(4.0));
        assert_eq!(record.parameter("vdelta"), Some(0.0));
    }
}
