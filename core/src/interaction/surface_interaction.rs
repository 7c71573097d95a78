//! Surface Interactions

use crate::geometry::*;
use std::fmt;

/// SurfaceInteraction represents the geometry of a particular point on a
/// surface as seen by the shading code.
///
/// Directions stored here (`wi`) are expressed in the local space of the
/// shading frame `sh_frame`. Positions and partial derivatives are in world
/// space.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceInteraction {
    /// Point of interaction.
    pub p: Point3f,

    /// The uv coordinates from surface parametrization.
    pub uv: Point2f,

    /// Incident direction in the local space of `sh_frame`.
    pub wi: Vector3f,

    /// Shading frame in world space.
    pub sh_frame: Frame,

    /// Parametric partial derivative of the point ∂p/∂u.
    pub dpdu: Vector3f,

    /// Parametric partial derivative of the point ∂p/∂v.
    pub dpdv: Vector3f,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `p`        - Point of interaction.
    /// * `uv`       - The uv coordinates from surface parametrization.
    /// * `wi`       - Incident direction in local shading space.
    /// * `sh_frame` - Shading frame in world space.
    /// * `dpdu`     - Parametric partial derivative of the point ∂p/∂u.
    /// * `dpdv`     - Parametric partial derivative of the point ∂p/∂v.
    pub fn new(
        p: Point3f,
        uv: Point2f,
        wi: Vector3f,
        sh_frame: Frame,
        dpdu: Vector3f,
        dpdv: Vector3f,
    ) -> Self {
        Self {
            p,
            uv,
            wi,
            sh_frame,
            dpdu,
            dpdv,
        }
    }

    /// Create a surface interaction whose shading frame is built from the
    /// partial derivatives, with `n = normalize(dpdu × dpdv)` and
    /// `s = normalize(dpdu)`.
    ///
    /// * `p`    - Point of interaction.
    /// * `uv`   - The uv coordinates from surface parametrization.
    /// * `wi_w` - Incident direction in world space.
    /// * `dpdu` - Parametric partial derivative of the point ∂p/∂u.
    /// * `dpdv` - Parametric partial derivative of the point ∂p/∂v.
    pub fn from_derivatives(
        p: Point3f,
        uv: Point2f,
        wi_w: Vector3f,
        dpdu: Vector3f,
        dpdv: Vector3f,
    ) -> Self {
        let n = dpdu.cross(&dpdv).normalize();
        let s = dpdu.normalize();
        let sh_frame = Frame::new(s, n.cross(&s), n);
        Self::new(p, uv, sh_frame.to_local(&wi_w), sh_frame, dpdu, dpdv)
    }

    /// Transforms a vector from world space to the local shading space.
    ///
    /// * `v` - The vector to transform.
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        self.sh_frame.to_local(v)
    }

    /// Transforms a vector from the local shading space to world space.
    ///
    /// * `v` - The vector to transform.
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.sh_frame.to_world(v)
    }
}

impl Default for SurfaceInteraction {
    /// Returns an interaction at the origin of the xy-plane, lit from
    /// straight above.
    fn default() -> Self {
        Self::new(
            Point3f::zero(),
            Point2f::zero(),
            Vector3f::new(0.0, 0.0, 1.0),
            Frame::default(),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        )
    }
}

impl fmt::Display for SurfaceInteraction {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SurfaceInteraction {{ p: {}, uv: {}, wi: {}, sh_frame: {} }}",
            self.p, self.uv, self.wi, self.sh_frame
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn from_derivatives_builds_right_handed_frame() {
        let si = SurfaceInteraction::from_derivatives(
            Point3f::zero(),
            Point2f::new(0.5, 0.5),
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(2.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, -3.0),
        );
        assert_eq!(si.sh_frame.n, Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(si.sh_frame.s, Vector3f::new(1.0, 0.0, 0.0));
        assert!(si.sh_frame.orthonormality_error() < 1e-6);
        assert!(approx_eq!(f32, si.wi.z, 1.0, epsilon = 1e-6));
    }

    #[test]
    fn to_world_inverts_to_local() {
        let si = SurfaceInteraction::default();
        let v = Vector3f::new(0.1, 0.2, 0.3);
        assert_eq!(si.to_world(&si.to_local(&v)), v);
    }
}
