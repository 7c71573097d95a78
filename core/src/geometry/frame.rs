//! Shading Frame

use super::common::*;
use super::coordinate_system::coordinate_system;
use super::vector3::Vector3f;
use crate::pbrt::*;
use std::fmt;

/// An orthonormal basis `(s, t, n)` that defines a local coordinate system
/// where the z-axis is aligned with the normal `n`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Tangent.
    pub s: Vector3f,

    /// Bitangent.
    pub t: Vector3f,

    /// Normal.
    pub n: Vector3f,
}

impl Frame {
    /// Create a new `Frame` from three orthonormal vectors.
    ///
    /// * `s` - Tangent.
    /// * `t` - Bitangent.
    /// * `n` - Normal.
    pub fn new(s: Vector3f, t: Vector3f, n: Vector3f) -> Self {
        Self { s, t, n }
    }

    /// Create a `Frame` around a unit normal using an arbitrary tangent.
    ///
    /// * `n` - Unit normal.
    pub fn from_normal(n: Vector3f) -> Self {
        let (s, t) = coordinate_system(&n);
        Self { s, t, n }
    }

    /// Transforms a vector from world space to local space.
    ///
    /// * `v` - The vector to transform.
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.s), v.dot(&self.t), v.dot(&self.n))
    }

    /// Transforms a vector from local space to world space.
    ///
    /// * `v` - The vector to transform.
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.s * v.x + self.t * v.y + self.n * v.z
    }

    /// Returns a frame whose axes are this frame's axes expressed in the
    /// world space of `parent`. Used when this frame was built in the local
    /// space of `parent`.
    ///
    /// * `parent` - The frame this frame is expressed in.
    pub fn in_world_of(&self, parent: &Frame) -> Self {
        Self {
            s: parent.to_world(&self.s),
            t: parent.to_world(&self.t),
            n: parent.to_world(&self.n),
        }
    }

    /// Returns the largest deviation from orthonormality over all unit
    /// length and pairwise orthogonality conditions.
    pub fn orthonormality_error(&self) -> Float {
        [
            abs(self.s.length() - 1.0),
            abs(self.t.length() - 1.0),
            abs(self.n.length() - 1.0),
            self.s.abs_dot(&self.t),
            self.s.abs_dot(&self.n),
            self.t.abs_dot(&self.n),
        ]
        .iter()
        .fold(0.0, |e, &d| max(e, d))
    }
}

impl Default for Frame {
    /// Returns the identity frame aligned with the coordinate axes.
    fn default() -> Self {
        Self {
            s: Vector3f::new(1.0, 0.0, 0.0),
            t: Vector3f::new(0.0, 1.0, 0.0),
            n: Vector3f::new(0.0, 0.0, 1.0),
        }
    }
}

impl fmt::Display for Frame {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {{ s: {}, t: {}, n: {} }}", self.s, self.t, self.n)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
