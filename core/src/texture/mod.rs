//! Textures

use crate::geometry::*;
use crate::interaction::*;
use crate::pbrt::Float;
use crate::spectrum::Spectrum;
use crate::traversal::TraversalCallback;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Texture interface.
///
/// Every evaluation takes the lane's activity flag `active`. Implementations
/// return zero for inactive lanes and never read children for them.
pub trait Texture: fmt::Display {
    /// Evaluate the texture as a color at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate(&self, si: &SurfaceInteraction, active: bool) -> Spectrum;

    /// Evaluate the texture as a scalar at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_float(&self, si: &SurfaceInteraction, active: bool) -> Float;

    /// Evaluate the gradient of the scalar texture with respect to the
    /// surface (u, v) coordinates. Defaults to a zero gradient.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn evaluate_gradient(&self, _si: &SurfaceInteraction, _active: bool) -> Vector2f {
        Vector2f::zero()
    }

    /// Returns a position independent summary of the texture's values.
    fn mean(&self) -> Float;

    /// Returns true if the texture's value depends on the surface point.
    fn is_spatially_varying(&self) -> bool {
        false
    }

    /// Lists named parameters and children.
    ///
    /// * `callback` - Receives the parameters and children.
    fn traverse(&self, _callback: &mut dyn TraversalCallback) {}
}

/// Atomic reference counted `Texture`.
pub type ArcTexture = Arc<dyn Texture + Send + Sync>;

/// Map of named textures.
pub type TextureMap = HashMap<String, ArcTexture>;
