//! BSDF Context

use super::*;

/// Direction in which light is transported along a path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Paths traced from the camera.
    Radiance,

    /// Paths traced from the light sources.
    Importance,
}

impl Default for TransportMode {
    fn default() -> Self {
        Self::Radiance
    }
}

/// Parameters of a BSDF query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BSDFContext {
    /// Transport direction.
    pub mode: TransportMode,

    /// Component types the query may use.
    pub type_mask: BxDFType,

    /// Restricts the query to a single component when set.
    pub component: Option<usize>,
}

impl BSDFContext {
    /// Create a new `BSDFContext` allowing all components.
    ///
    /// * `mode` - Transport direction.
    pub fn new(mode: TransportMode) -> Self {
        Self {
            mode,
            type_mask: BxDFType::all(),
            component: None,
        }
    }

    /// Returns true if a component with the given flags and index takes part
    /// in the query.
    ///
    /// * `flags`     - Flags of the component.
    /// * `component` - Index of the component.
    pub fn is_enabled(&self, flags: BxDFType, component: usize) -> bool {
        self.type_mask.contains(flags) && self.component.map_or(true, |c| c == component)
    }
}

impl Default for BSDFContext {
    fn default() -> Self {
        Self::new(TransportMode::Radiance)
    }
}
