//! BxDF Type

use bitflags::bitflags;

bitflags! {
    /// Stores combinations of reflection models.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct BxDFType: u8 {
        const REFLECTION = 0b00000001;
        const TRANSMISSION = 0b00000010;
        const DIFFUSE = 0b00000100;
        const GLOSSY = 0b00001000;
        const SPECULAR = 0b00010000;
    }
}

impl BxDFType {
    /// Tests a single type flag and returns whether it is set or not.
    ///
    /// * `other` - BxDFType flag to match.
    pub fn matches(&self, other: Self) -> bool {
        self.intersects(other)
    }
}

impl Default for BxDFType {
    /// Returns an empty set of flags.
    fn default() -> Self {
        Self::empty()
    }
}
