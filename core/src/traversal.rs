//! Traversal of the shading graph for introspection.

use crate::pbrt::*;
use crate::reflection::ArcBSDF;
use crate::texture::ArcTexture;
use std::fmt;

/// A child object exposed by a node during traversal.
#[derive(Clone, Copy)]
pub enum SceneObject<'a> {
    /// A texture node.
    Texture(&'a ArcTexture),

    /// A BSDF node.
    BSDF(&'a ArcBSDF),
}

impl<'a> fmt::Display for SceneObject<'a> {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture(tex) => write!(f, "{}", tex),
            Self::BSDF(bsdf) => write!(f, "{}", bsdf),
        }
    }
}

/// Receives the named parameters and children of a node. Traversal is a
/// read-only listing; nodes never change in response to it.
pub trait TraversalCallback {
    /// Receives a named scalar parameter.
    ///
    /// * `name`  - Parameter name.
    /// * `value` - Parameter value.
    fn put_parameter(&mut self, name: &str, value: Float);

    /// Receives a named child object.
    ///
    /// * `name`   - Child name.
    /// * `object` - The child.
    fn put_object(&mut self, name: &str, object: SceneObject<'_>);
}

/// A `TraversalCallback` that records everything it is given.
#[derive(Clone, Debug, Default)]
pub struct TraversalRecord {
    /// Named scalar parameters in the order they were received.
    pub parameters: Vec<(String, Float)>,

    /// Names of child textures in the order they were received.
    pub textures: Vec<String>,

    /// Names of child BSDFs in the order they were received.
    pub bsdfs: Vec<String>,
}

impl TraversalRecord {
    /// Returns the value of a recorded parameter.
    ///
    /// * `name` - Parameter name.
    pub fn parameter(&self, name: &str) -> Option<Float> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

impl TraversalCallback for TraversalRecord {
    fn put_parameter(&mut self, name: &str, value: Float) {
        self.parameters.push((name.to_string(), value));
    }

    fn put_object(&mut self, name: &str, object: SceneObject<'_>) {
        match object {
            SceneObject::Texture(_) => self.textures.push(name.to_string()),
            SceneObject::BSDF(_) => self.bsdfs.push(name.to_string()),
        }
    }
}

/// Indents every line after the first by two spaces so nested nodes line up
/// when printed inside their parent.
///
/// * `s` - The string to indent.
pub fn indent<T: fmt::Display>(s: T) -> String {
    s.to_string().replace('\n', "\n  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_finds_parameters_by_name() {
        let mut record = TraversalRecord::default();
        record.put_parameter("scale", 2.0);
        record.put_parameter("ior", 1.5);
        assert_eq!(record.parameter("ior"), Some(1.5));
        assert_eq!(record.parameter("eta"), None);
    }

    #[test]
    fn indent_offsets_nested_lines() {
        assert_eq!(indent("A[\n  b\n]"), "A[\n    b\n  ]");
    }
}
