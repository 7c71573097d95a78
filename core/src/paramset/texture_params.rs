//! Texture Parameters

use super::*;
use either::*;
use std::sync::Arc;

/// Stores the parameters of a shading node along with the named textures and
/// nested BSDFs it may refer to.
#[derive(Clone, Default)]
pub struct TextureParams {
    /// Named textures that parameters can refer to.
    textures: TextureMap,

    /// Nested child BSDFs.
    bsdfs: Vec<ArcBSDF>,

    /// Node parameters.
    pub params: ParamSet,
}

/// Define a macro that can be used to generate a function for finding
/// a single parameter value.
macro_rules! texture_params_find {
    ($func: ident, $t: ty, $paramset_func: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            self.params.$paramset_func(name, default)
        }
    };
}

impl TextureParams {
    /// Create a new `TextureParams`.
    ///
    /// * `params`   - Node parameters.
    /// * `textures` - Named textures.
    /// * `bsdfs`    - Nested BSDFs.
    pub fn new(params: ParamSet, textures: TextureMap, bsdfs: Vec<ArcBSDF>) -> Self {
        Self {
            textures,
            bsdfs,
            params,
        }
    }

    /// Add/replace a named texture.
    ///
    /// * `name` - Texture name.
    /// * `tex`  - The texture.
    pub fn add_named_texture(&mut self, name: &str, tex: ArcTexture) {
        self.textures.insert(String::from(name), tex);
    }

    /// Add a nested BSDF.
    ///
    /// * `bsdf` - The BSDF.
    pub fn add_nested_bsdf(&mut self, bsdf: ArcBSDF) {
        self.bsdfs.push(bsdf);
    }

    /// Returns the nested BSDFs.
    pub fn nested_bsdfs(&self) -> &[ArcBSDF] {
        &self.bsdfs
    }

    /// Returns the texture a parameter refers to.
    ///
    /// * `name` - Parameter name.
    pub fn get_texture(&self, name: &str) -> Option<ArcTexture> {
        let tex_name = self.params.find_one_texture(name, String::new());
        if tex_name.is_empty() {
            return None;
        }

        let tex = self.textures.get(&tex_name).map(Arc::clone);
        if tex.is_none() {
            warn!(
                "Parameter '{}' refers to unknown texture '{}'",
                name, tex_name
            );
        }
        tex
    }

    /// Returns the texture a parameter refers to or its inline spectrum value.
    /// A single floating point value is promoted to a uniform spectrum.
    ///
    /// * `name` - Parameter name.
    pub fn get_texture_or_value(&self, name: &str) -> Option<Either<ArcTexture, Spectrum>> {
        if let Some(tex) = self.get_texture(name) {
            return Some(Left(tex));
        }

        // Try to find a spectrum value by given name.
        let s = self.params.find_spectrum(name);
        if s.len() > 1 {
            warn!("Ignoring excess values provided with parameter '{}'", name);
        }
        if let Some(v) = s.first() {
            return Some(Right(*v));
        }

        // Try to find a floating point value by given name.
        self.get_float_value(name).map(|v| Right(Spectrum::new(v)))
    }

    /// Returns the texture a parameter refers to or its inline floating point
    /// value.
    ///
    /// * `name` - Parameter name.
    pub fn get_float_texture_or_value(&self, name: &str) -> Option<Either<ArcTexture, Float>> {
        match self.get_texture(name) {
            Some(tex) => Some(Left(tex)),
            None => self.get_float_value(name).map(Right),
        }
    }

    /// Returns the first floating point value of a parameter.
    ///
    /// * `name` - Parameter name.
    fn get_float_value(&self, name: &str) -> Option<Float> {
        let s = self.params.find_float(name);
        if s.len() > 1 {
            warn!("Ignoring excess values provided with parameter '{}'", name);
        }
        s.first().copied()
    }

    /// Returns a texture, a constant texture built from a spectrum or floating
    /// point value, or a constant texture built from the given default.
    ///
    /// * `name`            - Parameter name.
    /// * `default`         - Default spectrum value.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a spectrum value.
    pub fn get_texture_or_else<F>(
        &self,
        name: &str,
        default: Spectrum,
        constant_tex_fn: F,
    ) -> ArcTexture
    where
        F: Fn(Spectrum) -> ArcTexture,
    {
        match self.get_texture_or_value(name) {
            Some(Left(tex)) => tex,
            Some(Right(v)) => constant_tex_fn(v),
            None => constant_tex_fn(default),
        }
    }

    /// Returns a texture, a constant texture built from a floating point value
    /// or a constant texture built from the given default.
    ///
    /// * `name`            - Parameter name.
    /// * `default`         - Default floating point value.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a floating point value.
    pub fn get_float_texture_or_else<F>(
        &self,
        name: &str,
        default: Float,
        constant_tex_fn: F,
    ) -> ArcTexture
    where
        F: Fn(Float) -> ArcTexture,
    {
        match self.get_float_texture_or_value(name) {
            Some(Left(tex)) => tex,
            Some(Right(v)) => constant_tex_fn(v),
            None => constant_tex_fn(default),
        }
    }

    texture_params_find!(find_float, Float, find_one_float);
}
