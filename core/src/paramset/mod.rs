//! Parameter Sets

use crate::pbrt::*;
use crate::reflection::*;
use crate::spectrum::*;
use crate::texture::*;
use std::collections::HashMap;
use std::fmt;

mod paramset_item;
mod texture_params;

// Re-export
pub use paramset_item::*;
pub use texture_params::*;

/// A hashmap of parameter sets stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores parameter set items of different types in hashmaps.
#[derive(Clone)]
pub struct ParamSet {
    pub floats: ParamSetMap<Float>,
    pub spectra: ParamSetMap<Spectrum>,
    pub textures: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            let n = String::from(name);
            self.$paramset.insert(n, ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$paramset.get(name) {
                Some(param) => {
                    if param.values.len() > 1 {
                        warn!("Ignoring excess values provided with parameter '{}'", name);
                    }
                    param.values.first().cloned().unwrap_or(default)
                }
                None => default,
            }
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a list.
macro_rules! paramset_find {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Vec<$t> {
            match self.$paramset.get(name) {
                Some(param) => param.values.clone(),
                None => vec![],
            }
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        for (name, param) in $params.iter() {
            write!($formatter, "\n\"{} {}\" {}", $param_type, name, param)?;
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self {
            floats: HashMap::new(),
            spectra: HashMap::new(),
            textures: HashMap::new(),
        }
    }

    paramset_find_one!(find_one_float, Float, floats);
    paramset_find!(find_float, Float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_find_one!(find_one_texture, String, textures);
    paramset_add!(add_texture, String, textures);

    paramset_find!(find_spectrum, Spectrum, spectra);
    paramset_add!(add_spectrum, Spectrum, spectra);

    /// Add/replace an RGB spectrum.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - RGB values in a linear slice.
    pub fn add_rgb_spectrum(&mut self, name: &str, values: &[Float]) {
        let n = values.len();
        assert!(n % 3 == 0, "RGB spectrum values % 3 != 0");

        let spectra: Vec<Spectrum> = values
            .chunks_exact(3)
            .map(|c| Spectrum::from_rgb(&[c[0], c[1], c[2]]))
            .collect();
        self.add_spectrum(name, &spectra);
    }
}

impl Default for ParamSet {
    /// Returns the "default value" for `ParamSet`.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.floats, "float", f);
        display_param!(self.spectra, "color", f);
        display_param!(self.textures, "texture", f);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_one_uses_first_value() {
        let mut ps = ParamSet::new();
        ps.add_float("scale", &[2.0, 3.0]);
        assert_eq!(ps.find_one_float("scale", 1.0), 2.0);
        assert_eq!(ps.find_float("scale"), vec![2.0, 3.0]);
    }

    #[test]
    fn find_one_missing_or_empty_returns_default() {
        let mut ps = ParamSet::new();
        ps.add_float("empty", &[]);
        assert_eq!(ps.find_one_float("empty", 1.5), 1.5);
        assert_eq!(ps.find_one_float("missing", 0.5), 0.5);
    }

    #[test]
    fn texture_references_are_found_by_name() {
        let mut ps = ParamSet::new();
        ps.add_texture("normalmap", &[String::from("bumps")]);
        assert_eq!(ps.find_one_texture("normalmap", String::new()), "bumps");
        assert_eq!(ps.find_one_texture("color0", String::new()), "");
    }

    #[test]
    fn add_rgb_spectrum_groups_triples() {
        let mut ps = ParamSet::new();
        ps.add_rgb_spectrum("color0", &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let s = ps.find_spectrum("color0");
        assert_eq!(s.len(), 2);
        assert_eq!(s[1], Spectrum::from_rgb(&[0.4, 0.5, 0.6]));
    }
}
