//! BSDFs

use shade_core::paramset::TextureParams;
use shade_core::reflection::*;
use shade_core::texture::*;
use std::sync::Arc;

#[macro_use]
extern crate log;

mod diffuse;
mod normalmap;

// Re-export
pub use diffuse::*;
pub use normalmap::*;
