//! Textures

use shade_core::paramset::TextureParams;
use shade_core::texture::*;
use std::sync::Arc;

#[macro_use]
extern crate log;

mod constant;
mod fresnel;
mod mix;
mod scale;
mod uv;

// Re-export
pub use constant::*;
pub use fresnel::*;
pub use mix::*;
pub use scale::*;
pub use uv::*;
