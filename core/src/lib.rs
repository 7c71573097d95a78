//! Core

#[macro_use]
extern crate log;

// Must stay first; later modules use its test macros.
#[macro_use]
pub mod geometry;

pub mod batch;
pub mod interaction;
pub mod paramset;
pub mod pbrt;
pub mod profiler;
pub mod reflection;
pub mod sampling;
pub mod spectrum;
pub mod texture;
pub mod traversal;
