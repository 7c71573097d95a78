//! Geometry

use crate::pbrt::*;

// Define macros for property based testing.
#[cfg(test)]
#[macro_export]
macro_rules! prop_vector3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> Vector3<$t> {
                Vector3 { x, y, z }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_unit_vector3 {
    ($name: ident) => {
        prop_compose! {
            fn $name()(
                x in -1.0..1.0f32, y in -1.0..1.0f32, z in -1.0..1.0f32,
            ) -> Vector3<f32> {
                let v = Vector3 { x, y, z };
                if v.length_squared() < 1e-4 {
                    Vector3::new(0.0, 0.0, 1.0)
                } else {
                    v.normalize()
                }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_point2 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr) -> Point2<$t> {
                Point2 { x, y }
            }
        }
    };
}

mod common;
mod coordinate_system;
mod frame;
mod point2;
mod point3;
mod vector2;
mod vector3;

// Re-export
pub use common::*;
pub use coordinate_system::*;
pub use frame::*;
pub use point2::*;
pub use point3::*;
pub use vector2::*;
pub use vector3::*;
