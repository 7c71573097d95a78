//! Fresnel Dielectrics

use crate::pbrt::*;
use std::mem::swap;

/// Returns the Fresnel reflectance of a dielectric interface for unpolarized
/// light, using the Cook-Torrance closed form in terms of the cosine of the
/// incident angle alone.
///
/// When `eta² - 1 + cos²θ <= 0` no refracted direction exists and the
/// reflectance saturates to 1.
///
/// * `cos_theta_i` - Cosine of the angle between the incident direction and
///                   the surface normal. Only its magnitude is used.
/// * `eta`         - Relative index of refraction.
pub fn fresnel_dielectric_cos(cos_theta_i: Float, eta: Float) -> Float {
    let c = abs(cos_theta_i);
    let g = eta * eta - 1.0 + c * c;
    if g <= 0.0 {
        return 1.0;
    }

    let g = g.sqrt();
    let a = (g - c) / (g + c);
    let b = (c * (g + c) - 1.0) / (c * (g - c) + 1.0);
    0.5 * a * a * (1.0 + b * b)
}

/// Returns the Fresnel reflection at the boundary between two dielectric media
/// computed from the parallel and perpendicular polarization terms.
///
/// * `cos_theta_i` - cos(θi) for angle between incident direction and geometric
///                   surface normal on the same side as incident direction `wi`.
/// * `eta_i`       - Index of refraction for medium that incident ray is in.
/// * `eta_t`       - Index of refraction for medium that incident ray is entering.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    // Potentially swap indices of refraction.
    let entering = cos_theta_i > 0.0;
    if !entering {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = abs(cos_theta_i);
    }

    // Compute _cosThetaT_ using Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Handle total internal reflection.
    if sin_theta_t >= 1.0 {
        1.0
    } else {
        let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
        let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
            / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
        let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
            / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
        (r_parl * r_parl + r_perp * r_perp) / 2.0
    }
}
