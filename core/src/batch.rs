//! Lane batches
//!
//! Evaluates shading nodes over parallel slices of surface interactions and
//! activity masks. Each lane is independent; inactive lanes produce zero
//! outputs and never touch the node.

use crate::geometry::*;
use crate::interaction::*;
use crate::pbrt::*;
use crate::profiler::*;
use crate::reflection::*;
use crate::spectrum::*;
use crate::texture::*;

/// Evaluate a texture as a color for every lane.
///
/// * `tex`    - The texture.
/// * `si`     - Surface interactions.
/// * `active` - Activity mask.
pub fn evaluate_texture(
    tex: &dyn Texture,
    si: &[SurfaceInteraction],
    active: &[bool],
) -> Vec<Spectrum> {
    let _p = ProfilePhase::new(Prof::TextureEvaluate);
    assert_eq!(si.len(), active.len(), "Lane count mismatch");
    si.iter()
        .zip(active.iter())
        .map(|(si, &a)| if a { tex.evaluate(si, true) } else { Spectrum::ZERO })
        .collect()
}

/// Evaluate a texture as a scalar for every lane.
///
/// * `tex`    - The texture.
/// * `si`     - Surface interactions.
/// * `active` - Activity mask.
pub fn evaluate_texture_float(
    tex: &dyn Texture,
    si: &[SurfaceInteraction],
    active: &[bool],
) -> Vec<Float> {
    let _p = ProfilePhase::new(Prof::TextureEvaluate);
    assert_eq!(si.len(), active.len(), "Lane count mismatch");
    si.iter()
        .zip(active.iter())
        .map(|(si, &a)| if a { tex.evaluate_float(si, true) } else { 0.0 })
        .collect()
}

/// Evaluate a BSDF for every lane.
///
/// * `bsdf`   - The BSDF.
/// * `ctx`    - Query context.
/// * `si`     - Surface interactions.
/// * `wo`     - Outgoing directions.
/// * `active` - Activity mask.
pub fn evaluate_bsdf(
    bsdf: &dyn BSDF,
    ctx: &BSDFContext,
    si: &[SurfaceInteraction],
    wo: &[Vector3f],
    active: &[bool],
) -> Vec<Spectrum> {
    let _p = ProfilePhase::new(Prof::BSDFEvaluate);
    assert_eq!(si.len(), active.len(), "Lane count mismatch");
    assert_eq!(wo.len(), active.len(), "Lane count mismatch");
    si.iter()
        .zip(wo.iter())
        .zip(active.iter())
        .map(|((si, wo), &a)| {
            if a {
                bsdf.eval(ctx, si, wo, true)
            } else {
                Spectrum::ZERO
            }
        })
        .collect()
}

/// Returns the BSDF PDF for every lane.
///
/// * `bsdf`   - The BSDF.
/// * `ctx`    - Query context.
/// * `si`     - Surface interactions.
/// * `wo`     - Outgoing directions.
/// * `active` - Activity mask.
pub fn pdf_bsdf(
    bsdf: &dyn BSDF,
    ctx: &BSDFContext,
    si: &[SurfaceInteraction],
    wo: &[Vector3f],
    active: &[bool],
) -> Vec<Float> {
    let _p = ProfilePhase::new(Prof::BSDFPdf);
    assert_eq!(si.len(), active.len(), "Lane count mismatch");
    assert_eq!(wo.len(), active.len(), "Lane count mismatch");
    si.iter()
        .zip(wo.iter())
        .zip(active.iter())
        .map(|((si, wo), &a)| if a { bsdf.pdf(ctx, si, wo, true) } else { 0.0 })
        .collect()
}

/// Results of sampling a BSDF over a batch of lanes.
#[derive(Clone, Debug, Default)]
pub struct BatchSample {
    /// Per-lane samples.
    pub samples: Vec<BSDFSample>,

    /// Per-lane sampling weights.
    pub weights: Vec<Spectrum>,

    /// Lanes that were active and produced a usable sample.
    pub active: Vec<bool>,
}

/// Sample a BSDF for every lane. The returned mask narrows the input mask to
/// the lanes whose weight is not black.
///
/// * `bsdf`    - The BSDF.
/// * `ctx`     - Query context.
/// * `si`      - Surface interactions.
/// * `sample1` - 1D samples.
/// * `sample2` - 2D samples.
/// * `active`  - Activity mask.
pub fn sample_bsdf(
    bsdf: &dyn BSDF,
    ctx: &BSDFContext,
    si: &[SurfaceInteraction],
    sample1: &[Float],
    sample2: &[Point2f],
    active: &[bool],
) -> BatchSample {
    let _p = ProfilePhase::new(Prof::BSDFSample);
    let n = active.len();
    assert_eq!(si.len(), n, "Lane count mismatch");
    assert_eq!(sample1.len(), n, "Lane count mismatch");
    assert_eq!(sample2.len(), n, "Lane count mismatch");

    let mut out = BatchSample {
        samples: Vec::with_capacity(n),
        weights: Vec::with_capacity(n),
        active: Vec::with_capacity(n),
    };

    for i in 0..n {
        let (bs, weight) = if active[i] {
            bsdf.sample(ctx, &si[i], sample1[i], &sample2[i], true)
        } else {
            (BSDFSample::default(), Spectrum::ZERO)
        };
        out.active.push(active[i] && !weight.is_black());
        out.samples.push(bs);
        out.weights.push(weight);
    }

    out
}
