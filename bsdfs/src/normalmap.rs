//! Normal Map BSDF

use super::*;
use either::*;
use shade_core::geometry::*;
use shade_core::interaction::*;
use shade_core::pbrt::*;
use shade_core::profiler::*;
use shade_core::spectrum::*;
use shade_core::traversal::*;
use shade_textures::ConstantTexture;
use std::fmt;

/// Smallest divisor used for the normal's z-component when the configured
/// scale is not positive.
const MIN_NORMAL_SCALE: Float = 1e-8;

/// Squared length below which the projected unit tangent is treated as
/// parallel to the normal.
const MIN_TANGENT_LENGTH_SQUARED: Float = 1e-8;

/// Adapter that shades a nested BSDF with a frame perturbed by a normal map.
///
/// The normal map stores a tangent space normal `n` as `(n + 1) / 2` in its
/// three linear color channels. The perturbed frame is built in the local
/// space of the interaction's shading frame, where the geometric normal is
/// `(0, 0, 1)`, and rebuilt for every query.
#[derive(Clone)]
pub struct NormalMapBSDF {
    /// The BSDF that does the actual shading.
    nested_bsdf: ArcBSDF,

    /// Normal map texture.
    normalmap: ArcTexture,

    /// Divides the normal's z-component; larger values flatten the normals.
    scale: Float,

    /// Component flags copied from the nested BSDF.
    components: Vec<BxDFType>,
}

impl NormalMapBSDF {
    /// Create a new `NormalMapBSDF`.
    ///
    /// * `nested_bsdf` - The BSDF that does the actual shading.
    /// * `normalmap`   - Normal map texture.
    /// * `scale`       - Divides the normal's z-component.
    pub fn new(nested_bsdf: ArcBSDF, normalmap: ArcTexture, scale: Float) -> Self {
        let components = (0..nested_bsdf.component_count())
            .map(|i| nested_bsdf.component_flags(i))
            .collect();

        Self {
            nested_bsdf,
            normalmap,
            scale,
            components,
        }
    }

    /// Returns the perturbed shading frame expressed in the local space of
    /// the interaction's shading frame.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    pub fn perturbed_frame(&self, si: &SurfaceInteraction, active: bool) -> Frame {
        if !active {
            return Frame::default();
        }

        let _p = ProfilePhase::new(Prof::NormalMapFrame);

        let v = self.normalmap.evaluate(si, active);
        let z_scale = if self.scale > 0.0 {
            self.scale
        } else {
            MIN_NORMAL_SCALE
        };
        let raw = Vector3f::new(
            2.0 * v[0] - 1.0,
            2.0 * v[1] - 1.0,
            2.0 * (v[2] / z_scale) - 1.0,
        );

        let len2 = raw.length_squared();
        let n = if len2 > 0.0 && len2.is_finite() {
            raw / len2.sqrt()
        } else {
            Vector3f::new(0.0, 0.0, 1.0)
        };

        // Rescale before normalizing so the squared length stays finite.
        let dpdu = si.to_local(&si.dpdu);
        let m = max(max(abs(dpdu.x), abs(dpdu.y)), abs(dpdu.z));
        if !(m > 0.0 && m.is_finite()) {
            return Frame::from_normal(n);
        }
        let dpdu = (dpdu / m).normalize();

        // Gram-Schmidt the tangent against the new normal.
        let s = dpdu - n * n.dot(&dpdu);
        if !(s.length_squared() > MIN_TANGENT_LENGTH_SQUARED) {
            return Frame::from_normal(n);
        }

        let t = n.cross(&s.normalize()).normalize();
        Frame::new(t.cross(&n), t, n)
    }

    /// Returns a copy of the surface interaction shaded with the perturbed
    /// frame, along with the frame in the local space of `si`.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is active.
    fn perturb(&self, si: &SurfaceInteraction, active: bool) -> (SurfaceInteraction, Frame) {
        let frame = self.perturbed_frame(si, active);

        let mut perturbed_si = *si;
        perturbed_si.sh_frame = frame.in_world_of(&si.sh_frame);
        perturbed_si.wi = frame.to_local(&si.wi);

        (perturbed_si, frame)
    }
}

impl BSDF for NormalMapBSDF {
    /// Samples the nested BSDF in the perturbed frame. The sampled direction
    /// is returned in the local space of `si`. Directions that fall on
    /// different sides of the geometric and the perturbed surface get a zero
    /// weight.
    fn sample(
        &self,
        ctx: &BSDFContext,
        si: &SurfaceInteraction,
        sample1: Float,
        sample2: &Point2f,
        active: bool,
    ) -> (BSDFSample, Spectrum) {
        if !active {
            return (BSDFSample::default(), Spectrum::ZERO);
        }

        let (perturbed_si, frame) = self.perturb(si, active);
        let (mut bs, weight) =
            self.nested_bsdf
                .sample(ctx, &perturbed_si, sample1, sample2, active);
        if weight.is_black() {
            return (bs, Spectrum::ZERO);
        }

        let perturbed_wo = frame.to_world(&bs.wo);
        let consistent = cos_theta(&bs.wo) * cos_theta(&perturbed_wo) > 0.0;
        bs.wo = perturbed_wo;

        if consistent {
            (bs, weight)
        } else {
            (bs, Spectrum::ZERO)
        }
    }

    fn eval(
        &self,
        ctx: &BSDFContext,
        si: &SurfaceInteraction,
        wo: &Vector3f,
        active: bool,
    ) -> Spectrum {
        if !active {
            return Spectrum::ZERO;
        }

        let (perturbed_si, frame) = self.perturb(si, active);
        let perturbed_wo = frame.to_local(wo);
        if !(cos_theta(wo) * cos_theta(&perturbed_wo) > 0.0) {
            return Spectrum::ZERO;
        }

        self.nested_bsdf
            .eval(ctx, &perturbed_si, &perturbed_wo, active)
    }

    fn pdf(&self, ctx: &BSDFContext, si: &SurfaceInteraction, wo: &Vector3f, active: bool) -> Float {
        if !active {
            return 0.0;
        }

        let (perturbed_si, frame) = self.perturb(si, active);
        let perturbed_wo = frame.to_local(wo);
        if !(cos_theta(wo) * cos_theta(&perturbed_wo) > 0.0) {
            return 0.0;
        }

        self.nested_bsdf
            .pdf(ctx, &perturbed_si, &perturbed_wo, active)
    }

    /// Returns the nested BSDF's albedo at the unperturbed interaction.
    fn albedo(&self, si: &SurfaceInteraction, active: bool) -> Spectrum {
        self.nested_bsdf.albedo(si, active)
    }

    /// Returns the perturbed frame in world space.
    fn shading_frame(&self, si: &SurfaceInteraction, active: bool) -> Frame {
        self.perturbed_frame(si, active).in_world_of(&si.sh_frame)
    }

    fn components(&self) -> &[BxDFType] {
        &self.components
    }

    fn traverse(&self, callback: &mut dyn TraversalCallback) {
        callback.put_object("normalmap", SceneObject::Texture(&self.normalmap));
        callback.put_object("nested_bsdf", SceneObject::BSDF(&self.nested_bsdf));
        callback.put_parameter("scale", self.scale);
    }
}

impl TryFrom<&TextureParams> for NormalMapBSDF {
    type Error = String;

    /// Create a `NormalMapBSDF` from given parameter set. Exactly one nested
    /// BSDF and a `normalmap` texture are required.
    ///
    /// * `tp` - Texture parameters.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let nested_bsdf = match tp.nested_bsdfs() {
            [bsdf] => Arc::clone(bsdf),
            [] => return Err(String::from("Exactly one BSDF child object must be specified.")),
            bsdfs => {
                return Err(format!(
                    "Only a single BSDF child object can be specified, found {}.",
                    bsdfs.len()
                ))
            }
        };

        let normalmap = match tp.get_texture_or_value("normalmap") {
            Some(Left(tex)) => tex,
            Some(Right(v)) => ConstantTexture::arc(v),
            None => return Err(String::from("Normal map texture 'normalmap' must be specified.")),
        };

        let scale = tp.find_float("scale", 1.0);
        if scale <= 0.0 {
            warn!(
                "Normal map scale {} is not positive; using {} instead.",
                scale, MIN_NORMAL_SCALE
            );
        }

        let bsdf = Self::new(nested_bsdf, normalmap, scale);
        debug!("Created {}", bsdf);
        Ok(bsdf)
    }
}

impl fmt::Display for NormalMapBSDF {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NormalMapBSDF[\n  nested_bsdf = {},\n  normalmap = {},\n  scale = {}\n]",
            indent(&self.nested_bsdf),
            indent(&self.normalmap),
            self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;
    use shade_core::batch::{evaluate_bsdf, pdf_bsdf, sample_bsdf};
    use shade_textures::{MixTexture, UVTexture};
    use std::f32::consts::FRAC_1_SQRT_2;

    /// Encodes a unit normal the way normal maps store it.
    fn encode(n: Vector3f) -> Spectrum {
        Spectrum::from_rgb(&[(n.x + 1.0) / 2.0, (n.y + 1.0) / 2.0, (n.z + 1.0) / 2.0])
    }

    fn diffuse() -> ArcBSDF {
        Arc::new(DiffuseBSDF::new(ConstantTexture::arc_float(0.5)))
    }

    fn normal_map(value: Spectrum, scale: Float) -> NormalMapBSDF {
        NormalMapBSDF::new(diffuse(), ConstantTexture::arc(value), scale)
    }

    /// Surface facing +x with a tangent along +z.
    fn rotated_si() -> SurfaceInteraction {
        SurfaceInteraction::from_derivatives(
            Point3f::new(1.0, 2.0, 3.0),
            Point2f::new(0.25, 0.5),
            Vector3f::new(1.0, 0.3, 0.2).normalize(),
            Vector3f::new(0.0, 0.0, 2.0),
            Vector3f::new(0.0, -1.0, 0.0),
        )
    }

    /// Inner BSDF that fails if it is queried below the surface.
    struct FrontOnly;

    impl fmt::Display for FrontOnly {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "FrontOnly")
        }
    }

    impl BSDF for FrontOnly {
        fn sample(
            &self,
            _ctx: &BSDFContext,
            _si: &SurfaceInteraction,
            _sample1: Float,
            _sample2: &Point2f,
            _active: bool,
        ) -> (BSDFSample, Spectrum) {
            (BSDFSample::default(), Spectrum::ZERO)
        }

        fn eval(
            &self,
            _ctx: &BSDFContext,
            _si: &SurfaceInteraction,
            wo: &Vector3f,
            _active: bool,
        ) -> Spectrum {
            assert!(wo.z > 0.0, "queried below the perturbed surface");
            Spectrum::ONE
        }

        fn pdf(
            &self,
            _ctx: &BSDFContext,
            _si: &SurfaceInteraction,
            wo: &Vector3f,
            _active: bool,
        ) -> Float {
            assert!(wo.z > 0.0, "queried below the perturbed surface");
            1.0
        }

        fn albedo(&self, _si: &SurfaceInteraction, _active: bool) -> Spectrum {
            Spectrum::ONE
        }

        fn components(&self) -> &[BxDFType] {
            &[]
        }
    }

    fn assert_spectrum_eq(a: Spectrum, b: Spectrum) {
        for i in 0..3 {
            assert!(approx_eq!(f32, a[i], b[i], epsilon = 1e-5), "{} != {}", a, b);
        }
    }

    fn assert_vector_eq(a: Vector3f, b: Vector3f) {
        for i in 0..3 {
            assert!(approx_eq!(f32, a[i], b[i], epsilon = 1e-5), "{} != {}", a, b);
        }
    }

    proptest! {
        #[test]
        fn perturbed_frame_is_orthonormal(
            r in 0.0f32..1.0f32,
            g in 0.0f32..1.0f32,
            b in 0.0f32..1.0f32,
            scale in 0.05f32..4.0f32,
            dx in -2.0f32..2.0f32,
            dy in -2.0f32..2.0f32,
            dz in -2.0f32..2.0f32,
        ) {
            let bsdf = normal_map(Spectrum::from_rgb(&[r, g, b]), scale);
            let si = SurfaceInteraction {
                dpdu: Vector3f::new(dx, dy, dz),
                ..SurfaceInteraction::default()
            };

            let frame = bsdf.perturbed_frame(&si, true);
            prop_assert!(frame.orthonormality_error() < 1e-5);

            // Right handed: t = n x s.
            let t = frame.n.cross(&frame.s);
            prop_assert!((t - frame.t).length() < 1e-5);

            // The world space frame stays orthonormal too.
            let world = bsdf.shading_frame(&rotated_si(), true);
            prop_assert!(world.orthonormality_error() < 1e-5);
        }
    }

    #[test]
    fn flat_normal_map_is_identity() {
        let bsdf = normal_map(Spectrum::from_rgb(&[0.5, 0.5, 1.0]), 1.0);
        let inner = diffuse();
        let ctx = BSDFContext::default();
        let si = rotated_si();

        let frame = bsdf.shading_frame(&si, true);
        assert_vector_eq(frame.n, si.sh_frame.n);
        assert_vector_eq(frame.s, si.sh_frame.s);
        assert_vector_eq(frame.t, si.sh_frame.t);

        for wo in [
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.48, -0.6, 0.64),
            Vector3f::new(0.6, 0.0, -0.8),
        ] {
            assert_spectrum_eq(
                bsdf.eval(&ctx, &si, &wo, true),
                inner.eval(&ctx, &si, &wo, true),
            );
            assert!(approx_eq!(
                f32,
                bsdf.pdf(&ctx, &si, &wo, true),
                inner.pdf(&ctx, &si, &wo, true),
                epsilon = 1e-5
            ));
        }

        for u in [Point2f::new(0.1, 0.7), Point2f::new(0.8, 0.35)] {
            let (bs, weight) = bsdf.sample(&ctx, &si, 0.5, &u, true);
            let (expected_bs, expected_weight) = inner.sample(&ctx, &si, 0.5, &u, true);
            assert_vector_eq(bs.wo, expected_bs.wo);
            assert!(approx_eq!(f32, bs.pdf, expected_bs.pdf, epsilon = 1e-5));
            assert_eq!(bs.sampled_type, expected_bs.sampled_type);
            assert_spectrum_eq(weight, expected_weight);
        }
    }

    #[test]
    fn inconsistent_sides_are_masked() {
        // Normal tilted towards +x; wo leans towards -x but stays above the
        // geometric surface.
        let tilted = Vector3f::new(0.8, 0.0, 0.6);
        let bsdf = normal_map(encode(tilted), 1.0);
        let ctx = BSDFContext::default();
        let si = SurfaceInteraction::default();

        let wo = Vector3f::new(-1.0, 0.0, 0.3).normalize();
        assert!(wo.z > 0.0 && wo.dot(&tilted) < 0.0);
        assert!(bsdf.eval(&ctx, &si, &wo, true).is_black());
        assert_eq!(bsdf.pdf(&ctx, &si, &wo, true), 0.0);

        // Consistent direction still reaches the nested BSDF.
        let up = Vector3f::new(0.6, 0.0, 0.8);
        assert!(!bsdf.eval(&ctx, &si, &up, true).is_black());

        // The first sample lands below the geometric surface.
        let lanes = [si, si];
        let batch = sample_bsdf(
            &bsdf,
            &ctx,
            &lanes,
            &[0.5, 0.5],
            &[Point2f::new(0.95, 0.5), Point2f::new(0.05, 0.5)],
            &[true, true],
        );
        assert_eq!(batch.active, vec![false, true]);
        assert!(batch.weights[0].is_black());
        assert!(batch.samples[0].wo.z < 0.0);
        assert!(batch.samples[1].wo.z > 0.0);
        assert_spectrum_eq(batch.weights[1], Spectrum::new(0.5));
    }

    #[test]
    fn nested_bsdf_never_sees_inconsistent_directions() {
        let tilted = Vector3f::new(0.8, 0.0, 0.6);
        let bsdf = NormalMapBSDF::new(
            Arc::new(FrontOnly),
            ConstantTexture::arc(encode(tilted)),
            1.0,
        );
        let ctx = BSDFContext::default();
        let si = SurfaceInteraction::default();
        let wo = Vector3f::new(-1.0, 0.0, 0.3).normalize();
        assert!(bsdf.eval(&ctx, &si, &wo, true).is_black());
        assert_eq!(bsdf.pdf(&ctx, &si, &wo, true), 0.0);
    }

    #[test]
    fn inactive_lane_is_zero() {
        let bsdf = NormalMapBSDF::new(Arc::new(FrontOnly), ConstantTexture::arc_float(0.5), 1.0);
        let ctx = BSDFContext::default();
        let si = SurfaceInteraction::default();
        let wo = Vector3f::new(0.0, 0.0, -1.0);
        assert!(bsdf.eval(&ctx, &si, &wo, false).is_black());
        assert_eq!(bsdf.pdf(&ctx, &si, &wo, false), 0.0);
        let (_, weight) = bsdf.sample(&ctx, &si, 0.5, &Point2f::new(0.5, 0.5), false);
        assert!(weight.is_black());
    }

    #[test]
    fn non_positive_scale_keeps_geometric_normal() {
        for scale in [0.0, -2.0] {
            let bsdf = normal_map(Spectrum::from_rgb(&[0.9, 0.5, 0.8]), scale);
            let frame = bsdf.perturbed_frame(&SurfaceInteraction::default(), true);
            assert_vector_eq(frame.n, Vector3f::new(0.0, 0.0, 1.0));
            assert!(frame.orthonormality_error() < 1e-5);
        }
    }

    #[test]
    fn degenerate_inputs_stay_orthonormal() {
        // Zero length normal.
        let bsdf = normal_map(Spectrum::new(0.5), 1.0);
        let frame = bsdf.perturbed_frame(&SurfaceInteraction::default(), true);
        assert_vector_eq(frame.n, Vector3f::new(0.0, 0.0, 1.0));
        assert!(frame.orthonormality_error() < 1e-5);

        // Tangent parallel to the normal.
        let bsdf = normal_map(encode(Vector3f::new(1.0, 0.0, 0.0)), 1.0);
        let frame = bsdf.perturbed_frame(&SurfaceInteraction::default(), true);
        assert_vector_eq(frame.n, Vector3f::new(1.0, 0.0, 0.0));
        assert!(frame.orthonormality_error() < 1e-5);

        // Missing tangent.
        let si = SurfaceInteraction {
            dpdu: Vector3f::zero(),
            ..SurfaceInteraction::default()
        };
        let bsdf = normal_map(Spectrum::from_rgb(&[0.5, 0.5, 1.0]), 1.0);
        assert!(bsdf.perturbed_frame(&si, true).orthonormality_error() < 1e-5);
    }

    #[test]
    fn tangent_direction_survives_extreme_magnitudes() {
        let bsdf = normal_map(Spectrum::from_rgb(&[0.5, 0.5, 1.0]), 1.0);
        for (dpdu, s) in [
            (
                Vector3f::new(1e30, 1e30, 0.0),
                Vector3f::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
            ),
            (Vector3f::new(1e-30, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0)),
        ] {
            let si = SurfaceInteraction {
                dpdu,
                ..SurfaceInteraction::default()
            };
            let frame = bsdf.perturbed_frame(&si, true);
            assert_vector_eq(frame.s, s);
            assert_vector_eq(frame.n, Vector3f::new(0.0, 0.0, 1.0));
        }
    }

    /// Inner BSDF that only responds to importance transport.
    struct ImportanceOnly;

    impl fmt::Display for ImportanceOnly {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ImportanceOnly")
        }
    }

    impl BSDF for ImportanceOnly {
        fn sample(
            &self,
            _ctx: &BSDFContext,
            _si: &SurfaceInteraction,
            _sample1: Float,
            _sample2: &Point2f,
            _active: bool,
        ) -> (BSDFSample, Spectrum) {
            (BSDFSample::default(), Spectrum::ZERO)
        }

        fn eval(
            &self,
            ctx: &BSDFContext,
            _si: &SurfaceInteraction,
            _wo: &Vector3f,
            _active: bool,
        ) -> Spectrum {
            if ctx.mode == TransportMode::Importance {
                Spectrum::ONE
            } else {
                Spectrum::ZERO
            }
        }

        fn pdf(
            &self,
            ctx: &BSDFContext,
            _si: &SurfaceInteraction,
            _wo: &Vector3f,
            _active: bool,
        ) -> Float {
            if ctx.mode == TransportMode::Importance {
                1.0
            } else {
                0.0
            }
        }

        fn albedo(&self, _si: &SurfaceInteraction, _active: bool) -> Spectrum {
            Spectrum::ZERO
        }

        fn components(&self) -> &[BxDFType] {
            &[]
        }
    }

    #[test]
    fn query_context_reaches_nested_bsdf() {
        let bsdf = NormalMapBSDF::new(
            Arc::new(ImportanceOnly),
            ConstantTexture::arc(Spectrum::from_rgb(&[0.5, 0.5, 1.0])),
            1.0,
        );
        let si = SurfaceInteraction::default();
        let wo = Vector3f::new(0.0, 0.6, 0.8);

        let radiance = BSDFContext::new(TransportMode::Radiance);
        assert!(bsdf.eval(&radiance, &si, &wo, true).is_black());
        assert_eq!(bsdf.pdf(&radiance, &si, &wo, true), 0.0);

        let importance = BSDFContext::new(TransportMode::Importance);
        assert_eq!(bsdf.eval(&importance, &si, &wo, true), Spectrum::ONE);
        assert_eq!(bsdf.pdf(&importance, &si, &wo, true), 1.0);
    }

    /// Normal map that tilts with the uv coordinates.
    fn uv_normal_map() -> NormalMapBSDF {
        let tilted = encode(Vector3f::new(0.6, 0.0, 0.8));
        let normalmap = MixTexture::new(
            ConstantTexture::arc(Spectrum::from_rgb(&[0.5, 0.5, 1.0])),
            ConstantTexture::arc(tilted),
            Arc::new(UVTexture::default()),
        );
        NormalMapBSDF::new(diffuse(), Arc::new(normalmap), 1.0)
    }

    proptest! {
        #[test]
        fn inactive_lanes_do_not_affect_active_lanes(
            lanes in proptest::collection::vec(
                (
                    any::<bool>(),
                    0.0f32..1.0f32,
                    0.0f32..1.0f32,
                    -1.0f32..1.0f32,
                    -1.0f32..1.0f32,
                ),
                1..8,
            ),
        ) {
            let bsdf = uv_normal_map();
            let ctx = BSDFContext::default();
            let active: Vec<bool> = lanes.iter().map(|l| l.0).collect();

            let clean_si: Vec<SurfaceInteraction> = lanes
                .iter()
                .map(|&(_, u, v, _, _)| SurfaceInteraction {
                    uv: Point2f::new(u, v),
                    ..rotated_si()
                })
                .collect();
            let clean_wo: Vec<Vector3f> = lanes
                .iter()
                .map(|&(_, _, _, x, y)| Vector3f::new(x, y, 0.5).normalize())
                .collect();
            let u1: Vec<Float> = lanes.iter().map(|l| l.1).collect();
            let u2: Vec<Point2f> = lanes.iter().map(|l| Point2f::new(l.2, l.1)).collect();

            // Inactive lanes get unusable inputs.
            let noisy_si: Vec<SurfaceInteraction> = clean_si
                .iter()
                .zip(active.iter())
                .map(|(si, &a)| {
                    if a {
                        *si
                    } else {
                        SurfaceInteraction {
                            uv: Point2f::new(Float::NAN, 1e30),
                            dpdu: Vector3f::new(Float::NAN, 0.0, 1e30),
                            ..*si
                        }
                    }
                })
                .collect();
            let noisy_wo: Vec<Vector3f> = clean_wo
                .iter()
                .zip(active.iter())
                .map(|(wo, &a)| if a { *wo } else { Vector3f::new(Float::NAN, 1e30, -1e30) })
                .collect();

            let a = evaluate_bsdf(&bsdf, &ctx, &clean_si, &clean_wo, &active);
            let b = evaluate_bsdf(&bsdf, &ctx, &noisy_si, &noisy_wo, &active);
            prop_assert_eq!(a, b);

            let a = pdf_bsdf(&bsdf, &ctx, &clean_si, &clean_wo, &active);
            let b = pdf_bsdf(&bsdf, &ctx, &noisy_si, &noisy_wo, &active);
            prop_assert_eq!(a, b);

            let a = sample_bsdf(&bsdf, &ctx, &clean_si, &u1, &u2, &active);
            let b = sample_bsdf(&bsdf, &ctx, &noisy_si, &u1, &u2, &active);
            prop_assert_eq!(&a.weights, &b.weights);
            prop_assert_eq!(&a.active, &b.active);
            for i in 0..active.len() {
                if active[i] {
                    prop_assert_eq!(a.samples[i].wo, b.samples[i].wo);
                    prop_assert_eq!(a.samples[i].pdf, b.samples[i].pdf);
                } else {
                    prop_assert!(a.weights[i].is_black());
                    prop_assert!(!a.active[i]);
                }
            }
        }
    }

    #[test]
    fn albedo_uses_unperturbed_interaction() {
        let bsdf = normal_map(encode(Vector3f::new(0.8, 0.0, 0.6)), 1.0);
        assert_eq!(bsdf.albedo(&SurfaceInteraction::default(), true), Spectrum::new(0.5));
    }

    #[test]
    fn construction_requires_one_nested_bsdf() {
        let mut tp = TextureParams::default();
        tp.params.add_rgb_spectrum("normalmap", &[0.5, 0.5, 1.0]);
        assert!(NormalMapBSDF::try_from(&tp).is_err());

        tp.add_nested_bsdf(diffuse());
        let bsdf = NormalMapBSDF::try_from(&tp).expect("valid normal map");
        assert_eq!(bsdf.flags(), BxDFType::REFLECTION | BxDFType::DIFFUSE);
        assert_eq!(bsdf.component_count(), 1);

        tp.add_nested_bsdf(diffuse());
        let err = NormalMapBSDF::try_from(&tp).err().unwrap_or_default();
        assert!(err.contains("single BSDF"));
    }

    #[test]
    fn construction_requires_normal_map() {
        let mut tp = TextureParams::default();
        tp.add_nested_bsdf(diffuse());
        let err = NormalMapBSDF::try_from(&tp).err().unwrap_or_default();
        assert!(err.contains("normalmap"));

        let flat = ConstantTexture::arc(Spectrum::from_rgb(&[0.5, 0.5, 1.0]));
        tp.add_named_texture("bumps", flat);
        tp.params.add_texture("normalmap", &[String::from("bumps")]);
        tp.params.add_float("scale", &[2.0]);
        let bsdf = NormalMapBSDF::try_from(&tp).expect("valid normal map");

        let mut record = TraversalRecord::default();
        bsdf.traverse(&mut record);
        assert_eq!(record.textures, vec!["normalmap"]);
        assert_eq!(record.bsdfs, vec!["nested_bsdf"]);
        assert_eq!(record.parameter("scale"), Some(2.0));
        assert!(bsdf
            .to_string()
            .starts_with("NormalMapBSDF[\n  nested_bsdf = DiffuseBSDF["));
    }
}
