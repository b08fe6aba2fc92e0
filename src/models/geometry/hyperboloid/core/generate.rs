//! Ruling generation.
//!
//! Each ruling joins a point on the fixed bottom ellipse to a point on the top
//! ellipse whose sampling angle is shifted by the twist. Shifting the angle,
//! rather than rotating the top ellipse rigidly, is what makes the family of
//! straight lines envelop a hyperboloid.
//!
//! When the waist factor drops below one, every top endpoint slides toward
//! the point reflection of its own bottom endpoint through the origin. At
//! zero every ruling passes through the origin and the surface is the
//! asymptotic double cone, whatever the twist.

use std::f64::consts::TAU;

use nalgebra::Point3;

use crate::support::color::Gradient;

use super::{LineSegment, ShapeConstants, SurfaceParams};

/// Sampling angle of ruling `index` out of `count`.
#[allow(clippy::cast_precision_loss)]
pub(super) fn sample_angle(index: usize, count: usize) -> f64 {
    index as f64 * (TAU / count as f64)
}

/// Computes all rulings for one frame, ordered by sampling angle.
#[allow(clippy::cast_precision_loss)]
pub(super) fn rulings(
    shape: &ShapeConstants,
    gradient: &Gradient,
    params: &SurfaceParams,
) -> Vec<LineSegment> {
    let count = shape.segment_count();
    let (rx, ry) = (shape.radius_x(), shape.radius_y());
    let half = shape.half_height();
    let twist = params.twist_radians();
    let waist = params.waist();

    (0..count)
        .map(|i| {
            let alpha = sample_angle(i, count);

            let bottom = Point3::new(rx * alpha.cos(), ry * alpha.sin(), -half);

            let shifted = alpha + twist;
            let mut top = Point3::new(rx * shifted.cos(), ry * shifted.sin(), half);

            if waist < 1.0 {
                let antipode = -bottom.coords;
                top = Point3::from(antipode * (1.0 - waist) + top.coords * waist);
            }

            let color = gradient.at(i as f64 / count as f64);

            LineSegment::new(bottom, top, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use crate::models::geometry::hyperboloid::core::test_support::{
        circle, params_deg, params_rad, reference_shape,
    };

    fn generate(shape: &ShapeConstants, params: &SurfaceParams) -> Vec<LineSegment> {
        rulings(shape, &Gradient::default(), params)
    }

    #[test]
    fn reference_cylinder_first_ruling() {
        let segs = generate(&reference_shape(), &params_rad(0.0, 1.0));

        assert_eq!(segs[0].bottom(), Point3::new(3.0, 0.0, -2.5));
        assert_eq!(segs[0].top(), Point3::new(3.0, 0.0, 2.5));
    }

    #[test]
    fn quarter_twist_first_ruling() {
        let segs = generate(&reference_shape(), &params_rad(FRAC_PI_2, 1.0));

        assert_eq!(segs[0].bottom(), Point3::new(3.0, 0.0, -2.5));

        let top = segs[0].top();
        assert_relative_eq!(top.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(top.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(top.z, 2.5);
    }

    #[test]
    fn collapsed_waist_is_antipode_for_any_twist() {
        for twist in [0.0, 0.3, FRAC_PI_2, PI, 1.92, 5.0, -2.0] {
            let segs = generate(&reference_shape(), &params_rad(twist, 0.0));

            assert_eq!(segs[0].top(), Point3::new(-3.0, 0.0, 2.5));
            for seg in &segs {
                assert_eq!(seg.top().coords, -seg.bottom().coords);
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn untwisted_full_waist_is_cylinder() {
        for shape in [reference_shape(), circle(1.5, 4.0, 7)] {
            let segs = generate(&shape, &params_rad(0.0, 1.0));

            for seg in &segs {
                assert_eq!(seg.top().x, seg.bottom().x);
                assert_eq!(seg.top().y, seg.bottom().y);
                assert_relative_eq!(seg.top().z - seg.bottom().z, shape.height());
            }
        }
    }

    #[test]
    fn circular_cylinder_rulings_are_vertical() {
        let segs = generate(&circle(2.0, 3.0, 12), &params_rad(0.0, 1.0));
        for seg in &segs {
            let d = seg.direction();
            assert_relative_eq!(d.x, 0.0);
            assert_relative_eq!(d.y, 0.0);
        }
    }

    #[test]
    fn length_matches_segment_count() {
        for n in [3, 4, 17, 48, 200] {
            let shape = ShapeConstants::new(3.0, 2.0, 5.0, n).unwrap();
            assert_eq!(generate(&shape, &params_deg(110.0, 0.4)).len(), n);
        }
    }

    #[test]
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    fn sampling_angles_cover_full_turn() {
        let shape = reference_shape();
        let n = shape.segment_count();
        let segs = generate(&shape, &params_rad(0.0, 1.0));

        assert_eq!(sample_angle(0, n), 0.0);
        for (i, seg) in segs.iter().enumerate() {
            let alpha = sample_angle(i, n);
            assert!((0.0..TAU).contains(&alpha));
            assert_relative_eq!(alpha, i as f64 * TAU / n as f64, epsilon = 1e-12);

            // The bottom endpoint sits at the sampling angle on the ellipse.
            let b = seg.bottom();
            assert_relative_eq!(b.x, 3.0 * alpha.cos(), epsilon = 1e-12);
            assert_relative_eq!(b.y, 2.0 * alpha.sin(), epsilon = 1e-12);
        }

        let last = sample_angle(n - 1, n);
        assert_relative_eq!(TAU - last, TAU / n as f64, epsilon = 1e-12);
    }

    #[test]
    fn bottom_curve_ignores_parameters() {
        let shape = reference_shape();
        let base = generate(&shape, &params_rad(0.0, 1.0));
        let morphed = generate(&shape, &params_deg(110.0, 0.3));

        for (a, b) in base.iter().zip(&morphed) {
            assert_eq!(a.bottom(), b.bottom());
        }
    }

    #[test]
    fn twist_resamples_rather_than_rotates() {
        // Top endpoints stay on the top ellipse itself, which a rigid rotation
        // of a non-circular ellipse would not do.
        let segs = generate(&reference_shape(), &params_deg(110.0, 1.0));
        for seg in &segs {
            let t = seg.top();
            assert_relative_eq!(t.x * t.x / 9.0 + t.y * t.y / 4.0, 1.0, epsilon = 1e-12);
        }

        let shifted = 110.0_f64.to_radians();
        let top = segs[0].top();
        assert_relative_eq!(top.x, 3.0 * shifted.cos(), epsilon = 1e-12);
        assert_relative_eq!(top.y, 2.0 * shifted.sin(), epsilon = 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn non_finite_twist_passes_through() {
        let shape = reference_shape();
        let base = generate(&shape, &params_rad(0.0, 1.0));

        for twist in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let segs = generate(&shape, &params_rad(twist, 1.0));
            assert_eq!(segs.len(), shape.segment_count());

            for (seg, reference) in segs.iter().zip(&base) {
                assert_eq!(seg.bottom(), reference.bottom());
                assert!(!seg.top().x.is_finite());
                assert!(!seg.top().y.is_finite());
                assert_eq!(seg.top().z, 2.5);
            }
        }
    }

    #[test]
    fn deterministic() {
        let shape = reference_shape();
        let params = params_deg(73.0, 0.61);
        assert_eq!(generate(&shape, &params), generate(&shape, &params));
    }

    #[test]
    fn waist_sweep_is_continuous() {
        let shape = reference_shape();
        let steps = 1000;
        let dw = 1.0 / f64::from(steps);

        // The top endpoint moves linearly in w, so each step is bounded by
        // dw times the distance between the full and collapsed endpoints.
        let full = generate(&shape, &params_deg(110.0, 1.0));
        let collapsed = generate(&shape, &params_deg(110.0, 0.0));
        let max_span = full
            .iter()
            .zip(&collapsed)
            .map(|(a, b)| (a.top() - b.top()).norm())
            .fold(0.0, f64::max);

        let mut prev = full;
        for k in (0..steps).rev() {
            let w = f64::from(k) * dw;
            let next = generate(&shape, &params_deg(110.0, w));
            for (a, b) in prev.iter().zip(&next) {
                let step = (a.top() - b.top()).norm();
                assert!(step <= max_span * dw + 1e-9, "jump of {step} at w={w}");
            }
            prev = next;
        }
    }

    #[test]
    fn colors_follow_gradient_by_index() {
        let shape = reference_shape();
        let gradient = Gradient::default();
        let segs = rulings(&shape, &gradient, &params_rad(0.0, 1.0));

        assert_eq!(segs[0].color(), gradient.start);
        assert_eq!(segs[24].color(), gradient.at(0.5));
        for pair in segs.windows(2) {
            assert!(pair[1].color().g >= pair[0].color().g);
        }
    }
}
