//! Ruled-surface generation between two coaxial ellipses.
//!
//! Straight rulings join a fixed bottom ellipse to a top ellipse whose
//! sampling angle is offset by a twist. A waist factor collapses each top
//! endpoint toward the reflection of its bottom endpoint through the origin.
//! Together the two parameters morph the surface from a cylinder, through a
//! one-sheet hyperboloid, to its asymptotic double cone.

mod boundary;
mod generate;
mod params;
mod quadric;
mod results;
mod segment;
mod shape;
mod stage;
mod throat;

#[cfg(test)]
mod test_support;

pub use boundary::BoundaryCurve;
pub use params::{ParameterState, SurfaceParams};
pub use quadric::Quadric;
pub use results::SurfaceFrame;
pub use segment::LineSegment;
pub use shape::{FiniteLength, RulingCount, ShapeConstants, ShapeError};
pub use stage::Stage;
pub use throat::{Throat, throat};

use tracing::{debug, trace};
use uom::si::angle::degree;

use crate::support::color::Gradient;

use generate::{rulings, sample_angle};

/// Entry point for generating a ruled surface.
///
/// Holds the fixed shape constants and ruling colors. Every call to
/// [`RuledSurface::generate`] recomputes the full ruling family from scratch;
/// nothing is cached between frames.
///
/// # Example
///
/// ```
/// use hyperboloid_models::models::geometry::hyperboloid::{
///     ParameterState, RuledSurface, ShapeConstants,
/// };
/// use uom::si::{angle::degree, f64::Angle};
///
/// let surface = RuledSurface::new(ShapeConstants::default());
/// let mut state = ParameterState::new();
///
/// state.set_twist(Angle::new::<degree>(110.0));
/// let segments = surface.generate_from(&state);
///
/// assert_eq!(segments.len(), 48);
/// assert_eq!(segments[0].bottom().z, -2.5);
/// assert_eq!(segments[0].top().z, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuledSurface {
    shape: ShapeConstants,
    gradient: Gradient,
}

impl RuledSurface {
    /// Creates a generator with the default ruling gradient.
    #[must_use]
    pub fn new(shape: ShapeConstants) -> Self {
        debug!(
            radius_x = shape.radius_x(),
            radius_y = shape.radius_y(),
            height = shape.height(),
            segment_count = shape.segment_count(),
            "creating ruled surface"
        );
        Self {
            shape,
            gradient: Gradient::default(),
        }
    }

    /// Replaces the ruling color gradient.
    #[must_use]
    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    /// Returns the shape constants.
    #[must_use]
    pub fn shape(&self) -> &ShapeConstants {
        &self.shape
    }

    /// Returns the ruling color gradient.
    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Computes the ordered ruling segments for a parameter snapshot.
    ///
    /// The result always holds exactly `segment_count` segments and depends
    /// only on the shape constants, gradient, and `params`.
    #[must_use]
    pub fn generate(&self, params: &SurfaceParams) -> Vec<LineSegment> {
        trace!(
            twist_deg = params.twist.get::<degree>(),
            waist = params.waist(),
            "generating rulings"
        );
        rulings(&self.shape, &self.gradient, params)
    }

    /// Snapshots `state` and computes its ruling segments.
    #[must_use]
    pub fn generate_from(&self, state: &ParameterState) -> Vec<LineSegment> {
        self.generate(&state.snapshot())
    }

    /// Computes segments together with their throat and carrying quadric.
    #[must_use]
    pub fn frame(&self, params: &SurfaceParams) -> SurfaceFrame {
        let segments = self.generate(params);
        let throat = throat(&segments);
        SurfaceFrame {
            segments,
            throat,
            quadric: Quadric::of(&self.shape, params),
        }
    }

    /// Returns the sampling angle of each ruling, in radians.
    ///
    /// Angles start at zero and step evenly by `2π / segment_count`.
    #[must_use]
    pub fn sample_angles(&self) -> Vec<f64> {
        let count = self.shape.segment_count();
        (0..count).map(|i| sample_angle(i, count)).collect()
    }

    /// Returns the bottom boundary ellipse at `z = -height / 2`.
    #[must_use]
    pub fn bottom_boundary(&self) -> BoundaryCurve {
        self.boundary_at(-self.shape.half_height())
    }

    /// Returns the top boundary ellipse at `z = +height / 2`.
    #[must_use]
    pub fn top_boundary(&self) -> BoundaryCurve {
        self.boundary_at(self.shape.half_height())
    }

    fn boundary_at(&self, z: f64) -> BoundaryCurve {
        BoundaryCurve {
            z,
            radius_x: self.shape.radius_x(),
            radius_y: self.shape.radius_y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{FRAC_PI_2, TAU};

    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use uom::si::{angle::radian, f64::Angle};

    use crate::support::{
        color::{Rgb, WHITE},
        constraint::UnitInterval,
    };
    use super::test_support::{params_deg, params_rad, reference_shape};

    #[test]
    fn reference_scenarios() {
        let surface = RuledSurface::new(reference_shape());

        let cyl = surface.generate(&params_rad(0.0, 1.0));
        assert_eq!(cyl[0].bottom(), Point3::new(3.0, 0.0, -2.5));
        assert_eq!(cyl[0].top(), Point3::new(3.0, 0.0, 2.5));

        let quarter = surface.generate(&params_rad(FRAC_PI_2, 1.0));
        assert_eq!(quarter[0].bottom(), Point3::new(3.0, 0.0, -2.5));
        assert_relative_eq!(quarter[0].top().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(quarter[0].top().y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(quarter[0].top().z, 2.5);

        for twist in [0.0, 1.0, 3.0] {
            let cone = surface.generate(&params_rad(twist, 0.0));
            assert_eq!(cone[0].top(), Point3::new(-3.0, 0.0, 2.5));
        }
    }

    #[test]
    fn generate_from_reads_current_state() {
        let surface = RuledSurface::new(reference_shape());
        let mut state = ParameterState::new();

        let before = surface.generate_from(&state);
        state.set_twist(Angle::new::<radian>(FRAC_PI_2));
        let after = surface.generate_from(&state);

        assert_ne!(before, after);
        assert_eq!(after, surface.generate(&params_rad(FRAC_PI_2, 1.0)));

        state.set_waist_factor(UnitInterval::zero());
        let collapsed = surface.generate_from(&state);
        for seg in &collapsed {
            assert_eq!(seg.top().coords, -seg.bottom().coords);
        }
    }

    #[test]
    fn boundaries_match_shape() {
        let surface = RuledSurface::new(reference_shape());

        let bottom = surface.bottom_boundary();
        let top = surface.top_boundary();
        assert_eq!(
            bottom,
            BoundaryCurve {
                z: -2.5,
                radius_x: 3.0,
                radius_y: 2.0
            }
        );
        assert_eq!(
            top,
            BoundaryCurve {
                z: 2.5,
                radius_x: 3.0,
                radius_y: 2.0
            }
        );

        // Untwisted rulings start and end on the boundary curves.
        let segs = surface.generate(&params_rad(0.0, 1.0));
        for (seg, alpha) in segs.iter().zip(surface.sample_angles()) {
            assert_eq!(seg.bottom(), bottom.point_at(alpha));
            assert_eq!(seg.top(), top.point_at(alpha));
        }
    }

    #[test]
    fn sample_angles_step_evenly() {
        let surface = RuledSurface::new(reference_shape());
        let angles = surface.sample_angles();

        assert_eq!(angles.len(), 48);
        assert_relative_eq!(angles[0], 0.0);
        for pair in angles.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], TAU / 48.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn custom_gradient() {
        let black = Rgb::from_hex(0x00_00_00);
        let surface =
            RuledSurface::new(reference_shape()).with_gradient(Gradient::new(black, WHITE));
        let segs = surface.generate(&params_rad(0.0, 1.0));

        assert_eq!(segs[0].color(), black);
        assert_relative_eq!(segs[12].color().r, 0.25);
    }

    #[test]
    fn frame_bundles_metrics() {
        let surface = RuledSurface::new(reference_shape());

        let frame = surface.frame(&params_deg(110.0, 1.0));
        assert_eq!(frame.segments.len(), 48);
        assert!(frame.throat.is_some());
        assert!(matches!(frame.quadric, Some(Quadric::Hyperboloid { .. })));

        let mid = surface.frame(&params_deg(110.0, 0.5));
        assert_eq!(mid.quadric, None);

        let nan = surface.frame(&params_rad(f64::NAN, 1.0));
        assert_eq!(nan.segments.len(), 48);
        assert_eq!(nan.quadric, None);
    }
}
