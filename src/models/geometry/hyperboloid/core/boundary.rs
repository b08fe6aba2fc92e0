use std::f64::consts::TAU;

use nalgebra::Point3;

use crate::support::color::{Rgb, WHITE};

/// An axis-aligned ellipse in a horizontal plane.
///
/// Boundary curves are overlay geometry only. Rulings are computed directly
/// from the shape constants, so the curves do not depend on twist or waist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCurve {
    /// Height of the ellipse's plane.
    pub z: f64,

    /// Semi-axis along x.
    pub radius_x: f64,

    /// Semi-axis along y.
    pub radius_y: f64,
}

impl BoundaryCurve {
    /// Display color for boundary overlays.
    pub const COLOR: Rgb = WHITE;

    /// Point at angle `theta` (radians, counter-clockwise from +x).
    #[must_use]
    pub fn point_at(&self, theta: f64) -> Point3<f64> {
        Point3::new(
            self.radius_x * theta.cos(),
            self.radius_y * theta.sin(),
            self.z,
        )
    }

    /// Returns `n` points evenly spaced in angle, starting at `theta = 0`.
    ///
    /// The polyline is closed implicitly: the last point connects back to
    /// the first. An `n` of zero yields no points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, n: usize) -> Vec<Point3<f64>> {
        let step = TAU / n as f64;
        (0..n).map(|i| self.point_at(i as f64 * step)).collect()
    }
}
