use nalgebra::{Point3, Vector3};

use crate::support::color::Rgb;

/// One ruling line: a straight segment from the bottom curve to the top endpoint.
///
/// Segments are produced fresh for every frame and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    bottom: Point3<f64>,
    top: Point3<f64>,
    color: Rgb,
}

impl LineSegment {
    pub(super) fn new(bottom: Point3<f64>, top: Point3<f64>, color: Rgb) -> Self {
        Self { bottom, top, color }
    }

    /// Endpoint on the bottom boundary curve.
    #[must_use]
    pub fn bottom(&self) -> Point3<f64> {
        self.bottom
    }

    /// Upper endpoint, after twist and waist collapse.
    #[must_use]
    pub fn top(&self) -> Point3<f64> {
        self.top
    }

    /// Display color.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Vector from the bottom endpoint to the top endpoint.
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.top - self.bottom
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Point at parameter `t` along the segment (`0` = bottom, `1` = top).
    ///
    /// Values outside `[0, 1]` extrapolate along the ruling's line.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        Point3::from(self.bottom.coords * (1.0 - t) + self.top.coords * t)
    }
}
