use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::support::constraint::UnitInterval;

use super::{ShapeConstants, SurfaceParams};

/// The reference scene: 3 × 2 ellipse, height 5, 48 rulings.
pub(super) fn reference_shape() -> ShapeConstants {
    ShapeConstants::default()
}

/// Circular cross-section with the given radius, height, and ruling count.
pub(super) fn circle(radius: f64, height: f64, segment_count: usize) -> ShapeConstants {
    ShapeConstants::new(radius, radius, height, segment_count).unwrap()
}

pub(super) fn params_rad(twist: f64, waist: f64) -> SurfaceParams {
    SurfaceParams::new(Angle::new::<radian>(twist), UnitInterval::new(waist).unwrap())
}

pub(super) fn params_deg(twist: f64, waist: f64) -> SurfaceParams {
    SurfaceParams::new(Angle::new::<degree>(twist), UnitInterval::new(waist).unwrap())
}
