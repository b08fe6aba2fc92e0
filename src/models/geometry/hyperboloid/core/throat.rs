//! Throat (waist) metrics for a generated ruling family.

use super::LineSegment;

/// Closest approach of the rulings to the z axis.
///
/// For a twisted circular cylinder of radius `r` this is the hyperboloid's
/// throat circle, `r·|cos(θ/2)|` at `z = 0`. It shrinks to zero as the surface
/// degenerates into a cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throat {
    /// Distance from the z axis.
    pub radius: f64,

    /// Height at which the closest approach occurs.
    pub z: f64,

    /// Index of the ruling achieving the minimum (first one on ties).
    pub ruling: usize,
}

/// Finds the throat of a ruling family.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn throat(segments: &[LineSegment]) -> Option<Throat> {
    segments
        .iter()
        .enumerate()
        .map(|(ruling, segment)| closest_approach(ruling, segment))
        .reduce(|best, next| if next.radius < best.radius { next } else { best })
}

/// Closest point of one segment to the z axis.
fn closest_approach(ruling: usize, segment: &LineSegment) -> Throat {
    let bottom = segment.bottom();
    let d = segment.direction();

    // Minimize |b + t·d|² over the horizontal components, t ∈ [0, 1].
    let dd = d.x * d.x + d.y * d.y;
    let t = if dd > 0.0 {
        (-(bottom.x * d.x + bottom.y * d.y) / dd).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let p = segment.point_at(t);
    Throat {
        radius: p.x.hypot(p.y),
        z: p.z,
        ruling,
    }
}
