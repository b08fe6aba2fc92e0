//! Per-frame output bundle.

use super::{LineSegment, Quadric, Throat};

/// Everything produced for one frame.
///
/// Segments are ordered by sampling angle, starting at angle zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFrame {
    /// One ruling per sampled angle.
    pub segments: Vec<LineSegment>,

    /// Closest approach of the rulings to the axis.
    ///
    /// Always present for generator output, which has at least three rulings.
    pub throat: Option<Throat>,

    /// Implicit surface carrying the rulings, when one exists.
    pub quadric: Option<Quadric>,
}
