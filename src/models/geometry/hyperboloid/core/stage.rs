//! Reference parameter presets for the cylinder → hyperboloid → cone morph.

use uom::{
    ConstZero,
    si::{angle::degree, f64::Angle},
};

use crate::support::constraint::UnitInterval;

use super::SurfaceParams;

/// The three key shapes of the reference morph, in playback order.
///
/// An orchestrator animates between consecutive stages with
/// [`SurfaceParams::lerp`].
///
/// ```
/// use hyperboloid_models::models::geometry::hyperboloid::Stage;
///
/// assert_eq!(Stage::Cylinder.next(), Some(Stage::Hyperboloid));
/// assert_eq!(Stage::AsymptoticCone.next(), None);
/// assert!(Stage::Hyperboloid.shows_boundary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Untwisted rulings between congruent ellipses.
    Cylinder,

    /// Twisted rulings enveloping a one-sheet hyperboloid.
    Hyperboloid,

    /// Every ruling collapsed through the origin.
    AsymptoticCone,
}

impl Stage {
    /// All stages in playback order.
    pub const ALL: [Stage; 3] = [Stage::Cylinder, Stage::Hyperboloid, Stage::AsymptoticCone];

    /// Twist reached at the end of the cylinder → hyperboloid transition.
    pub const TARGET_TWIST_DEGREES: f64 = 110.0;

    /// Parameters that define this stage.
    #[must_use]
    pub fn params(self) -> SurfaceParams {
        let target = Angle::new::<degree>(Self::TARGET_TWIST_DEGREES);
        match self {
            Self::Cylinder => SurfaceParams::new(Angle::ZERO, UnitInterval::one()),
            Self::Hyperboloid => SurfaceParams::new(target, UnitInterval::one()),
            Self::AsymptoticCone => SurfaceParams::new(target, UnitInterval::zero()),
        }
    }

    /// Whether the boundary ellipses are drawn as an overlay at this stage.
    #[must_use]
    pub fn shows_boundary(self) -> bool {
        matches!(self, Self::Hyperboloid)
    }

    /// The stage that follows this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Cylinder => Some(Self::Hyperboloid),
            Self::Hyperboloid => Some(Self::AsymptoticCone),
            Self::AsymptoticCone => None,
        }
    }
}
