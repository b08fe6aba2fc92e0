//! Fixed shape constants of a ruled surface.

use thiserror::Error;

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, ConstraintResult, StrictlyPositive,
};

/// Marker type enforcing a usable number of ruling lines.
///
/// A surface needs at least three rulings to enclose any area, so the
/// minimum is [`RulingCount::MIN`].
///
/// ```
/// use hyperboloid_models::models::geometry::hyperboloid::RulingCount;
///
/// assert!(RulingCount::new(3).is_ok());
/// assert!(RulingCount::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RulingCount;

impl RulingCount {
    /// Smallest accepted ruling count.
    pub const MIN: usize = 3;

    /// Constructs a [`Constrained<usize, RulingCount>`] if `value >= MIN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] for fewer than three rulings.
    pub fn new(value: usize) -> ConstraintResult<Constrained<usize, RulingCount>> {
        Constrained::<usize, RulingCount>::new(value)
    }
}

impl Constraint<usize> for RulingCount {
    fn check(value: &usize) -> Result<(), ConstraintError> {
        if *value < Self::MIN {
            Err(ConstraintError::BelowMinimum)
        } else {
            Ok(())
        }
    }
}

/// Marker type enforcing a finite, strictly positive length.
///
/// Radii and height use this constraint. Infinite lengths are rejected as
/// [`ConstraintError::AboveMaximum`], so collapsing a ruling never multiplies
/// an infinite coordinate by zero.
///
/// ```
/// use hyperboloid_models::models::geometry::hyperboloid::FiniteLength;
///
/// assert!(FiniteLength::new(2.5).is_ok());
/// assert!(FiniteLength::new(0.0).is_err());
/// assert!(FiniteLength::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FiniteLength;

impl FiniteLength {
    /// Constructs a [`Constrained<f64, FiniteLength>`] if the value is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, NaN, or infinite.
    pub fn new(value: f64) -> ConstraintResult<Constrained<f64, FiniteLength>> {
        Constrained::<f64, FiniteLength>::new(value)
    }
}

impl Constraint<f64> for FiniteLength {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        <StrictlyPositive as Constraint<f64>>::check(value)?;
        if value.is_finite() {
            Ok(())
        } else {
            Err(ConstraintError::AboveMaximum)
        }
    }
}

/// Errors returned when shape constants are invalid.
///
/// Each variant names the offending field and carries the violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("invalid x semi-axis")]
    RadiusX(#[source] ConstraintError),

    #[error("invalid y semi-axis")]
    RadiusY(#[source] ConstraintError),

    #[error("invalid height")]
    Height(#[source] ConstraintError),

    #[error("invalid segment count")]
    SegmentCount(#[source] ConstraintError),
}

/// Immutable dimensions of the surface, set once at scene setup.
///
/// The two boundary ellipses share semi-axes `radius_x` and `radius_y` and
/// sit at `z = ±height / 2`. `segment_count` rulings are sampled around the
/// circumference.
///
/// The default matches the reference scene: a 3 × 2 ellipse, height 5,
/// and 48 rulings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConstants {
    radius_x: f64,
    radius_y: f64,
    height: f64,
    segment_count: usize,
}

impl Default for ShapeConstants {
    fn default() -> Self {
        Self {
            radius_x: 3.0,
            radius_y: 2.0,
            height: 5.0,
            segment_count: 48,
        }
    }
}

impl ShapeConstants {
    /// Constructs validated shape constants.
    ///
    /// Lengths must be finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] naming the first invalid field.
    /// An infinite length is reported as [`ConstraintError::AboveMaximum`].
    pub fn new(
        radius_x: f64,
        radius_y: f64,
        height: f64,
        segment_count: usize,
    ) -> Result<Self, ShapeError> {
        let radius_x = FiniteLength::new(radius_x).map_err(ShapeError::RadiusX)?;
        let radius_y = FiniteLength::new(radius_y).map_err(ShapeError::RadiusY)?;
        let height = FiniteLength::new(height).map_err(ShapeError::Height)?;
        let segment_count = RulingCount::new(segment_count).map_err(ShapeError::SegmentCount)?;
        Ok(Self::from_constrained(
            radius_x,
            radius_y,
            height,
            segment_count,
        ))
    }

    /// Constructs shape constants from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        radius_x: Constrained<f64, FiniteLength>,
        radius_y: Constrained<f64, FiniteLength>,
        height: Constrained<f64, FiniteLength>,
        segment_count: Constrained<usize, RulingCount>,
    ) -> Self {
        Self {
            radius_x: radius_x.into_inner(),
            radius_y: radius_y.into_inner(),
            height: height.into_inner(),
            segment_count: segment_count.into_inner(),
        }
    }

    /// Returns the semi-axis along x.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    /// Returns the semi-axis along y.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    /// Returns the vertical separation between the boundary curves.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the z offset of the top curve (the bottom curve sits at its negation).
    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Returns the number of rulings.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }
}
