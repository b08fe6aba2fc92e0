//! Externally driven surface parameters.

use uom::{
    ConstZero,
    si::{angle::radian, f64::Angle},
};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// An immutable snapshot of the two surface parameters.
///
/// The generator reads both values from a single snapshot, so a frame never
/// mixes a new twist with an old waist factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParams {
    /// Angular offset of the top curve's sampling parameter.
    ///
    /// Meaningful values lie in `[0, 2π)`, but any angle is accepted.
    pub twist: Angle,

    /// Interpolation weight between the degenerate cone (0) and the
    /// untouched hyperboloid or cylinder (1).
    pub waist_factor: Constrained<f64, UnitInterval>,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self::cylinder()
    }
}

impl SurfaceParams {
    /// Creates a parameter snapshot.
    #[must_use]
    pub fn new(twist: Angle, waist_factor: Constrained<f64, UnitInterval>) -> Self {
        Self {
            twist,
            waist_factor,
        }
    }

    /// Zero twist and full waist: a right cylinder.
    #[must_use]
    pub fn cylinder() -> Self {
        Self::new(Angle::ZERO, UnitInterval::one())
    }

    /// Returns the twist in radians.
    #[must_use]
    pub fn twist_radians(&self) -> f64 {
        self.twist.get::<radian>()
    }

    /// Returns the raw waist factor.
    #[must_use]
    pub fn waist(&self) -> f64 {
        *self.waist_factor.as_ref()
    }

    /// Linearly interpolates both parameters from `self` (at `t = 0`) to
    /// `other` (at `t = 1`).
    ///
    /// ```
    /// use hyperboloid_models::models::geometry::hyperboloid::SurfaceParams;
    /// use hyperboloid_models::support::constraint::UnitInterval;
    /// use uom::si::{angle::degree, f64::Angle};
    ///
    /// let start = SurfaceParams::cylinder();
    /// let end = SurfaceParams::new(Angle::new::<degree>(110.0), UnitInterval::zero());
    ///
    /// let mid = start.lerp(&end, UnitInterval::new(0.5).unwrap());
    /// assert!((mid.twist.get::<degree>() - 55.0).abs() < 1e-9);
    /// assert!((mid.waist() - 0.5).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn lerp(&self, other: &Self, t: Constrained<f64, UnitInterval>) -> Self {
        let t = t.into_inner();
        let twist = self.twist * (1.0 - t) + other.twist * t;
        let waist = (1.0 - t) * self.waist() + t * other.waist();

        // A convex combination of unit values can only leave [0, 1] by rounding.
        let waist_factor = UnitInterval::clamp(waist).unwrap_or(other.waist_factor);

        Self::new(twist, waist_factor)
    }
}

/// Mutable parameter storage owned by the orchestrator.
///
/// Setters are plain assignments. Every assignment bumps a revision counter,
/// which callers can poll to decide whether a frame needs regenerating.
/// Two states are equal when they hold the same parameters, whatever their
/// revision counts.
///
/// # Validation policy
///
/// The waist factor is stored as a [`Constrained<f64, UnitInterval>`], so
/// range checking happens when the caller builds that value.
/// [`ParameterState::set_waist_factor_clamped`] is available for callers that
/// prefer to clamp raw values instead.
/// Twist is not validated; a non-finite twist produces non-finite top
/// endpoints and no [`Quadric`](crate::models::geometry::hyperboloid::Quadric).
///
/// # Example
///
/// ```
/// use hyperboloid_models::models::geometry::hyperboloid::ParameterState;
/// use uom::si::{angle::degree, f64::Angle};
///
/// let mut state = ParameterState::new();
/// let seen = state.revision();
///
/// state.set_twist(Angle::new::<degree>(110.0));
/// state.set_waist_factor_clamped(-0.25).unwrap();
///
/// assert_ne!(state.revision(), seen);
/// assert_eq!(state.waist_factor().into_inner(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ParameterState {
    params: SurfaceParams,
    revision: u64,
}

impl PartialEq for ParameterState {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Default for ParameterState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterState {
    /// Creates state for a cylinder: twist 0 and waist factor 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_params(SurfaceParams::cylinder())
    }

    /// Creates state holding the given parameters.
    #[must_use]
    pub fn from_params(params: SurfaceParams) -> Self {
        Self {
            params,
            revision: 0,
        }
    }

    /// Returns the current twist angle.
    #[must_use]
    pub fn twist(&self) -> Angle {
        self.params.twist
    }

    /// Returns the current waist factor.
    #[must_use]
    pub fn waist_factor(&self) -> Constrained<f64, UnitInterval> {
        self.params.waist_factor
    }

    /// Returns a consistent copy of both parameters.
    #[must_use]
    pub fn snapshot(&self) -> SurfaceParams {
        self.params
    }

    /// Returns the number of assignments made since construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Assigns the twist angle.
    pub fn set_twist(&mut self, twist: Angle) {
        self.params.twist = twist;
        self.bump();
    }

    /// Assigns the waist factor.
    pub fn set_waist_factor(&mut self, waist_factor: Constrained<f64, UnitInterval>) {
        self.params.waist_factor = waist_factor;
        self.bump();
    }

    /// Assigns both parameters at once.
    pub fn set(&mut self, params: SurfaceParams) {
        self.params = params;
        self.bump();
    }

    /// Clamps a raw value to `[0, 1]` and assigns it as the waist factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN. The state is left unchanged.
    pub fn set_waist_factor_clamped(&mut self, value: f64) -> ConstraintResult<()> {
        let waist_factor = UnitInterval::clamp(value)?;
        self.set_waist_factor(waist_factor);
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
