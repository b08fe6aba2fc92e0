//! Implicit quadric carrying the rulings.
//!
//! In coordinates scaled by the semi-axes, a twist of `θ` puts every point of
//! a ruling at squared distance `cos²(θ/2) + s² sin²(θ/2)` from the axis,
//! where `s = z / (h/2)`. That is the elliptic hyperboloid
//!
//! ```text
//! x²/a² + y²/b² − z²/c² = 1,   a = rx·|cos(θ/2)|,  b = ry·|cos(θ/2)|,  c = (h/2)·|cot(θ/2)|
//! ```
//!
//! which degenerates to the cylinder at `θ = 0` and to the double cone
//! `x²/rx² + y²/ry² − z²/(h/2)² = 0` at `θ = π`. A fully collapsed waist
//! yields the same cone for any twist. Partially collapsed waists do not lie
//! on a quadric.

use std::fmt;

use nalgebra::Point3;

use super::{ShapeConstants, SurfaceParams};

/// Below this magnitude `sin(θ/2)` or `cos(θ/2)` is treated as zero.
const DEGENERACY_TOL: f64 = 1e-12;

/// Axis-aligned quadric surface centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quadric {
    /// `x²/a² + y²/b² = 1`
    Cylinder { a: f64, b: f64 },

    /// `x²/a² + y²/b² − z²/c² = 1`
    Hyperboloid { a: f64, b: f64, c: f64 },

    /// `x²/a² + y²/b² − z²/c² = 0`
    Cone { a: f64, b: f64, c: f64 },
}

impl Quadric {
    /// Returns the quadric containing every ruling for these parameters.
    ///
    /// Returns `None` when `0 < waist factor < 1` or the twist is not finite.
    ///
    /// ```
    /// use hyperboloid_models::models::geometry::hyperboloid::{
    ///     Quadric, ShapeConstants, Stage,
    /// };
    ///
    /// let shape = ShapeConstants::default();
    /// let cone = Quadric::of(&shape, &Stage::AsymptoticCone.params());
    /// assert_eq!(cone, Some(Quadric::Cone { a: 3.0, b: 2.0, c: 2.5 }));
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn of(shape: &ShapeConstants, params: &SurfaceParams) -> Option<Self> {
        let (rx, ry, half) = (shape.radius_x(), shape.radius_y(), shape.half_height());
        let twist = params.twist_radians();
        let waist = params.waist();

        if !twist.is_finite() {
            return None;
        }

        if waist == 0.0 {
            return Some(Self::Cone {
                a: rx,
                b: ry,
                c: half,
            });
        }
        if waist != 1.0 {
            return None;
        }

        let (sin, cos) = (twist / 2.0).sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());

        Some(if sin < DEGENERACY_TOL {
            Self::Cylinder { a: rx, b: ry }
        } else if cos < DEGENERACY_TOL {
            Self::Cone {
                a: rx,
                b: ry,
                c: half,
            }
        } else {
            Self::Hyperboloid {
                a: rx * cos,
                b: ry * cos,
                c: half * cos / sin,
            }
        })
    }

    /// Evaluates the implicit equation at `p`; zero on the surface.
    #[must_use]
    pub fn residual(&self, p: &Point3<f64>) -> f64 {
        let planar = |a: f64, b: f64| (p.x / a).powi(2) + (p.y / b).powi(2);
        match *self {
            Self::Cylinder { a, b } => planar(a, b) - 1.0,
            Self::Hyperboloid { a, b, c } => planar(a, b) - (p.z / c).powi(2) - 1.0,
            Self::Cone { a, b, c } => planar(a, b) - (p.z / c).powi(2),
        }
    }
}

/// Formats the equation with squared denominators, e.g.
/// `x^2/9.000 + y^2/4.000 - z^2/6.250 = 0`.
impl fmt::Display for Quadric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Cylinder { a, b } => write!(f, "x^2/{:.3} + y^2/{:.3} = 1", a * a, b * b),
            Self::Hyperboloid { a, b, c } => write!(
                f,
                "x^2/{:.3} + y^2/{:.3} - z^2/{:.3} = 1",
                a * a,
                b * b,
                c * c
            ),
            Self::Cone { a, b, c } => write!(
                f,
                "x^2/{:.3} + y^2/{:.3} - z^2/{:.3} = 0",
                a * a,
                b * b,
                c * c
            ),
        }
    }
}
