//! Display colors for generated geometry.
//!
//! Colors are plain linear RGB triples with components in `[0, 1]`.
//! Rulings are tinted along a two-stop [`Gradient`] indexed by their position
//! around the circumference.

use crate::support::constraint::{Constrained, UnitInterval};

/// A linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Light blue, `#58C4DD`.
pub const BLUE: Rgb = Rgb::from_hex(0x58_C4_DD);

/// Blue-green, `#5CD0B3`.
pub const TEAL: Rgb = Rgb::from_hex(0x5C_D0_B3);

/// Pure white, `#FFFFFF`.
pub const WHITE: Rgb = Rgb::from_hex(0xFF_FF_FF);

impl Rgb {
    /// Creates a color from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// use hyperboloid_models::support::color::Rgb;
    ///
    /// let c = Rgb::from_hex(0xFF_00_80);
    /// assert_eq!(c.r, 1.0);
    /// assert_eq!(c.g, 0.0);
    /// assert!((c.b - 128.0 / 255.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
        }
    }

    /// Returns the packed `0xRRGGBB` value, rounding each channel.
    ///
    /// ```
    /// use hyperboloid_models::support::color::{BLUE, Gradient, TEAL};
    ///
    /// assert_eq!(BLUE.to_hex(), 0x58_C4_DD);
    /// assert_eq!(Gradient::default().at(1.0).to_hex(), TEAL.to_hex());
    /// ```
    #[must_use]
    pub fn to_hex(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Linearly interpolates each channel from `self` to `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: Constrained<f64, UnitInterval>) -> Self {
        let t = t.into_inner();
        let mix = |a: f64, b: f64| (1.0 - t) * a + t * b;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// A two-stop color gradient.
///
/// The default runs from [`BLUE`] to [`TEAL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: BLUE,
            end: TEAL,
        }
    }
}

impl Gradient {
    /// Creates a gradient between two colors.
    #[must_use]
    pub fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Returns the color at position `t`.
    ///
    /// Positions outside `[0, 1]` are clamped to the nearest stop.
    /// A NaN position maps to the start color.
    ///
    /// ```
    /// use hyperboloid_models::support::color::{BLUE, Gradient, TEAL};
    ///
    /// let g = Gradient::default();
    /// assert_eq!(g.at(0.0), BLUE);
    /// assert_eq!(g.at(1.0), TEAL);
    /// assert_eq!(g.at(7.0), TEAL);
    /// ```
    #[must_use]
    pub fn at(&self, t: f64) -> Rgb {
        let t = UnitInterval::clamp(t).unwrap_or_else(|_| UnitInterval::zero());
        self.start.lerp(self.end, t)
    }
}
