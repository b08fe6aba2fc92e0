//! Twisted-cylinder ruled surface.
//!
//! This module provides a [`twine_core::Model`] implementation for the
//! cylinder → hyperboloid → cone morph. The computational core is in the
//! internal [`core`] module; its input and output types are re-exported here.

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    BoundaryCurve, FiniteLength, LineSegment, ParameterState, Quadric, RuledSurface,
    RulingCount, ShapeConstants, ShapeError, Stage, SurfaceFrame, SurfaceParams, Throat, throat,
};

/// [`Model`] adapter over [`RuledSurface`].
///
/// Takes a [`SurfaceParams`] snapshot and returns the full [`SurfaceFrame`]
/// for it. Generation cannot fail once the shape constants are valid.
///
/// # Example
///
/// ```
/// use hyperboloid_models::models::geometry::hyperboloid::{
///     HyperboloidModel, Quadric, ShapeConstants, Stage,
/// };
/// use twine_core::Model;
///
/// let model = HyperboloidModel::new(ShapeConstants::default());
/// let frame = model.call(&Stage::Hyperboloid.params()).unwrap();
///
/// assert_eq!(frame.segments.len(), 48);
/// assert!(matches!(frame.quadric, Some(Quadric::Hyperboloid { .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HyperboloidModel {
    surface: RuledSurface,
}

impl HyperboloidModel {
    /// Creates a model with the default ruling gradient.
    #[must_use]
    pub fn new(shape: ShapeConstants) -> Self {
        Self::from_surface(RuledSurface::new(shape))
    }

    /// Wraps an existing generator.
    #[must_use]
    pub fn from_surface(surface: RuledSurface) -> Self {
        Self { surface }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn surface(&self) -> &RuledSurface {
        &self.surface
    }
}

impl Model for HyperboloidModel {
    type Input = SurfaceParams;
    type Output = SurfaceFrame;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.surface.frame(input))
    }
}
