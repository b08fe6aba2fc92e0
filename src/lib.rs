//! # Hyperboloid Models
//!
//! Ruled-surface models for the classic twisted-cylinder construction:
//! straight rulings between two ellipses that morph from a cylinder, through
//! a one-sheet hyperboloid, to its asymptotic double cone.
//!
//! ## Crate layout
//!
//! - [`models`]: Surface generators and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Usage
//!
//! An orchestrator (an animation timeline, say) owns a
//! [`ParameterState`](models::geometry::hyperboloid::ParameterState), mutates
//! it between frames, and pulls a fresh set of rulings once per frame:
//!
//! ```
//! use hyperboloid_models::models::geometry::hyperboloid::{
//!     ParameterState, RuledSurface, ShapeConstants, Stage,
//! };
//! use hyperboloid_models::support::constraint::UnitInterval;
//!
//! let surface = RuledSurface::new(ShapeConstants::default());
//! let mut state = ParameterState::new();
//!
//! let from = Stage::Hyperboloid.params();
//! let to = Stage::AsymptoticCone.params();
//!
//! for frame in 0..=30 {
//!     let t = UnitInterval::new(f64::from(frame) / 30.0).unwrap();
//!     state.set(from.lerp(&to, t));
//!     let segments = surface.generate_from(&state);
//!     assert_eq!(segments.len(), 48);
//! }
//!
//! // Fully collapsed: every ruling passes through the origin.
//! let last = surface.generate_from(&state);
//! assert_eq!(last[0].top().coords, -last[0].bottom().coords);
//! ```
//!
//! Geometry is recomputed from scratch on every call; no state is kept
//! between frames beyond the parameters themselves.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod models;
pub mod support;
