//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`color`]: Display colors and gradients for generated geometry.

pub mod color;
pub mod constraint;
