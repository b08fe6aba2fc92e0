//! Public models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The model module
//! re-exports the core types its callers need and provides a thin
//! [`twine_core::Model`] adapter that delegates to the core API.

pub mod geometry;
