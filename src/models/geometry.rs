//! Geometric surface models.

pub mod hyperboloid;
