#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the interpolation module.
pub mod error;

/// barycentric Lagrange polynomial interpolation module.
pub mod lagrange;

pub use crate::error::InterpolatorError;
pub use crate::lagrange::Lagrange;
