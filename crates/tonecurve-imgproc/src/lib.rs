#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// tone curve application module.
pub mod curve;

/// Error types for the image module.
pub mod error;

/// image container module.
pub mod image;

/// lookup tables sampled from interpolated curves.
pub mod lut;

/// module containing parallelization utilities.
pub mod parallel;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
