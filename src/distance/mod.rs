//! Pairwise distances between instances.
//!
//! The metric itself is supplied by the caller through [`Distance`];
//! [`DistanceMatrix`] only stores and validates the resulting table.

mod error;
mod matrix;

pub use error::DistanceError;
pub use matrix::DistanceMatrix;

use crate::model::Instance;

/// A dissimilarity measure between two instances.
///
/// Implementations must be symmetric, non-negative and return `0.0` for an
/// instance compared with itself.
pub trait Distance: Send + Sync {
    fn distance(&self, a: &Instance, b: &Instance) -> f64;
}

impl<F> Distance for F
where
    F: Fn(&Instance, &Instance) -> f64 + Send + Sync,
{
    fn distance(&self, a: &Instance, b: &Instance) -> f64 {
        self(a, b)
    }
}
