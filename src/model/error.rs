use thiserror::Error;

use crate::Timestamp;

/// Errors raised while constructing model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval '{name}' has start {start} after end {end}")]
    InvalidBounds {
        name: String,
        start: Timestamp,
        end: Timestamp,
    },
}
