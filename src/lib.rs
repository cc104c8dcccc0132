//! seriate - Seeding and Episode Relations for Interval Analysis on Timed Events
//!
//! Tools for symbolic time-interval data (named events such as `A [0, 8]`):
//! initial cluster seeding for instance classification and a windowed test
//! for whether two interval sets interact.

pub mod distance;
pub mod interaction;
pub mod model;
pub mod seeding;

pub use distance::{Distance, DistanceMatrix};
pub use interaction::{interact, IntervalInteraction};
pub use model::{Cluster, Instance, Interval};
pub use seeding::{ClusterSeeder, SeedStrategy, SeedingConfig, SeedingError};

/// Integer time coordinate used by intervals.
pub type Timestamp = i64;
