//! Data entities shared by seeding and interaction analysis.

mod cluster;
mod error;
mod filter;
mod instance;
mod interval;

pub use cluster::Cluster;
pub use error::IntervalError;
pub use filter::PropertyFilter;
pub use instance::{Instance, Symbol, WeightedObject};
pub use interval::Interval;
