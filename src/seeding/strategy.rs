//! Seeding contract and the closed set of strategy names.

use std::fmt::Display;
use std::str::FromStr;

use rand::RngCore;

use super::error::SeedingError;
use crate::model::{Cluster, Instance};

/// Populates clusters with their initial members before refinement.
///
/// Implementations append to `clusters` in place and never touch
/// `instances`. Every precondition is checked up front: on `Err` no cluster
/// has been modified.
pub trait SeedingStrategy {
    /// Places `seed_amt` instances into each of `clusters`.
    ///
    /// # Arguments
    ///
    /// * `clusters` - Target clusters, usually empty
    /// * `instances` - Full instance pool
    /// * `seed_amt` - Instances to place in each cluster
    /// * `rng` - Random source; pass a seeded RNG for reproducible runs
    fn pick_centers<'a>(
        &self,
        clusters: &mut [Cluster<'a>],
        instances: &'a [Instance],
        seed_amt: usize,
        rng: &mut dyn RngCore,
    ) -> Result<(), SeedingError>;

    /// Returns the canonical name of this strategy.
    fn name(&self) -> &str;
}

/// Tag selecting one of the seeding strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SeedStrategy {
    /// Uniformly shuffled pool, dealt out cluster by cluster.
    #[default]
    Random,
    /// k-means++ center selection followed by nearest-neighbour fill.
    WeightedFarthest,
    /// One cluster per class label.
    StratifiedSupervised,
}

impl SeedStrategy {
    pub const ALL: [SeedStrategy; 3] = [
        SeedStrategy::Random,
        SeedStrategy::WeightedFarthest,
        SeedStrategy::StratifiedSupervised,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SeedStrategy::Random => "random",
            SeedStrategy::WeightedFarthest => "weighted-farthest",
            SeedStrategy::StratifiedSupervised => "stratified-supervised",
        }
    }

    /// True if the strategy needs a distance matrix.
    pub const fn needs_distances(&self) -> bool {
        matches!(self, SeedStrategy::WeightedFarthest)
    }
}

impl Display for SeedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedStrategy {
    type Err = SeedingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(SeedStrategy::Random),
            "weighted-farthest" | "kPlusPlus" | "k-means++" => Ok(SeedStrategy::WeightedFarthest),
            "stratified-supervised" | "supervised" => Ok(SeedStrategy::StratifiedSupervised),
            other => Err(SeedingError::UnknownStrategy(other.to_string())),
        }
    }
}
