//! Cluster seeding: populate an initial partition before refinement.
//!
//! Three strategies share the [`SeedingStrategy`] contract:
//!
//! - [`RandomInit`] deals a shuffled pool out to the clusters.
//! - [`WeightedFarthestInit`] runs k-means++ center selection over a
//!   [`DistanceMatrix`], then fills each cluster with its nearest neighbours.
//! - [`StratifiedInit`] builds one cluster per class label.
//!
//! [`ClusterSeeder`] selects a strategy by its [`SeedStrategy`] tag, owns the
//! random source for the run and logs the outcome. Refinement (e.g. Lloyd
//! iterations) happens outside this crate.

mod config;
mod error;
mod random;
mod strategy;
mod stratified;
mod weighted_farthest;


pub use config::SeedingConfig;
pub use error::SeedingError;
pub use random::RandomInit;
pub use strategy::{SeedStrategy, SeedingStrategy};
pub use stratified::StratifiedInit;
pub use weighted_farthest::WeightedFarthestInit;

use rand::RngCore;
use tracing::info;

use crate::distance::DistanceMatrix;
use crate::model::{Cluster, Instance};

/// Runs one configured seeding strategy.
#[derive(Debug, Clone)]
pub struct ClusterSeeder<'d> {
    config: SeedingConfig,
    distances: Option<&'d DistanceMatrix>,
}

impl<'d> ClusterSeeder<'d> {
    pub fn new(config: SeedingConfig) -> Self {
        Self {
            config,
            distances: None,
        }
    }

    /// Supplies the distance matrix used by weighted-farthest seeding.
    pub fn with_distances(mut self, distances: &'d DistanceMatrix) -> Self {
        self.distances = Some(distances);
        self
    }

    pub fn config(&self) -> &SeedingConfig {
        &self.config
    }

    /// Seeds `clusters` from `instances` using the configured RNG seed.
    pub fn seed<'a>(
        &self,
        clusters: &mut [Cluster<'a>],
        instances: &'a [Instance],
    ) -> Result<(), SeedingError> {
        let mut rng = self.config.rng();
        self.seed_with_rng(clusters, instances, &mut rng)
    }

    /// Seeds `clusters` drawing from a caller-provided random source.
    pub fn seed_with_rng<'a>(
        &self,
        clusters: &mut [Cluster<'a>],
        instances: &'a [Instance],
        rng: &mut dyn RngCore,
    ) -> Result<(), SeedingError> {
        self.config.validate()?;
        let seed_amt = self.config.seed_amt;

        match self.config.strategy {
            SeedStrategy::Random => RandomInit.pick_centers(clusters, instances, seed_amt, rng)?,
            SeedStrategy::WeightedFarthest => {
                let distances = self.distances.ok_or(SeedingError::MissingDistances)?;
                WeightedFarthestInit::new(distances).pick_centers(
                    clusters, instances, seed_amt, rng,
                )?
            }
            SeedStrategy::StratifiedSupervised => {
                StratifiedInit.pick_centers(clusters, instances, seed_amt, rng)?
            }
        }

        info!(
            strategy = %self.config.strategy,
            clusters = clusters.len(),
            seed_amt,
            "clusters seeded"
        );
        Ok(())
    }
}
