//! Uniformly random seeding.

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::error::SeedingError;
use super::strategy::SeedingStrategy;
use crate::model::{Cluster, Instance};

/// Deals a shuffled copy of the pool out to the clusters in order.
///
/// Each cluster receives the next `seed_amt` instances, so no instance lands
/// in more than one cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInit;

impl SeedingStrategy for RandomInit {
    fn pick_centers<'a>(
        &self,
        clusters: &mut [Cluster<'a>],
        instances: &'a [Instance],
        seed_amt: usize,
        rng: &mut dyn RngCore,
    ) -> Result<(), SeedingError> {
        if seed_amt == 0 {
            return Err(SeedingError::InvalidSeedAmount);
        }
        let required = clusters.len().saturating_mul(seed_amt);
        if required > instances.len() {
            return Err(SeedingError::InsufficientInstances {
                required,
                available: instances.len(),
            });
        }

        let mut pool: Vec<&'a Instance> = instances.iter().collect();
        pool.shuffle(rng);

        for (cluster, chunk) in clusters.iter_mut().zip(pool.chunks(seed_amt)) {
            for &instance in chunk {
                cluster.add(instance);
            }
        }
        debug!(clusters = clusters.len(), seed_amt, "random seeding done");
        Ok(())
    }

    fn name(&self) -> &str {
        "random"
    }
}
