//! Configuration for a seeding run.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::SeedingError;
use super::strategy::SeedStrategy;

/// Everything a seeding run needs besides its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedingConfig {
    /// Strategy used to populate the clusters.
    pub strategy: SeedStrategy,
    /// Instances placed in each cluster before refinement.
    pub seed_amt: usize,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub rng_seed: Option<u64>,
}

impl SeedingConfig {
    pub fn new(strategy: SeedStrategy, seed_amt: usize) -> Self {
        Self {
            strategy,
            seed_amt,
            rng_seed: None,
        }
    }

    pub fn with_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed_amt(mut self, seed_amt: usize) -> Self {
        self.seed_amt = seed_amt;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SeedingError> {
        if self.seed_amt == 0 {
            return Err(SeedingError::InvalidSeedAmount);
        }
        Ok(())
    }

    /// Builds the random source for one run.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self::new(SeedStrategy::Random, 1)
    }
}
