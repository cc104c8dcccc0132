//! k-means++ seeding over a precomputed distance matrix.
//!
//! Centers are chosen one at a time:
//!
//! 1. The first center is drawn uniformly from the pool.
//! 2. Every remaining instance `x` tracks `D(x)`, its distance to the nearest
//!    center chosen so far, updated incrementally against the latest center.
//! 3. The next center is drawn with probability proportional to `D(x)^2`.
//!    When every remaining `D(x)` is zero the draw is uniform instead.
//! 4. Steps 2–3 repeat until there is one center per cluster.
//!
//! Center `i` becomes the first member of cluster `i`. With `seed_amt > 1`,
//! each cluster in turn then takes its `seed_amt - 1` nearest instances that
//! no cluster holds yet, ties broken by pool order.

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, RngCore};
use tracing::{debug, warn};

use super::error::SeedingError;
use super::strategy::SeedingStrategy;
use crate::distance::DistanceMatrix;
use crate::model::{Cluster, Instance};

/// k-means++ seeding. Row `i` of the matrix must describe `instances[i]`.
#[derive(Debug, Clone, Copy)]
pub struct WeightedFarthestInit<'d> {
    distances: &'d DistanceMatrix,
}

impl<'d> WeightedFarthestInit<'d> {
    pub fn new(distances: &'d DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Selects `k` distinct pool indices in k-means++ order.
    fn choose_centers(&self, k: usize, rng: &mut dyn RngCore) -> Vec<usize> {
        let n = self.distances.len();
        let mut centers = Vec::with_capacity(k);
        if k == 0 || n == 0 {
            return centers;
        }

        let mut chosen = vec![false; n];
        let mut nearest = vec![f64::INFINITY; n];

        let mut latest = rng.gen_range(0..n);
        chosen[latest] = true;
        centers.push(latest);

        while centers.len() < k {
            for (x, d) in nearest.iter_mut().enumerate() {
                if !chosen[x] {
                    *d = d.min(self.distances.get(x, latest));
                }
            }
            latest = sample_next_center(&nearest, &chosen, rng);
            chosen[latest] = true;
            centers.push(latest);
        }
        centers
    }
}

/// Draws an unchosen index with probability proportional to `nearest[i]^2`.
///
/// Distances are scaled by the largest remaining one before squaring so huge
/// finite distances cannot overflow the weight total. Falls back to a uniform
/// draw over the unchosen indices when all weights are zero. At least one
/// index must be unchosen.
pub(crate) fn sample_next_center(nearest: &[f64], chosen: &[bool], rng: &mut dyn RngCore) -> usize {
    let candidates: Vec<usize> = (0..nearest.len()).filter(|&i| !chosen[i]).collect();
    debug_assert!(!candidates.is_empty(), "no unchosen instance left");

    let largest = candidates.iter().map(|&i| nearest[i]).fold(0.0, f64::max);
    let scale = if largest > 0.0 { largest } else { 1.0 };
    let weights = candidates.iter().map(|&i| {
        let d = nearest[i] / scale;
        d * d
    });
    match WeightedIndex::new(weights) {
        Ok(dist) => candidates[dist.sample(rng)],
        Err(err) => {
            warn!(%err, remaining = candidates.len(), "falling back to uniform center draw");
            candidates[rng.gen_range(0..candidates.len())]
        }
    }
}

/// Up to `count` unassigned indices ordered by distance in `row`, then index.
fn nearest_unassigned(row: &[f64], assigned: &[bool], count: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..row.len()).filter(|&i| !assigned[i]).collect();
    candidates.sort_by(|&a, &b| row[a].total_cmp(&row[b]).then(a.cmp(&b)));
    candidates.truncate(count);
    candidates
}

impl SeedingStrategy for WeightedFarthestInit<'_> {
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
        let n = instances.len();
        let k = clusters.len();
        if self.distances.len() != n {
            return Err(SeedingError::DimensionMismatch {
                matrix: self.distances.len(),
                instances: n,
            });
        }
        if k > n {
            return Err(SeedingError::TooManyClusters {
                clusters: k,
                instances: n,
            });
        }
        let required = k.saturating_mul(seed_amt);
        if required > n {
            return Err(SeedingError::InsufficientInstances {
                required,
                available: n,
            });
        }

        let centers = self.choose_centers(k, rng);
        debug!(?centers, "k-means++ centers chosen");

        let mut assigned = vec![false; n];
        for (cluster, &center) in clusters.iter_mut().zip(&centers) {
            assigned[center] = true;
            cluster.add(&instances[center]);
        }

        if seed_amt > 1 {
            for (cluster, &center) in clusters.iter_mut().zip(&centers) {
                for idx in nearest_unassigned(self.distances.row(center), &assigned, seed_amt - 1)
                {
                    assigned[idx] = true;
                    cluster.add(&instances[idx]);
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "weighted-farthest"
    }
}
