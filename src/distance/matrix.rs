//! Validated symmetric distance table over an instance pool.

use rayon::prelude::*;
use tracing::debug;

use super::error::DistanceError;
use super::Distance;
use crate::model::Instance;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Symmetric, non-negative `n × n` matrix with a zero diagonal.
///
/// Row `i` and column `i` refer to the `i`-th instance of the pool the matrix
/// was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Wraps a precomputed table after checking every invariant.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DistanceError> {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(DistanceError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            values.extend(entries);
        }
        let matrix = Self { n, values };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Evaluates `metric` over every unordered pair of `instances`.
    ///
    /// Pairs are independent, so rows of the upper triangle are computed on
    /// the rayon pool and mirrored afterwards.
    pub fn compute<M>(instances: &[Instance], metric: &M) -> Result<Self, DistanceError>
    where
        M: Distance + ?Sized,
    {
        let n = instances.len();
        debug!(instances = n, "computing pairwise distances");

        let upper: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| metric.distance(&instances[i], &instances[j]))
                    .collect()
            })
            .collect();

        let mut values = vec![0.0; n * n];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, d) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }

        let matrix = Self { n, values };
        matrix.validate()?;
        debug!(instances = n, "pairwise distances done");
        Ok(matrix)
    }

    fn validate(&self) -> Result<(), DistanceError> {
        for i in 0..self.n {
            let diag = self.get(i, i);
            if diag != 0.0 {
                return Err(DistanceError::NonZeroDiagonal { i, value: diag });
            }
            for j in 0..self.n {
                let value = self.get(i, j);
                if !value.is_finite() {
                    return Err(DistanceError::NonFinite { i, j, value });
                }
                if value < 0.0 {
                    return Err(DistanceError::Negative { i, j, value });
                }
                if j > i && (value - self.get(j, i)).abs() > SYMMETRY_TOLERANCE {
                    return Err(DistanceError::Asymmetric { i, j });
                }
            }
        }
        Ok(())
    }

    /// Number of instances covered.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between instance `i` and instance `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "distance index out of range");
        self.values[i * self.n + j]
    }

    /// Distances from instance `i` to every instance.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}
