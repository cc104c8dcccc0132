use thiserror::Error;

/// Reasons a pairwise distance table is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistanceError {
    #[error("Distance matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Distance at ({i}, {j}) is not finite: {value}")]
    NonFinite { i: usize, j: usize, value: f64 },

    #[error("Distance at ({i}, {j}) is negative: {value}")]
    Negative { i: usize, j: usize, value: f64 },

    #[error("Diagonal entry {i} must be zero, found {value}")]
    NonZeroDiagonal { i: usize, value: f64 },

    #[error("Distance matrix is not symmetric at ({i}, {j})")]
    Asymmetric { i: usize, j: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_square_display() {
        let e = DistanceError::NotSquare {
            row: 1,
            len: 2,
            expected: 3,
        };
        assert_eq!(
            e.to_string(),
            "Distance matrix must be square: row 1 has 2 entries, expected 3"
        );
    }

    #[test]
    fn asymmetric_display() {
        let e = DistanceError::Asymmetric { i: 0, j: 2 };
        assert!(e.to_string().contains("(0, 2)"));
    }
}
