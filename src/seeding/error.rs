use thiserror::Error;

/// Rejected seeding configurations. Raised before any cluster is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedingError {
    #[error("Seed amount must be positive")]
    InvalidSeedAmount,

    #[error("Insufficient instances: seeding needs {required}, pool has {available}")]
    InsufficientInstances { required: usize, available: usize },

    #[error("Cannot pick {clusters} centers from {instances} instances")]
    TooManyClusters { clusters: usize, instances: usize },

    #[error("Distance matrix covers {matrix} instances, pool has {instances}")]
    DimensionMismatch { matrix: usize, instances: usize },

    #[error("Cluster count must equal class count: {clusters} clusters, {classes} classes")]
    ClusterCountMismatch { clusters: usize, classes: usize },

    #[error("Insufficient class members: class '{label}' has {available}, needs {required}")]
    InsufficientClassMembers {
        label: String,
        required: usize,
        available: usize,
    },

    #[error("Weighted-farthest seeding requires a distance matrix")]
    MissingDistances,

    #[error("Unknown seeding strategy: {0}")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_instances_display() {
        let e = SeedingError::InsufficientInstances {
            required: 6,
            available: 4,
        };
        assert_eq!(
            e.to_string(),
            "Insufficient instances: seeding needs 6, pool has 4"
        );
    }

    #[test]
    fn cluster_count_mismatch_display() {
        let e = SeedingError::ClusterCountMismatch {
            clusters: 2,
            classes: 3,
        };
        assert!(e.to_string().starts_with("Cluster count must equal class count"));
    }

    #[test]
    fn insufficient_class_members_display() {
        let e = SeedingError::InsufficientClassMembers {
            label: "walk".to_string(),
            required: 3,
            available: 1,
        };
        assert_eq!(
            e.to_string(),
            "Insufficient class members: class 'walk' has 1, needs 3"
        );
    }

    #[test]
    fn unknown_strategy_display() {
        let e = SeedingError::UnknownStrategy("fuzzy".to_string());
        assert_eq!(e.to_string(), "Unknown seeding strategy: fuzzy");
    }

    #[test]
    fn error_equality() {
        assert_eq!(SeedingError::MissingDistances, SeedingError::MissingDistances);
        assert_ne!(SeedingError::MissingDistances, SeedingError::InvalidSeedAmount);
    }
}
