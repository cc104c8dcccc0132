//! Supervised seeding: one cluster per class label.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::error::SeedingError;
use super::strategy::SeedingStrategy;
use crate::model::{Cluster, Instance};

/// Groups the pool by [`Instance::name`] and seeds cluster `i` from the
/// `i`-th label in lexicographic order.
///
/// Each cluster is tagged with its label and receives `seed_amt` randomly
/// chosen instances of that class.
#[derive(Debug, Clone, Copy, Default)]
pub struct StratifiedInit;

impl StratifiedInit {
    /// Pool members per class label, labels sorted.
    fn by_label(instances: &[Instance]) -> BTreeMap<&str, Vec<&Instance>> {
        let mut map: BTreeMap<&str, Vec<&Instance>> = BTreeMap::new();
        for instance in instances {
            map.entry(instance.name()).or_default().push(instance);
        }
        map
    }
}

impl SeedingStrategy for StratifiedInit {
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
        let classes = Self::by_label(instances);
        if classes.len() != clusters.len() {
            return Err(SeedingError::ClusterCountMismatch {
                clusters: clusters.len(),
                classes: classes.len(),
            });
        }
        if let Some((label, members)) = classes.iter().find(|(_, m)| m.len() < seed_amt) {
            return Err(SeedingError::InsufficientClassMembers {
                label: label.to_string(),
                required: seed_amt,
                available: members.len(),
            });
        }

        for (cluster, (label, mut members)) in clusters.iter_mut().zip(classes) {
            debug!(label, members = members.len(), "seeding class cluster");
            members.shuffle(&mut *rng);
            cluster.set_label(label);
            for &instance in members.iter().take(seed_amt) {
                cluster.add(instance);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "stratified-supervised"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn labeled(classes: &[(&str, u32)]) -> Vec<Instance> {
        let mut out = Vec::new();
        let mut id = 0;
        for &(label, count) in classes {
            for _ in 0..count {
                out.push(Instance::new(label, id, Vec::new()));
                id += 1;
            }
        }
        out
    }

    #[test]
    fn labels_are_assigned_in_lexicographic_order() {
        let instances = labeled(&[("walk", 4), ("jump", 3), ("run", 5)]);
        let mut clusters = Cluster::empty_set(3);
        let mut rng = StdRng::seed_from_u64(3);
        StratifiedInit
            .pick_centers(&mut clusters, &instances, 2, &mut rng)
            .unwrap();

        let labels: Vec<_> = clusters.iter().map(|c| c.label().unwrap()).collect();
        assert_eq!(labels, vec!["jump", "run", "walk"]);
        for cluster in &clusters {
            assert_eq!(cluster.len(), 2);
            assert!(cluster
                .members()
                .iter()
                .all(|i| Some(i.name()) == cluster.label()));
        }
    }

    #[test]
    fn rejects_class_count_mismatch() {
        let instances = labeled(&[("a", 2), ("b", 2)]);
        let mut clusters = Cluster::empty_set(3);
        let mut rng = StdRng::seed_from_u64(0);
        let err = StratifiedInit
            .pick_centers(&mut clusters, &instances, 1, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SeedingError::ClusterCountMismatch {
                clusters: 3,
                classes: 2
            }
        );
        assert!(clusters.iter().all(|c| c.is_empty() && c.label().is_none()));
    }

    #[test]
    fn rejects_small_class_before_touching_clusters() {
        let instances = labeled(&[("a", 3), ("b", 1)]);
        let mut clusters = Cluster::empty_set(2);
        let mut rng = StdRng::seed_from_u64(0);
        let err = StratifiedInit
            .pick_centers(&mut clusters, &instances, 2, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SeedingError::InsufficientClassMembers {
                label: "b".to_string(),
                required: 2,
                available: 1
            }
        );
        assert!(clusters.iter().all(Cluster::is_empty));
    }

    #[test]
    fn whole_class_when_seed_amt_matches_size() {
        let instances = labeled(&[("a", 2), ("b", 2)]);
        let mut clusters = Cluster::empty_set(2);
        let mut rng = StdRng::seed_from_u64(8);
        StratifiedInit
            .pick_centers(&mut clusters, &instances, 2, &mut rng)
            .unwrap();
        let mut ids: Vec<u32> = clusters[0].members().iter().map(|i| i.episode_id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
    }
}
