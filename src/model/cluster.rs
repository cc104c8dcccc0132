//! Cluster accumulator populated by seeding and refined elsewhere.

use std::fmt::Display;

use super::instance::Instance;

/// Ordered, borrowed membership of one cluster.
///
/// Created empty per clustering run. `add` appends without deduplication so
/// the refinement loop sees exactly what seeding placed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cluster<'a> {
    label: Option<String>,
    members: Vec<&'a Instance>,
}

impl<'a> Cluster<'a> {
    /// Creates an empty, unlabeled cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `k` empty clusters.
    pub fn empty_set(k: usize) -> Vec<Self> {
        (0..k).map(|_| Self::new()).collect()
    }

    pub fn add(&mut self, instance: &'a Instance) {
        self.members.push(instance);
    }

    pub fn members(&self) -> &[&'a Instance] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes all members, keeping the label.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Class label designated for this cluster by supervised seeding.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}

impl Display for Cluster<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{}: ", label)?;
        }
        write!(f, "{{")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}#{}", member.name(), member.episode_id())?;
        }
        write!(f, "}}")
    }
}
