//! Labeled symbolic sequences built from episodes of intervals.

use std::collections::BTreeSet;

use super::interval::Interval;

/// Key of a sequence element: the interval pattern it stands for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    intervals: Vec<Interval>,
}

impl Symbol {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Distinct interval names covered by this symbol, sorted.
    pub fn props(&self) -> BTreeSet<&str> {
        self.intervals.iter().map(Interval::name).collect()
    }
}

/// One element of an instance's sequence: a symbol plus its weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedObject {
    key: Symbol,
    weight: f64,
}

impl WeightedObject {
    pub fn new(key: Symbol, weight: f64) -> Self {
        Self { key, weight }
    }

    pub fn key(&self) -> &Symbol {
        &self.key
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A labeled, ordered symbolic sequence derived from one episode.
///
/// Instances are owned by whoever loaded them; clustering only ever borrows
/// them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    class_label: String,
    episode_id: u32,
    sequence: Vec<WeightedObject>,
}

impl Instance {
    pub fn new(
        class_label: impl Into<String>,
        episode_id: u32,
        sequence: Vec<WeightedObject>,
    ) -> Self {
        Self {
            class_label: class_label.into(),
            episode_id,
            sequence,
        }
    }

    /// Class label of this instance.
    pub fn name(&self) -> &str {
        &self.class_label
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn sequence(&self) -> &[WeightedObject] {
        &self.sequence
    }

    /// Every interval referenced by the sequence, in sequence order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.sequence
            .iter()
            .flat_map(|obj| obj.key().intervals().iter())
    }

    /// Distinct interval names referenced by the sequence, sorted.
    pub fn props(&self) -> BTreeSet<&str> {
        self.intervals().map(Interval::name).collect()
    }
}
