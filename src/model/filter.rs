//! Property renaming and exclusion applied to freshly loaded intervals.

use std::collections::{BTreeMap, BTreeSet};

use super::interval::Interval;

/// Explicit replacement for load-time property tweaks.
///
/// Renames are applied first; an interval is then dropped when its
/// (possibly renamed) name ends with any excluded suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyFilter {
    pub exclude_suffixes: BTreeSet<String>,
    pub renames: BTreeMap<String, String>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exclude_suffixes.insert(suffix.into());
        self
    }

    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }

    pub fn is_identity(&self) -> bool {
        self.exclude_suffixes.is_empty() && self.renames.is_empty()
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Returns the filtered intervals in their original order.
    pub fn apply(&self, intervals: &[Interval]) -> Vec<Interval> {
        intervals
            .iter()
            .map(|interval| match self.renames.get(interval.name()) {
                Some(to) => interval.renamed(to),
                None => interval.clone(),
            })
            .filter(|interval| !self.is_excluded(interval.name()))
            .collect()
    }
}
