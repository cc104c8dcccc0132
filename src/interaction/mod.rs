//! Interval interaction: do two interval sets form one temporal group?
//!
//! Intervals from both lists are merged into connected groups, where two
//! spans connect when they overlap within a tolerance `window` (see
//! [`Interval::overlaps`]). The lists interact iff exactly one group remains.
//!
//! Merging runs in two phases:
//!
//! 1. **Scan**: each interval of `list1` then `list2` joins the first group
//!    it overlaps, widening that group to the union span, or opens a new one.
//! 2. **Consolidation**: groups that overlap each other are linked with a
//!    union-find and collapsed into their union spans. Widened spans can
//!    reach further groups, so passes repeat until the count stops falling.

mod duration;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use petgraph::unionfind::UnionFind;
use tracing::debug;

use crate::model::Interval;
use crate::Timestamp;
use duration::Duration;

/// Default overlap tolerance.
pub const DEFAULT_WINDOW: Timestamp = 5;

/// Interaction test with a fixed tolerance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalInteraction {
    window: Timestamp,
}

impl IntervalInteraction {
    /// Creates the analyzer. Negative windows are treated as zero.
    pub fn new(window: Timestamp) -> Self {
        Self {
            window: window.max(0),
        }
    }

    pub fn window(&self) -> Timestamp {
        self.window
    }

    /// Returns true if `list1` and `list2` collapse into a single group.
    ///
    /// Two empty lists interact by convention. A list compared with itself
    /// interacts only if it already forms one group on its own: duplicating
    /// two far-apart intervals still leaves two groups.
    pub fn interact(&self, list1: &[Interval], list2: &[Interval]) -> bool {
        if list1.is_empty() && list2.is_empty() {
            return true;
        }
        self.group_count(list1, list2) == 1
    }

    /// Number of connected groups formed by both lists together.
    pub fn group_count(&self, list1: &[Interval], list2: &[Interval]) -> usize {
        let groups = self.scan(list1.iter().chain(list2));
        consolidate(groups, self.window).len()
    }

    fn scan<'i>(&self, intervals: impl Iterator<Item = &'i Interval>) -> Vec<Duration> {
        let mut groups: Vec<Duration> = Vec::new();
        for interval in intervals {
            let span = Duration::of(interval);
            match groups.iter_mut().find(|g| g.overlaps(&span, self.window)) {
                Some(group) => group.absorb(&span),
                None => groups.push(span),
            }
        }
        groups
    }
}

impl Default for IntervalInteraction {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

/// Shorthand for `IntervalInteraction::new(window).interact(list1, list2)`.
pub fn interact(list1: &[Interval], list2: &[Interval], window: Timestamp) -> bool {
    IntervalInteraction::new(window).interact(list1, list2)
}

/// Collapses mutually overlapping groups until a pass merges nothing.
fn consolidate(mut groups: Vec<Duration>, window: Timestamp) -> Vec<Duration> {
    loop {
        let before = groups.len();
        if before <= 1 {
            return groups;
        }

        let mut links = UnionFind::<usize>::new(before);
        for i in 0..before {
            for j in (i + 1)..before {
                if groups[i].overlaps(&groups[j], window) {
                    links.union(i, j);
                }
            }
        }

        let mut merged: BTreeMap<usize, Duration> = BTreeMap::new();
        for (group, root) in groups.iter().zip(links.into_labeling()) {
            merged
                .entry(root)
                .and_modify(|span| span.absorb(group))
                .or_insert(*group);
        }
        groups = merged.into_values().collect();

        debug!(before, after = groups.len(), "consolidation pass");
        if groups.len() == before {
            return groups;
        }
    }
}

