//! Span of a connected group while merging is in progress.

use crate::model::Interval;
use crate::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Duration {
    pub(super) start: Timestamp,
    pub(super) end: Timestamp,
}

impl Duration {
    pub(super) fn of(interval: &Interval) -> Self {
        Self {
            start: interval.start(),
            end: interval.end(),
        }
    }

    pub(super) fn overlaps(&self, other: &Duration, window: Timestamp) -> bool {
        Interval::overlaps(self.start, self.end, other.start, other.end, window)
    }

    /// Widens this span to the union bound of both spans.
    pub(super) fn absorb(&mut self, other: &Duration) {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
    }
}
