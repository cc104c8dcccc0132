//! Named time interval, the atomic event of every episode.

use std::fmt::Display;

use super::error::IntervalError;
use crate::Timestamp;

/// A named event occupying the closed span `[start, end]`.
///
/// Provenance (episode id and source file) is set once at load time; the
/// value is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    name: String,
    start: Timestamp,
    end: Timestamp,
    episode: u32,
    source_file: String,
}

impl Interval {
    /// Creates interval `name [start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Interval::try_new`] for untrusted input.
    pub fn new(name: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        assert!(start <= end, "Interval start must be <= end");
        Self {
            name: name.into(),
            start,
            end,
            episode: 0,
            source_file: String::new(),
        }
    }

    /// Creates interval `name [start, end]`, rejecting reversed bounds.
    pub fn try_new(
        name: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Self, IntervalError> {
        let name = name.into();
        if start > end {
            return Err(IntervalError::InvalidBounds { name, start, end });
        }
        Ok(Self::new(name, start, end))
    }

    /// Attaches the episode id and the file this interval was read from.
    pub fn with_origin(mut self, episode: u32, source_file: impl Into<String>) -> Self {
        self.episode = episode;
        self.source_file = source_file.into();
        self
    }

    /// Returns a copy of this interval carrying a different name.
    pub(crate) fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn start(&self) -> Timestamp {
        self.start
    }

    pub const fn end(&self) -> Timestamp {
        self.end
    }

    pub const fn episode(&self) -> u32 {
        self.episode
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Length of the span, saturating at `Timestamp::MAX`.
    pub const fn duration(&self) -> Timestamp {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `t` ∈ `[start, end]`.
    pub const fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t <= self.end
    }

    /// Windowed overlap between two raw spans.
    ///
    /// True iff `max(start, other_start) - window <= min(end, other_end) + window`.
    /// Symmetric, reflexive, and monotone in `window`.
    pub fn overlaps(
        start: Timestamp,
        end: Timestamp,
        other_start: Timestamp,
        other_end: Timestamp,
        window: Timestamp,
    ) -> bool {
        let window = window.max(0);
        start.max(other_start).saturating_sub(window) <= end.min(other_end).saturating_add(window)
    }

    /// Checks if this interval lies within `window` of the span `[start, end]`.
    pub fn overlaps_span(&self, start: Timestamp, end: Timestamp, window: Timestamp) -> bool {
        Self::overlaps(self.start, self.end, start, end, window)
    }

    /// Checks if this interval lies within `window` of `other`.
    pub fn overlaps_with(&self, other: &Interval, window: Timestamp) -> bool {
        self.overlaps_span(other.start, other.end, window)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {}]", self.name, self.start, self.end)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 5)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("episode", &self.episode)?;
        s.serialize_field("source_file", &self.source_file)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            name: String,
            start: Timestamp,
            end: Timestamp,
            #[serde(default)]
            episode: u32,
            #[serde(default)]
            source_file: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        Interval::try_new(raw.name, raw.start, raw.end)
            .map(|interval| interval.with_origin(raw.episode, raw.source_file))
            .map_err(serde::de::Error::custom)
    }
}
