use chrono::{DateTime, FixedOffset, Utc};

use super::OffsetResolver;

/// A synthetic timezone described by an initial offset and a list of
/// offset changes.
///
/// Useful for hosts with their own timezone rules and for exercising DST
/// corrections deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    initial: FixedOffset,
    /// Sorted by instant; each offset applies from its instant onwards.
    transitions: Vec<(DateTime<Utc>, FixedOffset)>,
}

impl TransitionTable {
    #[must_use]
    pub const fn new(initial: FixedOffset) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
        }
    }

    /// Adds a change to `offset` taking effect at `at`.
    #[must_use]
    pub fn with_transition(mut self, at: DateTime<Utc>, offset: FixedOffset) -> Self {
        let index = self.transitions.partition_point(|(existing, _)| *existing <= at);
        self.transitions.insert(index, (at, offset));
        self
    }
}

impl OffsetResolver for TransitionTable {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        let index = self
            .transitions
            .partition_point(|(at, _)| at <= instant);
        index
            .checked_sub(1)
            .and_then(|last| self.transitions.get(last))
            .map_or(self.initial, |(_, offset)| *offset)
    }
}
