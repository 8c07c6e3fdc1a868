//! Append-only guess log for a single round.
//!
//! Backed by `im::Vector` so cloning a session snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::formatter::format_entry;
use crate::core::config::midpoint;
use crate::core::Feedback;

/// One accepted guess and its feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub guess: i64,
    pub feedback: Feedback,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(guess: i64, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// Ordered history of accepted guesses in a round.
///
/// Entry `i` is attempt number `i + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessHistory {
    entries: Vector<HistoryEntry>,
}

impl GuessHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for a 1-based attempt number.
    #[must_use]
    pub fn attempt(&self, attempt: u32) -> Option<&HistoryEntry> {
        let index = (attempt as usize).checked_sub(1)?;
        self.entries.get(index)
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterate over `(attempt_number, entry)` pairs, numbering from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (u32, &HistoryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i as u32 + 1, entry))
    }

    /// The last `n` entries with their attempt numbers, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = (u32, &HistoryEntry)> {
        let skip = self.entries.len().saturating_sub(n);
        self.numbered().skip(skip)
    }

    /// Render every entry with `format_entry`.
    #[must_use]
    pub fn formatted(&self) -> Vec<String> {
        self.numbered()
            .map(|(attempt, entry)| format_entry(attempt, entry.guess, entry.feedback))
            .collect()
    }

    /// Narrow `[min, max]` to the values still consistent with the feedback.
    #[must_use]
    pub fn remaining_range(&self, min: i64, max: i64) -> (i64, i64) {
        self.entries
            .iter()
            .fold((min, max), |(low, high), entry| match entry.feedback {
                Feedback::TooHigh => (low, high.min(entry.guess.saturating_sub(1))),
                Feedback::TooLow => (low.max(entry.guess.saturating_add(1)), high),
                Feedback::Correct => (entry.guess, entry.guess),
            })
    }

    /// Midpoint of `remaining_range`, the binary-search next guess.
    #[must_use]
    pub fn suggested_guess(&self, min: i64, max: i64) -> i64 {
        let (low, high) = self.remaining_range(min, max);
        midpoint(low, high)
    }
}
