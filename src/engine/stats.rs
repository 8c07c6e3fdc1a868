//! Statistics across rounds played by one engine.

use serde::{Deserialize, Serialize};

/// Counters collected across rounds.
///
/// Lives as long as the engine; cleared only by a full reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds started.
    pub rounds_started: u32,

    /// Rounds ended by a correct guess.
    pub rounds_won: u32,

    /// Rounds ended by running out of attempts.
    pub rounds_lost: u32,

    /// Validated guesses across all rounds.
    pub guesses_accepted: u32,

    /// Rejected guess texts across all rounds.
    pub guesses_rejected: u32,

    /// Sum of attempts over won rounds.
    pub winning_attempts: u64,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rounds that ended in a win or a loss.
    #[must_use]
    pub fn rounds_finished(&self) -> u32 {
        self.rounds_won + self.rounds_lost
    }

    /// Fraction of finished rounds that were won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let finished = self.rounds_finished();
        if finished == 0 {
            0.0
        } else {
            f64::from(self.rounds_won) / f64::from(finished)
        }
    }

    /// Mean attempts per won round.
    #[must_use]
    pub fn avg_attempts_per_win(&self) -> f64 {
        if self.rounds_won == 0 {
            0.0
        } else {
            self.winning_attempts as f64 / f64::from(self.rounds_won)
        }
    }
}
