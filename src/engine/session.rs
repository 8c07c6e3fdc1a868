//! State of a single round.
//!
//! ## Invariants
//!
//! - `min_value <= target <= max_value`, fixed for the round
//! - `attempts() == history().len() <= max_attempts`
//! - not `Active` implies the last feedback is `Correct` or the attempt
//!   limit was reached
//!
//! The attempt count is derived from the history, so the two cannot drift.
//! Deserialized sessions are re-checked against the rest.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ConfigError, Feedback, GameConfig};
use crate::history::{GuessHistory, HistoryEntry};

/// Lifecycle of a round. `Active` is initial; `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

/// Why a stored session was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("target {target} outside range {min_value}..={max_value}")]
    TargetOutOfRange {
        target: i64,
        min_value: i64,
        max_value: i64,
    },

    #[error("{attempts} attempts recorded, limit is {max_attempts}")]
    TooManyAttempts { attempts: usize, max_attempts: u32 },

    #[error("attempt {attempt} feedback does not match the target")]
    InconsistentFeedback { attempt: usize },

    #[error("attempt {attempt} follows a correct guess")]
    GuessAfterWin { attempt: usize },

    #[error("status {found:?} does not match history, expected {expected:?}")]
    StatusMismatch {
        found: RoundStatus,
        expected: RoundStatus,
    },
}

/// One round of play.
///
/// Created by the engine at round start and mutated only by accepted
/// guesses. Cloning is cheap, so front ends can hold snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSession")]
pub struct GameSession {
    min_value: i64,
    max_value: i64,
    max_attempts: u32,
    target: i64,
    history: GuessHistory,
    status: RoundStatus,
}

/// Unchecked wire form of `GameSession`.
#[derive(Deserialize)]
struct StoredSession {
    min_value: i64,
    max_value: i64,
    max_attempts: u32,
    target: i64,
    history: GuessHistory,
    status: RoundStatus,
}

impl TryFrom<StoredSession> for GameSession {
    type Error = SessionError;

    fn try_from(stored: StoredSession) -> Result<Self, Self::Error> {
        let config = GameConfig::try_new(stored.min_value, stored.max_value, stored.max_attempts)?;
        if !config.contains(stored.target) {
            return Err(SessionError::TargetOutOfRange {
                target: stored.target,
                min_value: stored.min_value,
                max_value: stored.max_value,
            });
        }

        let attempts = stored.history.len();
        if attempts > stored.max_attempts as usize {
            return Err(SessionError::TooManyAttempts {
                attempts,
                max_attempts: stored.max_attempts,
            });
        }

        for (attempt, entry) in stored.history.numbered() {
            let attempt = attempt as usize;
            if entry.feedback != Feedback::compare(entry.guess, stored.target) {
                return Err(SessionError::InconsistentFeedback { attempt });
            }
            if entry.feedback.is_correct() && attempt < attempts {
                return Err(SessionError::GuessAfterWin { attempt: attempt + 1 });
            }
        }

        let expected = match stored.history.last() {
            Some(last) if last.feedback.is_correct() => RoundStatus::Won,
            _ if attempts == stored.max_attempts as usize => RoundStatus::Lost,
            _ => RoundStatus::Active,
        };
        if stored.status != expected {
            return Err(SessionError::StatusMismatch {
                found: stored.status,
                expected,
            });
        }

        Ok(Self {
            min_value: stored.min_value,
            max_value: stored.max_value,
            max_attempts: stored.max_attempts,
            target: stored.target,
            history: stored.history,
            status: stored.status,
        })
    }
}

impl GameSession {
    pub(crate) fn new(config: &GameConfig, target: i64) -> Self {
        assert!(
            config.contains(target),
            "Target {} outside range {:?}",
            target,
            config.range()
        );
        Self {
            min_value: config.min_value,
            max_value: config.max_value,
            max_attempts: config.max_attempts,
            target,
            history: GuessHistory::new(),
            status: RoundStatus::Active,
        }
    }

    /// Record an in-range guess and advance the round state.
    ///
    /// The correct check runs before the exhaustion check, so a correct
    /// guess on the final attempt wins.
    pub(crate) fn record(&mut self, guess: i64) -> Feedback {
        debug_assert!(self.is_active(), "recording a guess on a finished round");
        debug_assert!(self.range().contains(&guess), "guess {guess} not validated");

        let feedback = Feedback::compare(guess, self.target);
        self.history.push(HistoryEntry::new(guess, feedback));

        if feedback.is_correct() {
            self.status = RoundStatus::Won;
        } else if self.attempts() >= self.max_attempts {
            self.status = RoundStatus::Lost;
        }

        feedback
    }

    #[must_use]
    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }

    /// The round's target.
    ///
    /// Front ends should only reveal this once the round is over.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Accepted guesses so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts())
    }

    #[must_use]
    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(target: i64, max_attempts: u32) -> GameSession {
        GameSession::new(&GameConfig::new(1, 100, max_attempts), target)
    }

    #[test]
    fn test_new_session() {
        let s = session(42, 10);

        assert_eq!(s.target(), 42);
        assert_eq!(s.attempts(), 0);
        assert_eq!(s.attempts_remaining(), 10);
        assert!(s.history().is_empty());
        assert_eq!(s.status(), RoundStatus::Active);
    }

    #[test]
    fn test_record_counts_attempts() {
        let mut s = session(42, 10);

        assert_eq!(s.record(50), Feedback::TooHigh);
        assert_eq!(s.record(25), Feedback::TooLow);

        assert_eq!(s.attempts(), 2);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.attempts_remaining(), 8);
        assert!(s.is_active());
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut s = session(42, 10);
        assert_eq!(s.record(42), Feedback::Correct);
        assert_eq!(s.status(), RoundStatus::Won);
    }

    #[test]
    fn test_exhaustion_loses() {
        let mut s = session(42, 2);
        s.record(1);
        assert!(s.is_active());
        s.record(2);
        assert_eq!(s.status(), RoundStatus::Lost);
    }

    #[test]
    fn test_correct_on_last_attempt_wins() {
        let mut s = session(42, 2);
        s.record(1);
        assert_eq!(s.record(42), Feedback::Correct);
        assert_eq!(s.status(), RoundStatus::Won);
        assert_eq!(s.attempts(), s.max_attempts());
    }

    #[test]
    #[should_panic(expected = "outside range")]
    fn test_target_outside_range() {
        session(0, 10);
    }

    fn reload(value: serde_json::Value) -> Result<GameSession, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    #[test]
    fn test_reload_rejects_target_outside_range() {
        let mut s = session(42, 10);
        s.record(50);

        let mut value = serde_json::to_value(&s).unwrap();
        value["target"] = serde_json::json!(500);

        let err = reload(value).unwrap_err();
        assert!(err.contains("target 500 outside range 1..=100"), "{err}");
    }

    #[test]
    fn test_reload_rejects_inverted_range() {
        let mut value = serde_json::to_value(session(42, 10)).unwrap();
        value["min_value"] = serde_json::json!(200);

        assert!(reload(value).is_err());
    }

    #[test]
    fn test_reload_rejects_too_many_attempts() {
        let mut s = session(42, 3);
        s.record(1);
        s.record(2);

        let mut value = serde_json::to_value(&s).unwrap();
        value["max_attempts"] = serde_json::json!(1);

        let err = reload(value).unwrap_err();
        assert!(err.contains("2 attempts recorded, limit is 1"), "{err}");
    }

    #[test]
    fn test_reload_rejects_wrong_feedback() {
        let mut s = session(42, 10);
        s.record(50);

        let mut value = serde_json::to_value(&s).unwrap();
        value["target"] = serde_json::json!(60);

        let err = reload(value).unwrap_err();
        assert!(err.contains("attempt 1 feedback"), "{err}");
    }

    #[test]
    fn test_reload_rejects_guess_after_win() {
        let mut s = session(42, 10);
        s.record(42);

        let mut value = serde_json::to_value(&s).unwrap();
        let entries = value["history"]["entries"].as_array_mut().unwrap();
        let first = entries[0].clone();
        entries.push(first);

        let err = reload(value).unwrap_err();
        assert!(err.contains("attempt 2 follows a correct guess"), "{err}");
    }

    #[test]
    fn test_reload_rejects_status_mismatch() {
        let mut s = session(42, 10);
        s.record(50);

        let mut value = serde_json::to_value(&s).unwrap();
        value["status"] = serde_json::json!("Won");

        let err = reload(value).unwrap_err();
        assert!(err.contains("does not match history"), "{err}");
    }

    #[test]
    fn test_reload_finished_rounds() {
        let mut won = session(42, 10);
        won.record(42);
        assert_eq!(reload(serde_json::to_value(&won).unwrap()), Ok(won));

        let mut lost = session(42, 1);
        lost.record(1);
        assert_eq!(reload(serde_json::to_value(&lost).unwrap()), Ok(lost));
    }

    #[test]
    fn test_serialization() {
        let mut s = session(42, 10);
        s.record(10);

        let json = serde_json::to_string(&s).unwrap();
        let deserialized: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(s, deserialized);
    }
}
