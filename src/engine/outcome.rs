//! Result of submitting a guess.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Feedback};
use crate::input::InputError;

/// What happened to a submitted guess.
///
/// Every path through `submit_guess` ends in exactly one variant, so
/// front ends handle each case explicitly.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Wrong guess with attempts left.
    Continue {
        direction: Direction,
        attempts_remaining: u32,
    },
    /// Correct guess. `new_record` is set when this beat the best score
    /// (or was the first win).
    Won {
        target: i64,
        attempts: u32,
        new_record: bool,
    },
    /// Attempt limit reached without a correct guess.
    Lost { target: i64 },
    /// The text was rejected. Nothing was recorded.
    InvalidInput(InputError),
    /// No round is in progress. Start a new one first.
    GameInactive,
}

impl GuessOutcome {
    /// Check if this outcome ended the round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. } | GuessOutcome::Lost { .. })
    }

    /// Check if the guess was accepted and counted as an attempt.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Continue { .. } | GuessOutcome::Won { .. } | GuessOutcome::Lost { .. }
        )
    }

    /// Feedback for the guess, if it was accepted.
    ///
    /// A loss always follows a wrong guess, but whether it was high or low
    /// is only recorded in the history.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            GuessOutcome::Continue { direction, .. } => Some(Feedback::from(*direction)),
            GuessOutcome::Won { .. } => Some(Feedback::Correct),
            GuessOutcome::Lost { .. } | GuessOutcome::InvalidInput(_) | GuessOutcome::GameInactive => None,
        }
    }

    /// The target, once the round has revealed it.
    #[must_use]
    pub fn revealed_target(&self) -> Option<i64> {
        match self {
            GuessOutcome::Won { target, .. } | GuessOutcome::Lost { target } => Some(*target),
            _ => None,
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Continue {
                direction: Direction::TooHigh,
                ..
            } => write!(f, "📉 Too High! Try a lower number."),
            GuessOutcome::Continue {
                direction: Direction::TooLow,
                ..
            } => write!(f, "📈 Too Low! Try a higher number."),
            GuessOutcome::Won {
                attempts,
                new_record: true,
                ..
            } => write!(f, "🏆 New best score: {attempts} attempts!"),
            GuessOutcome::Won {
                target,
                attempts,
                new_record: false,
            } => write!(f, "🎉 Great job! You found {target} in {attempts} attempts!"),
            GuessOutcome::Lost { target } => write!(f, "💀 Game Over! The number was {target}"),
            GuessOutcome::InvalidInput(err) => write!(f, "❌ {err}"),
            GuessOutcome::GameInactive => write!(f, "Start a new game first!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_and_accepted() {
        let cont = GuessOutcome::Continue {
            direction: Direction::TooLow,
            attempts_remaining: 3,
        };
        let won = GuessOutcome::Won {
            target: 8,
            attempts: 4,
            new_record: true,
        };
        let lost = GuessOutcome::Lost { target: 9 };
        let invalid = GuessOutcome::InvalidInput(InputError::Empty);

        assert!(!cont.is_terminal());
        assert!(won.is_terminal());
        assert!(lost.is_terminal());
        assert!(!invalid.is_terminal());
        assert!(!GuessOutcome::GameInactive.is_terminal());

        assert!(cont.is_accepted());
        assert!(won.is_accepted());
        assert!(lost.is_accepted());
        assert!(!invalid.is_accepted());
        assert!(!GuessOutcome::GameInactive.is_accepted());
    }

    #[test]
    fn test_feedback() {
        let cont = GuessOutcome::Continue {
            direction: Direction::TooHigh,
            attempts_remaining: 1,
        };
        assert_eq!(cont.feedback(), Some(Feedback::TooHigh));
        assert_eq!(
            GuessOutcome::Won {
                target: 3,
                attempts: 1,
                new_record: false
            }
            .feedback(),
            Some(Feedback::Correct)
        );
        assert_eq!(GuessOutcome::Lost { target: 1 }.feedback(), None);
    }

    #[test]
    fn test_revealed_target() {
        let won = GuessOutcome::Won {
            target: 42,
            attempts: 7,
            new_record: false,
        };
        assert_eq!(won.revealed_target(), Some(42));
        assert_eq!(GuessOutcome::Lost { target: 17 }.revealed_target(), Some(17));
        assert_eq!(GuessOutcome::GameInactive.revealed_target(), None);
        assert_eq!(
            GuessOutcome::Continue {
                direction: Direction::TooLow,
                attempts_remaining: 2
            }
            .revealed_target(),
            None
        );
    }

    #[test]
    fn test_messages() {
        let lost = GuessOutcome::Lost { target: 17 };
        assert_eq!(lost.to_string(), "💀 Game Over! The number was 17");

        let invalid = GuessOutcome::InvalidInput(InputError::NotANumber);
        assert_eq!(invalid.to_string(), "❌ Please enter a valid number!");

        let high = GuessOutcome::Continue {
            direction: Direction::TooHigh,
            attempts_remaining: 5,
        };
        assert_eq!(high.to_string(), "📉 Too High! Try a lower number.");

        let won = GuessOutcome::Won {
            target: 42,
            attempts: 7,
            new_record: false,
        };
        assert_eq!(won.to_string(), "🎉 Great job! You found 42 in 7 attempts!");
    }

    #[test]
    fn test_serialization() {
        let outcome = GuessOutcome::InvalidInput(InputError::OutOfRange {
            value: 101,
            min: 1,
            max: 100,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GuessOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
