//! Three-way comparison of a guess against the target.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Feedback for a single accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The guess is above the target.
    TooHigh,
    /// The guess is below the target.
    TooLow,
    /// The guess equals the target.
    Correct,
}

impl Feedback {
    /// Compare `guess` with `target`.
    #[must_use]
    pub fn compare(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            Ordering::Equal => Feedback::Correct,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Less => Feedback::TooLow,
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Feedback::Correct
    }

    /// Fixed display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Feedback::TooHigh => "Too High",
            Feedback::TooLow => "Too Low",
            Feedback::Correct => "Correct!",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Feedback::TooHigh => "📉",
            Feedback::TooLow => "📈",
            Feedback::Correct => "🎉",
        }
    }
}

/// Which way a wrong guess missed.
///
/// The subset of `Feedback` that leaves a round running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TooHigh,
    TooLow,
}

impl Feedback {
    /// The miss direction, or `None` for a correct guess.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Feedback::TooHigh => Some(Direction::TooHigh),
            Feedback::TooLow => Some(Direction::TooLow),
            Feedback::Correct => None,
        }
    }
}

impl From<Direction> for Feedback {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::TooHigh => Feedback::TooHigh,
            Direction::TooLow => Feedback::TooLow,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Feedback::from(*self).label())
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
