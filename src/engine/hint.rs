//! Hints derived from the current round.
//!
//! Hints are a pure read of session state. They are only available while
//! a round is active.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::session::GameSession;
use crate::core::config::midpoint;
use crate::core::Feedback;

/// Directional part of a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintKind {
    /// No guesses yet: start in the middle of the range.
    FirstGuess { midpoint: i64 },
    /// The last guess was too high.
    GoLower { than: i64 },
    /// The last guess was too low.
    GoHigher { than: i64 },
}

/// Encouragement tier based on attempts remaining.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encouragement {
    /// 7 or more left.
    PlentyLeft,
    /// 4 to 6 left.
    DoingWell,
    /// 2 or 3 left.
    Focus,
    /// 1 left.
    LastChance,
}

impl Encouragement {
    #[must_use]
    pub fn for_remaining(remaining: u32) -> Self {
        match remaining {
            7.. => Encouragement::PlentyLeft,
            4..=6 => Encouragement::DoingWell,
            2..=3 => Encouragement::Focus,
            _ => Encouragement::LastChance,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Encouragement::PlentyLeft => "🌟 Great start! You have plenty of attempts left!",
            Encouragement::DoingWell => "💪 Keep going! You're doing well!",
            Encouragement::Focus => "⏰ Time to focus! You can do this!",
            Encouragement::LastChance => "🔥 Last chance! Make it count!",
        }
    }
}

/// A hint for the next guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub kind: HintKind,

    pub attempts_remaining: u32,

    /// Midpoint of the values still consistent with every feedback so far.
    pub suggested_guess: i64,

    pub encouragement: Encouragement,
}

impl Hint {
    /// Build a hint for `session`, or `None` if the round is over.
    #[must_use]
    pub fn for_session(session: &GameSession) -> Option<Self> {
        if !session.is_active() {
            return None;
        }

        let kind = match session.history().last() {
            None => HintKind::FirstGuess {
                midpoint: midpoint(session.min_value(), session.max_value()),
            },
            Some(last) => match last.feedback {
                Feedback::TooHigh => HintKind::GoLower { than: last.guess },
                Feedback::TooLow => HintKind::GoHigher { than: last.guess },
                // A correct guess ends the round.
                Feedback::Correct => return None,
            },
        };

        let attempts_remaining = session.attempts_remaining();

        Some(Self {
            kind,
            attempts_remaining,
            suggested_guess: session
                .history()
                .suggested_guess(session.min_value(), session.max_value()),
            encouragement: Encouragement::for_remaining(attempts_remaining),
        })
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HintKind::FirstGuess { midpoint } => {
                write!(f, "💡 Start with {midpoint} - it's right in the middle!")?
            }
            HintKind::GoLower { than } => write!(f, "🎯 Try a number lower than {than}")?,
            HintKind::GoHigher { than } => write!(f, "🎯 Try a number higher than {than}")?,
        }
        write!(f, "\n💭 You have {} attempts left", self.attempts_remaining)
    }
}
