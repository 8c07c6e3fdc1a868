//! # guess-engine
//!
//! A number guessing game engine for GUI and terminal front ends.
//!
//! ## Design Principles
//!
//! 1. **Typed Outcomes**: Every guess yields one `GuessOutcome` variant.
//!    Front ends match on it; there are no status flags to cross-check.
//!
//! 2. **Deterministic**: Targets come from a seeded ChaCha8 RNG, or from
//!    an injected `TargetPicker` in tests.
//!
//! 3. **No Hidden State**: The best score and statistics belong to a
//!    `GameEngine` value, not to process globals.
//!
//! ## Modules
//!
//! - `core`: Configuration, feedback, RNG
//! - `input`: Guess text validation
//! - `history`: Per-round guess log and display format
//! - `engine`: Round lifecycle, outcomes, hints, statistics

pub mod core;
pub mod engine;
pub mod history;
pub mod input;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, Direction, Feedback, GameConfig, GameRng, GameRngState};

pub use crate::input::{validate, InputError};

pub use crate::history::{format_entry, GuessHistory, HistoryEntry};

pub use crate::engine::{
    Encouragement, FixedTarget, GameEngine, GameSession, GuessOutcome, Hint, HintKind,
    RoundStatus, SessionError, SessionStats, TargetPicker, TargetSequence,
};
