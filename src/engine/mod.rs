//! Number guessing game engine.
//!
//! ## Round lifecycle
//!
//! ```text
//! start / new_game ──► Active ──► Won
//!                        │
//!                        └──────► Lost
//! ```
//!
//! `Won` and `Lost` are terminal until the next `start`. Guesses outside an
//! active round return `GuessOutcome::GameInactive`.
//!
//! ## Components
//!
//! - `GameEngine`: owns the session, best score and statistics
//! - `GameSession`: target, history and status of one round
//! - `TargetPicker`: how targets are drawn (`GameRng`, `FixedTarget`, ...)
//! - `Hint`: read-only advice derived from the session

mod game;
mod hint;
mod outcome;
mod picker;
mod session;
mod stats;

pub use game::GameEngine;
pub use hint::{Encouragement, Hint, HintKind};
pub use outcome::GuessOutcome;
pub use picker::{FixedTarget, TargetPicker, TargetSequence};
pub use session::{GameSession, RoundStatus, SessionError};
pub use stats::SessionStats;
