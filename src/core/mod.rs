//! Core engine types: configuration, feedback, RNG.
//!
//! These are shared by the validator, the history log and the engine.

pub mod config;
pub mod feedback;
pub mod rng;

pub use config::{ConfigError, GameConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
pub use feedback::{Direction, Feedback};
pub use rng::{GameRng, GameRngState};
