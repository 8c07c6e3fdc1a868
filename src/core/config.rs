//! Round configuration.
//!
//! A `GameConfig` fixes the inclusive guessing range and the attempt limit
//! for a round. The engine keeps one as its default for `new_game()`.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound of the guessing range.
pub const DEFAULT_MIN_VALUE: i64 = 1;

/// Default upper bound of the guessing range.
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Default number of guesses allowed per round.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Why a configuration was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_value ({min_value}) must not exceed max_value ({max_value})")]
    InvertedRange { min_value: i64, max_value: i64 },

    #[error("Must allow at least 1 attempt")]
    NoAttempts,
}

/// Configuration for a round.
///
/// `new` and the `with_*` builders panic on an empty range or a zero
/// attempt limit: those are caller bugs. Front ends taking bounds from
/// users go through `try_new` instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest value the target can take (inclusive).
    pub min_value: i64,

    /// Largest value the target can take (inclusive).
    pub max_value: i64,

    /// Number of validated guesses allowed before the round is lost.
    pub max_attempts: u32,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration.
    pub fn new(min_value: i64, max_value: i64, max_attempts: u32) -> Self {
        Self::check(min_value, max_value, max_attempts);
        Self {
            min_value,
            max_value,
            max_attempts,
            seed: None,
        }
    }

    /// Create a new configuration, refusing invalid bounds.
    pub fn try_new(min_value: i64, max_value: i64, max_attempts: u32) -> Result<Self, ConfigError> {
        Self::validate(min_value, max_value, max_attempts)?;
        Ok(Self {
            min_value,
            max_value,
            max_attempts,
            seed: None,
        })
    }

    fn validate(min_value: i64, max_value: i64, max_attempts: u32) -> Result<(), ConfigError> {
        if min_value > max_value {
            return Err(ConfigError::InvertedRange {
                min_value,
                max_value,
            });
        }
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }

    fn check(min_value: i64, max_value: i64, max_attempts: u32) {
        if let Err(err) = Self::validate(min_value, max_value, max_attempts) {
            panic!("{err}");
        }
    }

    /// Set the guessing range.
    #[must_use]
    pub fn with_range(mut self, min_value: i64, max_value: i64) -> Self {
        Self::check(min_value, max_value, self.max_attempts);
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        Self::check(self.min_value, self.max_value, max_attempts);
        self.max_attempts = max_attempts;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The inclusive guessing range.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }

    /// Check if `value` lies inside the guessing range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.range().contains(&value)
    }

    /// Floor of the range midpoint.
    #[must_use]
    pub fn midpoint(&self) -> i64 {
        midpoint(self.min_value, self.max_value)
    }
}

/// Floor of `(low + high) / 2` without overflow.
pub(crate) fn midpoint(low: i64, high: i64) -> i64 {
    (i128::from(low) + i128::from(high)).div_euclid(2) as i64
}
