//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::engine::{GameEngine, GuessOutcome, Hint, HintKind};

/// Python wrapper for a guess outcome.
#[pyclass(name = "GuessOutcome")]
#[derive(Clone, Debug)]
pub struct PyGuessOutcome(pub GuessOutcome);

#[pymethods]
impl PyGuessOutcome {
    /// Outcome kind: "continue", "won", "lost", "invalid_input" or "game_inactive".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            GuessOutcome::Continue { .. } => "continue",
            GuessOutcome::Won { .. } => "won",
            GuessOutcome::Lost { .. } => "lost",
            GuessOutcome::InvalidInput(_) => "invalid_input",
            GuessOutcome::GameInactive => "game_inactive",
        }
    }

    /// Feedback label for accepted guesses.
    #[getter]
    fn feedback(&self) -> Option<&'static str> {
        self.0.feedback().map(|f| f.label())
    }

    #[getter]
    fn attempts_remaining(&self) -> Option<u32> {
        match self.0 {
            GuessOutcome::Continue {
                attempts_remaining, ..
            } => Some(attempts_remaining),
            _ => None,
        }
    }

    #[getter]
    fn attempts(&self) -> Option<u32> {
        match self.0 {
            GuessOutcome::Won { attempts, .. } => Some(attempts),
            _ => None,
        }
    }

    #[getter]
    fn new_record(&self) -> bool {
        matches!(self.0, GuessOutcome::Won { new_record: true, .. })
    }

    /// The revealed target once the round is over.
    #[getter]
    fn target(&self) -> Option<i64> {
        self.0.revealed_target()
    }

    /// Validation message for rejected input.
    #[getter]
    fn error(&self) -> Option<String> {
        match &self.0 {
            GuessOutcome::InvalidInput(err) => Some(err.to_string()),
            _ => None,
        }
    }

    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    /// Human-readable message.
    fn message(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("GuessOutcome({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for a hint.
#[pyclass(name = "Hint")]
#[derive(Clone, Debug)]
pub struct PyHint(pub Hint);

#[pymethods]
impl PyHint {
    /// Hint kind: "first_guess", "go_lower" or "go_higher".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0.kind {
            HintKind::FirstGuess { .. } => "first_guess",
            HintKind::GoLower { .. } => "go_lower",
            HintKind::GoHigher { .. } => "go_higher",
        }
    }

    /// The midpoint for a first guess, or the last guess otherwise.
    #[getter]
    fn value(&self) -> i64 {
        match self.0.kind {
            HintKind::FirstGuess { midpoint } => midpoint,
            HintKind::GoLower { than } | HintKind::GoHigher { than } => than,
        }
    }

    #[getter]
    fn attempts_remaining(&self) -> u32 {
        self.0.attempts_remaining
    }

    #[getter]
    fn suggested_guess(&self) -> i64 {
        self.0.suggested_guess
    }

    #[getter]
    fn encouragement(&self) -> &'static str {
        self.0.encouragement.message()
    }

    fn message(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Hint({:?})", self.0)
    }
}

/// Python wrapper for GameEngine.
///
/// A number guessing game with best-score tracking.
#[pyclass(name = "GuessingGame")]
pub struct PyGuessingGame {
    engine: GameEngine,
}

fn checked_config(min_value: i64, max_value: i64, max_attempts: u32) -> PyResult<GameConfig> {
    GameConfig::try_new(min_value, max_value, max_attempts)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymethods]
impl PyGuessingGame {
    /// Create a new game. No round is started until `new_game()` or `start()`.
    ///
    /// # Arguments
    /// - min_value: Smallest possible target
    /// - max_value: Largest possible target
    /// - max_attempts: Guesses allowed per round
    /// - seed: RNG seed for deterministic targets (None for entropy)
    #[new]
    #[pyo3(signature = (min_value = 1, max_value = 100, max_attempts = 10, seed = None))]
    fn new(min_value: i64, max_value: i64, max_attempts: u32, seed: Option<u64>) -> PyResult<Self> {
        let mut config = checked_config(min_value, max_value, max_attempts)?;
        config.seed = seed;
        Ok(Self {
            engine: GameEngine::new(config),
        })
    }

    /// Start a round with the configured range.
    fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Start a round with explicit bounds.
    fn start(&mut self, min_value: i64, max_value: i64, max_attempts: u32) -> PyResult<()> {
        checked_config(min_value, max_value, max_attempts)?;
        self.engine.start(min_value, max_value, max_attempts);
        Ok(())
    }

    /// Submit a guess as text.
    fn submit_guess(&mut self, text: &str) -> PyGuessOutcome {
        PyGuessOutcome(self.engine.submit_guess(text))
    }

    /// Get a hint, or None when no round is active.
    fn hint(&self) -> Option<PyHint> {
        self.engine.hint().map(PyHint)
    }

    /// Clear the best score and statistics and end the round.
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Formatted history lines for the current round.
    fn history(&self) -> Vec<String> {
        self.engine
            .session()
            .map(|s| s.history().formatted())
            .unwrap_or_default()
    }

    #[getter]
    fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    #[getter]
    fn attempts(&self) -> u32 {
        self.engine.session().map_or(0, |s| s.attempts())
    }

    #[getter]
    fn max_attempts(&self) -> u32 {
        self.engine
            .session()
            .map_or(self.engine.config().max_attempts, |s| s.max_attempts())
    }

    #[getter]
    fn best_score(&self) -> Option<u32> {
        self.engine.best_score()
    }

    #[getter]
    fn rounds_won(&self) -> u32 {
        self.engine.stats().rounds_won
    }

    #[getter]
    fn rounds_lost(&self) -> u32 {
        self.engine.stats().rounds_lost
    }

    fn __repr__(&self) -> String {
        let status = match self.engine.session() {
            Some(s) => format!("{:?}", s.status()),
            None => "NoRound".to_string(),
        };
        format!(
            "GuessingGame(attempts={}/{}, status={}, best={:?})",
            self.attempts(),
            self.max_attempts(),
            status,
            self.engine.best_score()
        )
    }
}
