//! Python bindings for the guess-engine game engine.
//!
//! # Quick Start
//!
//! ```python
//! import guess_engine as ge
//!
//! game = ge.GuessingGame(min_value=1, max_value=100, max_attempts=10, seed=42)
//! game.new_game()
//!
//! outcome = game.submit_guess("50")
//! print(outcome.kind, outcome.message())
//!
//! hint = game.hint()
//! print(hint.suggested_guess)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// guess_engine: a number guessing game engine.
#[pymodule]
fn guess_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGuessingGame>()?;
    m.add_class::<PyGuessOutcome>()?;
    m.add_class::<PyHint>()?;

    Ok(())
}
