//! The game engine: round lifecycle, guess handling, best score.

use log::{debug, info, trace};

use super::hint::Hint;
use super::outcome::GuessOutcome;
use super::picker::TargetPicker;
use super::session::{GameSession, RoundStatus};
use super::stats::SessionStats;
use crate::core::{GameConfig, GameRng};
use crate::input::validate;

/// Number guessing game engine.
///
/// Owns the live round, the best score and cross-round statistics. The
/// best score outlives rounds and is cleared only by `reset`.
///
/// ## Example
///
/// ```
/// use guess_engine::core::GameConfig;
/// use guess_engine::engine::{FixedTarget, GameEngine, GuessOutcome};
///
/// let mut engine = GameEngine::with_picker(GameConfig::default(), FixedTarget(42));
/// engine.new_game();
///
/// assert!(matches!(engine.submit_guess("50"), GuessOutcome::Continue { .. }));
/// assert_eq!(
///     engine.submit_guess("42"),
///     GuessOutcome::Won { target: 42, attempts: 2, new_record: true }
/// );
/// assert_eq!(engine.best_score(), Some(2));
/// ```
///
/// Not thread-safe on its own: share it behind one `Mutex` held across
/// each `submit_guess`.
#[derive(Clone, Debug)]
pub struct GameEngine<P = GameRng> {
    picker: P,
    defaults: GameConfig,
    session: Option<GameSession>,
    best_score: Option<u32>,
    stats: SessionStats,
}

impl GameEngine<GameRng> {
    /// Create an engine drawing targets from a `GameRng`.
    ///
    /// Seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("engine rng seed {}", rng.seed());
        Self::with_picker(config, rng)
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<P: TargetPicker> GameEngine<P> {
    /// Create an engine with a custom target picker.
    pub fn with_picker(defaults: GameConfig, picker: P) -> Self {
        Self {
            picker,
            defaults,
            session: None,
            best_score: None,
            stats: SessionStats::new(),
        }
    }

    /// Start a round with explicit bounds.
    ///
    /// Panics if `min_value > max_value` or `max_attempts == 0`.
    pub fn start(&mut self, min_value: i64, max_value: i64, max_attempts: u32) -> &GameSession {
        let config = GameConfig::new(min_value, max_value, max_attempts);
        self.start_round(&config)
    }

    /// Start a round with the engine's default configuration.
    pub fn new_game(&mut self) -> &GameSession {
        let config = self.defaults.clone();
        self.start_round(&config)
    }

    fn start_round(&mut self, config: &GameConfig) -> &GameSession {
        let target = self.picker.pick(config.range());
        self.stats.rounds_started += 1;

        debug!(
            "round {} started: range {}..={}, {} attempts",
            self.stats.rounds_started, config.min_value, config.max_value, config.max_attempts
        );
        trace!("round target {}", target);

        self.session.insert(GameSession::new(config, target))
    }

    /// Submit raw guess text.
    ///
    /// Rejected text and guesses outside an active round leave all state
    /// untouched.
    pub fn submit_guess(&mut self, raw_text: &str) -> GuessOutcome {
        let session = match self.session.as_mut() {
            Some(session) if session.is_active() => session,
            _ => {
                debug!("guess {:?} ignored: no active round", raw_text);
                return GuessOutcome::GameInactive;
            }
        };

        let guess = match validate(raw_text, session.min_value(), session.max_value()) {
            Ok(guess) => guess,
            Err(err) => {
                debug!("guess {:?} rejected: {}", raw_text, err);
                self.stats.guesses_rejected += 1;
                return GuessOutcome::InvalidInput(err);
            }
        };

        let feedback = session.record(guess);
        let attempts = session.attempts();
        self.stats.guesses_accepted += 1;
        debug!("attempt {}: {} is {}", attempts, guess, feedback);

        match (session.status(), feedback.direction()) {
            (RoundStatus::Won, _) => {
                let new_record = self.best_score.map_or(true, |best| attempts < best);
                if new_record {
                    self.best_score = Some(attempts);
                }
                self.stats.rounds_won += 1;
                self.stats.winning_attempts += u64::from(attempts);
                info!("round won in {} attempts (new record: {})", attempts, new_record);
                GuessOutcome::Won {
                    target: session.target(),
                    attempts,
                    new_record,
                }
            }
            (RoundStatus::Lost, _) => {
                let target = session.target();
                self.stats.rounds_lost += 1;
                info!("round lost after {} attempts, target was {}", attempts, target);
                GuessOutcome::Lost { target }
            }
            (RoundStatus::Active, Some(direction)) => GuessOutcome::Continue {
                direction,
                attempts_remaining: session.attempts_remaining(),
            },
            (RoundStatus::Active, None) => unreachable!("a correct guess always ends the round"),
        }
    }

    /// Hint for the next guess, or `None` when no round is active.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        self.session.as_ref().and_then(Hint::for_session)
    }

    /// Clear the best score, statistics and the current round.
    ///
    /// Guesses return `GameInactive` until a new round starts.
    pub fn reset(&mut self) {
        info!("engine reset");
        self.session = None;
        self.best_score = None;
        self.stats.reset();
    }

    /// The current (or most recently finished) round.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_active)
    }

    /// Fewest attempts over all won rounds since the last reset.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Configuration used by `new_game`.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.defaults
    }

    /// Replace the configuration used by future `new_game` calls.
    ///
    /// The current round keeps its own bounds.
    pub fn set_config(&mut self, config: GameConfig) {
        self.defaults = config;
    }

    /// The target picker, e.g. to read back a `GameRng` seed for replay.
    #[must_use]
    pub fn picker(&self) -> &P {
        &self.picker
    }
}
