//! Property tests for validation and round invariants.

use guess_engine::core::{GameConfig, GameRng};
use guess_engine::engine::{GameEngine, GuessOutcome, RoundStatus};
use guess_engine::input::{validate, InputError};
use proptest::prelude::*;

/// Guess text: mostly integers near the range, some junk.
fn guess_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-20i64..130).prop_map(|n| n.to_string()),
        1 => (-20i64..130).prop_map(|n| format!("  {n} ")),
        1 => "[a-z.]{0,4}",
        1 => Just(String::new()),
    ]
}

proptest! {
    #[test]
    fn validate_is_pure(text in ".{0,12}", min in -50i64..50, span in 0i64..100) {
        let max = min + span;
        prop_assert_eq!(validate(&text, min, max), validate(&text, min, max));
    }

    #[test]
    fn validate_accepts_exactly_the_range(n in -200i64..200, min in -50i64..50, span in 0i64..100) {
        let max = min + span;
        let result = validate(&n.to_string(), min, max);
        if (min..=max).contains(&n) {
            prop_assert_eq!(result, Ok(n));
        } else {
            prop_assert_eq!(result, Err(InputError::OutOfRange { value: n, min, max }));
        }
    }

    #[test]
    fn validate_ignores_surrounding_whitespace(n in 1i64..=100, left in "[ \t]{0,3}", right in "[ \t\n]{0,3}") {
        let text = format!("{left}{n}{right}");
        prop_assert_eq!(validate(&text, 1, 100), Ok(n));
    }

    #[test]
    fn round_invariants_hold(
        seed in any::<u64>(),
        min in -50i64..50,
        span in 0i64..60,
        max_attempts in 1u32..12,
        guesses in prop::collection::vec(guess_text(), 0..30),
    ) {
        let max = min + span;
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed));
        engine.start(min, max, max_attempts);
        let target = engine.session().unwrap().target();
        prop_assert!((min..=max).contains(&target));

        for text in &guesses {
            let before = engine.session().unwrap().clone();
            let outcome = engine.submit_guess(text);
            let session = engine.session().unwrap();

            // Target is fixed for the round.
            prop_assert_eq!(session.target(), target);
            prop_assert_eq!(session.history().len() as u32, session.attempts());
            prop_assert!(session.attempts() <= max_attempts);

            match &outcome {
                GuessOutcome::InvalidInput(_) | GuessOutcome::GameInactive => {
                    prop_assert_eq!(session, &before);
                }
                _ => {
                    prop_assert_eq!(session.attempts(), before.attempts() + 1);
                }
            }

            if !session.is_active() {
                let last_correct = session
                    .history()
                    .last()
                    .map_or(false, |e| e.feedback.is_correct());
                prop_assert!(last_correct || session.attempts() == max_attempts);
                prop_assert_eq!(
                    session.status() == RoundStatus::Won,
                    last_correct
                );
            }
        }
    }

    #[test]
    fn best_score_is_minimum_win(seed in any::<u64>(), rounds in 1usize..8) {
        let mut engine = GameEngine::new(GameConfig::new(1, 20, 20).with_seed(seed));
        let mut rng = GameRng::new(seed ^ 0xA5A5);
        let mut wins = Vec::new();

        for _ in 0..rounds {
            engine.new_game();
            // Random guessing until the round ends.
            loop {
                let guess = rng.gen_inclusive(1..=20);
                match engine.submit_guess(&guess.to_string()) {
                    GuessOutcome::Won { attempts, new_record, .. } => {
                        let previous_best = wins.iter().copied().min();
                        prop_assert_eq!(new_record, previous_best.map_or(true, |b| attempts < b));
                        wins.push(attempts);
                        break;
                    }
                    GuessOutcome::Lost { .. } => break,
                    GuessOutcome::Continue { .. } => {}
                    other => prop_assert!(false, "unexpected outcome {:?}", other),
                }
            }
        }

        prop_assert_eq!(engine.best_score(), wins.iter().copied().min());
    }
}
