//! Terminal front end for the number guessing game.

use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use guess_engine::{format_entry, GameConfig, GameEngine, GuessOutcome};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Number of history lines shown by the `history` command.
const HISTORY_DISPLAY_LIMIT: usize = 20;

#[derive(Parser)]
#[command(name = "guess", about = "Guess the secret number")]
struct Args {
    /// Smallest possible number
    #[arg(long, default_value_t = guess_engine::core::DEFAULT_MIN_VALUE, allow_negative_numbers = true)]
    min: i64,

    /// Largest possible number
    #[arg(long, default_value_t = guess_engine::core::DEFAULT_MAX_VALUE, allow_negative_numbers = true)]
    max: i64,

    /// Guesses allowed per round
    #[arg(short = 'n', long, default_value_t = guess_engine::core::DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// RNG seed for reproducible targets
    #[arg(long)]
    seed: Option<u64>,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> io::Result<GameConfig> {
        let mut config = GameConfig::try_new(self.min, self.max, self.attempts)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        config.seed = self.seed;
        Ok(config)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = args.config()?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(
        args.log_level(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut engine = GameEngine::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    engine.new_game();
    print_banner(&engine, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "quit" | "q" => break,
            "new" | "n" => {
                engine.new_game();
                print_banner(&engine, &mut stdout)?;
            }
            "reset" | "r" => {
                engine.reset();
                writeln!(stdout, "🎮 Scores cleared. Type 'new' to start!")?;
            }
            "hint" | "h" => match engine.hint() {
                Some(hint) => {
                    writeln!(stdout, "{hint}")?;
                    writeln!(stdout, "{}", hint.encouragement.message())?;
                }
                None => writeln!(stdout, "{}", GuessOutcome::GameInactive)?,
            },
            "history" => {
                if let Some(session) = engine.session() {
                    for (attempt, entry) in session.history().recent(HISTORY_DISPLAY_LIMIT) {
                        writeln!(stdout, "{}", format_entry(attempt, entry.guess, entry.feedback))?;
                    }
                }
            }
            "stats" => {
                let stats = engine.stats();
                writeln!(
                    stdout,
                    "Rounds: {} won, {} lost ({:.0}% win rate)",
                    stats.rounds_won,
                    stats.rounds_lost,
                    stats.win_rate() * 100.0
                )?;
                print_best_score(&engine, &mut stdout)?;
            }
            text => {
                let outcome = engine.submit_guess(text);
                if outcome.is_accepted() {
                    if let Some(session) = engine.session() {
                        if let Some((attempt, entry)) = session.history().recent(1).next() {
                            writeln!(stdout, "{}", format_entry(attempt, entry.guess, entry.feedback))?;
                        }
                    }
                }
                writeln!(stdout, "{outcome}")?;

                if outcome.is_terminal() {
                    print_best_score(&engine, &mut stdout)?;
                    writeln!(stdout, "Type 'new' to play again or 'quit' to exit.")?;
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn print_banner(engine: &GameEngine, out: &mut impl Write) -> io::Result<()> {
    if let Some(session) = engine.session() {
        writeln!(
            out,
            "🎲 Guess a number between {} and {} ({} attempts)",
            session.min_value(),
            session.max_value(),
            session.max_attempts()
        )?;
    }
    writeln!(out, "Commands: hint, history, stats, new, reset, quit")?;
    writeln!(out, "🤔 Make your first guess!")
}

fn print_best_score(engine: &GameEngine, out: &mut impl Write) -> io::Result<()> {
    match engine.best_score() {
        Some(best) => writeln!(out, "Best Score: {best} attempts"),
        None => writeln!(out, "Best Score: Not set"),
    }
}
