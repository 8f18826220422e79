//! # vybe_strike
//!
//! A console emotional-wellness game for teens.
//!
//! A player earns XP, VybuX (virtual currency) and emotional-skill levels by
//! answering multiple-choice questions (VybeKwyz) and by choosing how to react
//! to everyday life scenarios (VybeStrike). Vybe Points track overall
//! wellness: they rise with level-ups and good choices and fall with wrong
//! answers and bad choices.
//!
//! ## How it works
//!
//! 1. Build a [`GameConfig`] (player name, round count, optional RNG seed,
//!    pacing).
//! 2. Load the embedded [`ContentTables`].
//! 3. Create a [`Session`] and call [`Session::run`] with a [`Console`] — the
//!    session picks one question and one scenario per round uniformly at
//!    random, applies the outcome to the [`Player`], and prints stats.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` replays the exact same picks.
//! - **Typed skills**: skills are a closed [`Skill`] enum; content naming an
//!   unknown skill yields [`GameError::UnknownSkill`] instead of a silent miss.
//! - **Testable I/O**: [`Console`] is generic over `BufRead`/`Write`.
//!
//! ## Quick start
//!
//! ```rust
//! use std::io::Cursor;
//! use vybe_strike::{Console, ContentTables, GameConfig, Session, SessionEnd};
//!
//! let config = GameConfig { rounds: 1, ..GameConfig::seeded(7) };
//! let content = ContentTables::embedded().unwrap();
//! let mut console = Console::new(Cursor::new(b"b\ngood\n".to_vec()), Vec::new(), config.pause);
//!
//! let mut session = Session::new(config, content);
//! let end = session.run(&mut console).unwrap();
//! assert_eq!(end, SessionEnd::Completed);
//! println!("{}", session.player());
//! ```

pub mod game_engine;

// Convenience re-exports so callers can use `vybe_strike::Session`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    Choice, Console, ContentTables, GameConfig, GameError, LifeScenario, Player,
    ProgressEvent, QuizOutcome, QuizQuestion, Session, SessionEnd, Skill, Tally,
};
