//! Core game engine — player progression, content, and the interaction loop.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: skills, player, quiz/scenario content, events, config |
//! | `error`    | `GameError`, the single error type of the crate |
//! | `player`   | XP, level-up and skill mutation rules |
//! | `content`  | Embedded JSON quiz and scenario tables, validated at load |
//! | `helpers`  | Option lettering and input normalisation |
//! | `console`  | Line-based I/O over any `BufRead` + `Write` |
//! | `quiz`     | VybeKwyz interaction |
//! | `scenario` | VybeStrike life-scenario interaction |
//! | `session`  | Round loop with seeded or entropy RNG |

pub mod console;
pub mod content;
pub mod error;
pub mod helpers;
pub mod models;
pub mod player;
pub mod quiz;
pub mod scenario;
pub mod session;

pub use console::Console;
pub use content::ContentTables;
pub use error::GameError;
pub use models::{
    GameConfig, LifeScenario, Player, ProgressEvent, QuizQuestion, Skill,
};
pub use quiz::QuizOutcome;
pub use scenario::Choice;
pub use session::{Session, SessionEnd, Tally};
