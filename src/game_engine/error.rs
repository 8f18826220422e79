//! Error type shared by every game module.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Content referenced a skill name that is not part of [`Skill`](super::models::Skill).
    #[error("Skill '{0}' does not exist")]
    UnknownSkill(String),

    #[error("No valid answer after {attempts} attempts")]
    TooManyInvalidAnswers { attempts: u32 },

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("Content table '{0}' is empty")]
    EmptyContent(&'static str),

    #[error("Quiz question #{index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content parse error: {0}")]
    Content(#[from] serde_json::Error),
}
