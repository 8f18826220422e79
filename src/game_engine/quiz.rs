//! VybeKwyz: one multiple-choice question per round.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::game_engine::{
    console::Console,
    error::GameError,
    helpers::{banner, option_letter, parse_answer, DIVIDER},
    models::{Player, ProgressEvent, QuizQuestion},
};

/// Vybe Points lost for a wrong answer.
pub const WRONG_ANSWER_PENALTY: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Incorrect,
    /// No valid answer within the attempt limit; nothing changed.
    Forfeited,
}

#[derive(Debug)]
pub struct QuizReport {
    pub correct: bool,
    pub events: Vec<ProgressEvent>,
    /// Set when the question names a skill the player does not track.
    pub skill_error: Option<GameError>,
}

/// Apply the effects of answering `question` with option `answer`.
pub fn apply_answer(player: &mut Player, question: &QuizQuestion, answer: usize) -> QuizReport {
    if answer != question.correct_index {
        let event = player.add_vybe_points(-WRONG_ANSWER_PENALTY);
        return QuizReport {
            correct: false,
            events: vec![event],
            skill_error: None,
        };
    }

    let mut events = vec![player.add_vybux(question.vybux_reward)];
    events.extend(player.gain_xp(question.xp_reward));
    let skill_error = match player.update_skill(&question.skill, question.skill_amount) {
        Ok(event) => {
            events.push(event);
            None
        }
        Err(e) => Some(e),
    };
    QuizReport { correct: true, events, skill_error }
}

/// Prompt until a valid option letter is typed, at most `max_attempts` times.
pub fn read_answer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    option_count: usize,
    max_attempts: u32,
) -> Result<usize, GameError> {
    let attempts = max_attempts.max(1);
    for attempt in 1..=attempts {
        let line = console.ask("Your answer (A, B, C, etc.): ")?;
        if let Some(index) = parse_answer(&line, option_count) {
            return Ok(index);
        }
        debug!(attempt, input = %line, "invalid quiz answer");
        console.say("Invalid input. Please choose from A, B, C, etc.")?;
    }
    Err(GameError::TooManyInvalidAnswers { attempts })
}

/// Run one full quiz interaction against the console.
pub fn conduct_quiz<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &mut Player,
    question: &QuizQuestion,
    max_attempts: u32,
) -> Result<QuizOutcome, GameError> {
    console.blank()?;
    console.say(banner("VybeKwyz Time!"))?;
    console.say(format!("Prompt: {}", question.prompt))?;
    for (i, option) in question.options.iter().enumerate() {
        console.say(format!("  {}) {option}", option_letter(i)))?;
    }

    let answer = match read_answer(console, question.options.len(), max_attempts) {
        Ok(index) => index,
        Err(e @ GameError::TooManyInvalidAnswers { .. }) => {
            warn!(error = %e, "quiz forfeited");
            console.say(format!("{e}. Skipping this question."))?;
            console.say(DIVIDER)?;
            console.pause()?;
            return Ok(QuizOutcome::Forfeited);
        }
        Err(e) => return Err(e),
    };

    let report = apply_answer(player, question, answer);
    if report.correct {
        console.say("🌟 Correct! 🌟")?;
        for event in &report.events {
            console.say(event)?;
        }
        if let Some(e) = &report.skill_error {
            console.say(format!("Error: {e}."))?;
        }
        console.say(format!(
            "You gained {} VybuX and {} XP!",
            question.vybux_reward, question.xp_reward
        ))?;
    } else {
        console.say(format!(
            "😔 Incorrect. The correct answer was: {}",
            question.options[question.correct_index]
        ))?;
        console.say(format!("Explanation: {}", question.explanation))?;
        console.say(format!(
            "You lost {WRONG_ANSWER_PENALTY} Vybe Points. Current Vybe Points: {}",
            player.vybe_points
        ))?;
    }
    console.say(DIVIDER)?;
    console.pause()?;
    Ok(if report.correct { QuizOutcome::Correct } else { QuizOutcome::Incorrect })
}
