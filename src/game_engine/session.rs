//! The round loop: one quiz and one life scenario per round.

use std::fmt;
use std::io::{BufRead, Write};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::game_engine::{
    console::Console,
    content::ContentTables,
    error::GameError,
    helpers::banner,
    models::{GameConfig, Player},
    quiz::{conduct_quiz, QuizOutcome},
    scenario::{present_scenario, Choice},
};

/// How the session went, printed with the final stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub rounds_played: u32,
    pub quizzes_correct: u32,
    pub quizzes_incorrect: u32,
    pub quizzes_forfeited: u32,
    pub good_choices: u32,
    pub bad_choices: u32,
}

impl Tally {
    fn record_quiz(&mut self, outcome: QuizOutcome) {
        match outcome {
            QuizOutcome::Correct   => self.quizzes_correct += 1,
            QuizOutcome::Incorrect => self.quizzes_incorrect += 1,
            QuizOutcome::Forfeited => self.quizzes_forfeited += 1,
        }
    }

    fn record_choice(&mut self, choice: Choice) {
        match choice {
            Choice::Good => self.good_choices += 1,
            Choice::Bad  => self.bad_choices += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rounds: {} | VybeKwyz: {} correct, {} incorrect, {} skipped | VybeStrike: {} good, {} bad",
            self.rounds_played,
            self.quizzes_correct,
            self.quizzes_incorrect,
            self.quizzes_forfeited,
            self.good_choices,
            self.bad_choices,
        )
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    /// Input closed before the last round finished.
    InputClosed,
}

pub struct Session {
    config: GameConfig,
    content: ContentTables,
    player: Player,
    rng: StdRng,
    tally: Tally,
}

impl Session {
    pub fn new(config: GameConfig, content: ContentTables) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let player = Player::new(config.player_name.clone());
        Session { config, content, player, rng, tally: Tally::default() }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn into_player(self) -> Player {
        self.player
    }

    /// Uniform pick of the next question index.
    pub fn pick_question(&mut self) -> usize {
        self.rng.gen_range(0..self.content.questions.len())
    }

    pub fn pick_scenario(&mut self) -> usize {
        self.rng.gen_range(0..self.content.scenarios.len())
    }

    /// Play every round, then print the final stats.
    ///
    /// Closed input ends the session early but still prints the final stats;
    /// any other error is returned as is.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<SessionEnd, GameError> {
        console.blank()?;
        console.say(&self.player)?;

        let end = match self.play_rounds(console) {
            Ok(()) => SessionEnd::Completed,
            Err(GameError::InputClosed) => {
                warn!(rounds_played = self.tally.rounds_played, "input closed, ending session early");
                SessionEnd::InputClosed
            }
            Err(e) => return Err(e),
        };

        console.blank()?;
        console.say(banner("Game Over (for this demo)!"))?;
        console.say(&self.player)?;
        console.say(self.tally)?;
        info!(
            player = %self.player.name,
            level = self.player.level,
            vybe_points = self.player.vybe_points,
            ?end,
            "session finished"
        );
        Ok(end)
    }

    fn play_rounds<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), GameError> {
        for round in 0..self.config.rounds {
            console.blank()?;
            console.say(banner(&format!("Round {}", round + 1)))?;
            self.play_round(console)?;
            self.tally.rounds_played += 1;

            if round == self.config.skill_tree_round {
                console.blank()?;
                console.say(banner("VybeTree Alert!"))?;
                console.say("Your 'Empathy' branch on the VybeTree is growing stronger!")?;
            }
        }
        Ok(())
    }

    /// One quiz then one scenario, with stats after each.
    pub fn play_round<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), GameError> {
        let qi = self.pick_question();
        debug!(question = qi, "picked quiz question");
        let outcome = conduct_quiz(
            console,
            &mut self.player,
            &self.content.questions[qi],
            self.config.max_answer_attempts,
        )?;
        self.tally.record_quiz(outcome);
        console.blank()?;
        console.say(&self.player)?;

        let si = self.pick_scenario();
        debug!(scenario = si, "picked life scenario");
        let choice = present_scenario(console, &mut self.player, &self.content.scenarios[si])?;
        self.tally.record_choice(choice);
        console.blank()?;
        console.say(&self.player)?;
        Ok(())
    }
}
