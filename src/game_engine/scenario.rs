//! VybeStrike: a life scenario answered with "good" or anything else.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::game_engine::{
    console::Console,
    error::GameError,
    helpers::{banner, is_good_choice, DIVIDER},
    models::{LifeScenario, Player, ProgressEvent},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Good,
    Bad,
}

impl Choice {
    /// Anything other than "good" (case-insensitive) is a bad choice.
    pub fn from_input(input: &str) -> Self {
        if is_good_choice(input) { Choice::Good } else { Choice::Bad }
    }
}

#[derive(Debug)]
pub struct ScenarioReport {
    pub events: Vec<ProgressEvent>,
    pub skill_error: Option<GameError>,
}

/// Apply the deltas for `choice`. The skill moves by `+skill_amount` on a
/// good choice and by `-skill_amount` otherwise.
pub fn apply_choice(player: &mut Player, scenario: &LifeScenario, choice: Choice) -> ScenarioReport {
    let (vybe, xp, skill_delta) = match choice {
        Choice::Good => (scenario.vybe_points_positive, scenario.xp_positive, scenario.skill_amount),
        Choice::Bad  => (scenario.vybe_points_negative, scenario.xp_negative, -scenario.skill_amount),
    };

    let mut events = vec![player.add_vybe_points(vybe)];
    events.extend(player.gain_xp(xp));
    let skill_error = match player.update_skill(&scenario.skill, skill_delta) {
        Ok(event) => {
            events.push(event);
            None
        }
        Err(e) => Some(e),
    };
    ScenarioReport { events, skill_error }
}

pub fn present_scenario<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &mut Player,
    scenario: &LifeScenario,
) -> Result<Choice, GameError> {
    console.blank()?;
    console.say(banner("VybeStrike: Life Scenario!"))?;
    console.say(&scenario.prompt)?;
    let input = console.ask("Type 'good' for a positive response, or anything else for a negative response: ")?;
    let choice = Choice::from_input(&input);
    debug!(?choice, input = %input, "scenario choice");

    let report = apply_choice(player, scenario, choice);
    console.say(match choice {
        Choice::Good => &scenario.outcome_positive,
        Choice::Bad  => &scenario.outcome_negative,
    })?;
    for event in &report.events {
        console.say(event)?;
    }
    if let Some(e) = &report.skill_error {
        console.say(format!("Error: {e}."))?;
    }
    console.say(format!("Current Vybe Points: {}", player.vybe_points))?;
    console.say(DIVIDER)?;
    console.pause()?;
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::models::Skill;
    use std::io::Cursor;
    use std::time::Duration;

    fn scenario() -> LifeScenario {
        LifeScenario {
            prompt: "A test of character.".into(),
            outcome_positive: "You handled it well.".into(),
            outcome_negative: "That went badly.".into(),
            vybe_points_positive: 8,
            vybe_points_negative: -12,
            xp_positive: 20,
            xp_negative: -6,
            skill: "Creativity".into(),
            skill_amount: 2,
        }
    }

    fn run(input: &str, player: &mut Player) -> (Choice, String) {
        let mut c = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Duration::ZERO);
        let choice = present_scenario(&mut c, player, &scenario()).unwrap();
        (choice, String::from_utf8(c.into_output()).unwrap())
    }

    #[test]
    fn good_in_any_case_takes_positive_branch() {
        for input in ["good\n", "GOOD\n", "Good\n", "  gOoD  \n"] {
            let mut p = Player::new("Test");
            let (choice, out) = run(input, &mut p);
            assert_eq!(choice, Choice::Good, "{input:?}");
            assert_eq!(p.vybe_points, 108);
            assert_eq!(p.xp, 20);
            assert_eq!(p.skill(Skill::Creativity), 2);
            assert!(out.contains("You handled it well."));
        }
    }

    #[test]
    fn anything_else_takes_negative_branch() {
        for input in ["bad\n", "\n", "yes\n", "good job\n"] {
            let mut p = Player::new("Test");
            p.xp = 30;
            let (choice, out) = run(input, &mut p);
            assert_eq!(choice, Choice::Bad, "{input:?}");
            assert_eq!(p.vybe_points, 88);
            assert_eq!(p.xp, 24);
            assert_eq!(p.skill(Skill::Creativity), -2);
            assert!(out.contains("That went badly."));
        }
    }

    #[test]
    fn negative_branch_cannot_push_xp_below_zero() {
        let mut p = Player::new("Test");
        apply_choice(&mut p, &scenario(), Choice::Bad);
        assert_eq!(p.xp, 0);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn unknown_skill_skips_only_the_skill_update() {
        let mut s = scenario();
        s.skill = "Telepathy".into();
        let mut p = Player::new("Test");
        let report = apply_choice(&mut p, &s, Choice::Good);
        assert!(matches!(report.skill_error, Some(GameError::UnknownSkill(_))));
        assert_eq!(p.vybe_points, 108);
        assert!(p.skills.values().all(|&v| v == 0));
    }
}
