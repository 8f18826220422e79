//! Player state mutation rules.
//!
//! Every mutation applies immediately and returns the [`ProgressEvent`]s it
//! produced so the caller decides how to show them.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{info, warn};

use crate::game_engine::{
    error::GameError,
    models::{Player, ProgressEvent, Skill, STARTING_VYBE_POINTS, STARTING_VYBUX},
};

pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_VYBE_BONUS: i32 = 10;

impl Player {
    /// Fresh player: level 1, 0 XP, 100 Vybe Points, 50 VybuX, every skill at 0.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            level: 1,
            xp: 0,
            vybe_points: STARTING_VYBE_POINTS,
            vybux: STARTING_VYBUX,
            skills: Skill::ALL.iter().map(|&s| (s, 0)).collect::<BTreeMap<_, _>>(),
        }
    }

    /// Add (or remove) XP, levelling up once per full 100 XP.
    ///
    /// Negative amounts never take XP below zero and never lower the level;
    /// the reported delta is what was actually removed.
    pub fn gain_xp(&mut self, amount: i32) -> Vec<ProgressEvent> {
        let delta = if amount >= 0 {
            self.xp = self.xp.saturating_add(amount.unsigned_abs());
            amount
        } else {
            let removed = amount.unsigned_abs().min(self.xp);
            self.xp -= removed;
            -(removed as i32)
        };

        let mut level_ups = Vec::new();
        while self.xp >= XP_PER_LEVEL {
            level_ups.push(self.level_up());
            self.xp -= XP_PER_LEVEL;
        }

        let mut events = vec![ProgressEvent::XpChanged {
            player: self.name.clone(),
            delta,
            xp: self.xp,
        }];
        events.extend(level_ups);
        events
    }

    pub fn level_up(&mut self) -> ProgressEvent {
        self.level += 1;
        self.vybe_points += LEVEL_UP_VYBE_BONUS;
        info!(player = %self.name, level = self.level, "level up");
        ProgressEvent::LeveledUp {
            player: self.name.clone(),
            level: self.level,
            vybe_points: self.vybe_points,
        }
    }

    /// Adjust a skill by display name.
    ///
    /// Unknown names leave every skill untouched and return
    /// [`GameError::UnknownSkill`].
    pub fn update_skill(&mut self, name: &str, amount: i32) -> Result<ProgressEvent, GameError> {
        let skill = name.parse::<Skill>().map_err(|e| {
            warn!(player = %self.name, skill = name, "update for unknown skill");
            e
        })?;
        Ok(self.adjust_skill(skill, amount))
    }

    pub fn adjust_skill(&mut self, skill: Skill, amount: i32) -> ProgressEvent {
        let level = self.skills.entry(skill).or_insert(0);
        *level += amount;
        ProgressEvent::SkillChanged {
            player: self.name.clone(),
            skill,
            delta: amount,
            level: *level,
        }
    }

    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    pub fn add_vybux(&mut self, amount: i32) -> ProgressEvent {
        self.vybux += amount;
        ProgressEvent::VybuxChanged { delta: amount, vybux: self.vybux }
    }

    pub fn add_vybe_points(&mut self, amount: i32) -> ProgressEvent {
        self.vybe_points += amount;
        ProgressEvent::VybePointsChanged { delta: amount, vybe_points: self.vybe_points }
    }
}

/// The stats block shown between interactions.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {}'s Stats ---", self.name)?;
        writeln!(f, "Level: {} (XP: {}/{XP_PER_LEVEL})", self.level, self.xp)?;
        writeln!(f, "Vybe Points: {}", self.vybe_points)?;
        writeln!(f, "VybuX: {}", self.vybux)?;
        writeln!(f, "Emotional Skills:")?;
        for (skill, level) in &self.skills {
            writeln!(f, "  {skill}: {level}")?;
        }
        write!(f, "----------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_has_defaults() {
        let p = Player::new("Test");
        assert_eq!(p.level, 1);
        assert_eq!(p.xp, 0);
        assert_eq!(p.vybe_points, 100);
        assert_eq!(p.vybux, 50);
        assert_eq!(p.skills.len(), 19);
        assert!(p.skills.values().all(|&v| v == 0));
    }

    #[test]
    fn gain_xp_without_level_up() {
        let mut p = Player::new("Test");
        let events = p.gain_xp(40);
        assert_eq!(p.xp, 40);
        assert_eq!(p.level, 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn gain_xp_handles_multiple_level_ups() {
        let mut p = Player::new("Test");
        p.gain_xp(30);
        let events = p.gain_xp(275);
        assert_eq!(p.level, 4);
        assert_eq!(p.xp, 5);
        assert_eq!(p.vybe_points, 130);
        let level_ups = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::LeveledUp { .. }))
            .count();
        assert_eq!(level_ups, 3);
        assert_eq!(
            events[0],
            ProgressEvent::XpChanged { player: "Test".into(), delta: 275, xp: 5 }
        );
    }

    #[test]
    fn gain_xp_law_holds_across_amounts() {
        for before in [0u32, 1, 50, 99] {
            for amount in [0i32, 1, 99, 100, 101, 250, 1000] {
                let mut p = Player::new("Test");
                p.xp = before;
                p.gain_xp(amount);
                let expected_levels = (before + amount as u32) / XP_PER_LEVEL;
                assert_eq!(p.level, 1 + expected_levels, "before={before} amount={amount}");
                assert!(p.xp < XP_PER_LEVEL, "before={before} amount={amount}");
            }
        }
    }

    #[test]
    fn negative_xp_clamps_at_zero() {
        let mut p = Player::new("Test");
        p.gain_xp(7);
        let events = p.gain_xp(-10);
        assert_eq!(p.xp, 0);
        assert_eq!(p.level, 1);
        assert_eq!(
            events[0],
            ProgressEvent::XpChanged { player: "Test".into(), delta: -7, xp: 0 }
        );
    }

    #[test]
    fn level_up_adds_one_level_and_ten_points() {
        let mut p = Player::new("Test");
        p.level_up();
        assert_eq!(p.level, 2);
        assert_eq!(p.vybe_points, 110);
    }

    #[test]
    fn update_skill_only_touches_named_skill() {
        let mut p = Player::new("Test");
        let before = p.skills.clone();
        p.update_skill("Self-Control", -3).unwrap();
        for (skill, level) in &p.skills {
            if *skill == Skill::SelfControl {
                assert_eq!(*level, -3);
            } else {
                assert_eq!(*level, before[skill]);
            }
        }
    }

    #[test]
    fn update_skill_zero_is_reported_as_unchanged() {
        let mut p = Player::new("Test");
        let event = p.update_skill("Empathy", 0).unwrap();
        assert_eq!(p.skill(Skill::Empathy), 0);
        assert!(event.to_string().contains("unchanged"));
    }

    #[test]
    fn update_unknown_skill_is_an_error_without_mutation() {
        let mut p = Player::new("Test");
        let before = p.clone();
        let err = p.update_skill("Telekinesis", 5).unwrap_err();
        assert!(matches!(err, GameError::UnknownSkill(ref name) if name == "Telekinesis"));
        assert_eq!(p, before);
    }

    #[test]
    fn stats_block_lists_every_skill_alphabetically() {
        let p = Player::new("Test");
        let text = p.to_string();
        let first = text.find("Active Listening").unwrap();
        let last = text.find("Stress Management").unwrap();
        assert!(first < last);
        assert!(text.contains("Level: 1 (XP: 0/100)"));
    }
}
