use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game_engine::error::GameError;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Emotional competencies tracked per player.
///
/// Variants are declared alphabetically by display name so that ordered maps
/// keyed by `Skill` list them the way players read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Active Listening")]
    ActiveListening,
    Adaptability,
    Assertiveness,
    Communication,
    #[serde(rename = "Conflict Resolution")]
    ConflictResolution,
    Creativity,
    #[serde(rename = "Decision Making")]
    DecisionMaking,
    #[serde(rename = "Emotional Regulation")]
    EmotionalRegulation,
    Empathy,
    Gratitude,
    Mindfulness,
    #[serde(rename = "Positive Thinking")]
    PositiveThinking,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    Resilience,
    #[serde(rename = "Self-Awareness")]
    SelfAwareness,
    #[serde(rename = "Self-Control")]
    SelfControl,
    #[serde(rename = "Self-Esteem")]
    SelfEsteem,
    #[serde(rename = "Social Skills")]
    SocialSkills,
    #[serde(rename = "Stress Management")]
    StressManagement,
}

impl Skill {
    pub const ALL: [Skill; 19] = [
        Skill::ActiveListening,
        Skill::Adaptability,
        Skill::Assertiveness,
        Skill::Communication,
        Skill::ConflictResolution,
        Skill::Creativity,
        Skill::DecisionMaking,
        Skill::EmotionalRegulation,
        Skill::Empathy,
        Skill::Gratitude,
        Skill::Mindfulness,
        Skill::PositiveThinking,
        Skill::ProblemSolving,
        Skill::Resilience,
        Skill::SelfAwareness,
        Skill::SelfControl,
        Skill::SelfEsteem,
        Skill::SocialSkills,
        Skill::StressManagement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Skill::ActiveListening     => "Active Listening",
            Skill::Adaptability        => "Adaptability",
            Skill::Assertiveness       => "Assertiveness",
            Skill::Communication       => "Communication",
            Skill::ConflictResolution  => "Conflict Resolution",
            Skill::Creativity          => "Creativity",
            Skill::DecisionMaking      => "Decision Making",
            Skill::EmotionalRegulation => "Emotional Regulation",
            Skill::Empathy             => "Empathy",
            Skill::Gratitude           => "Gratitude",
            Skill::Mindfulness         => "Mindfulness",
            Skill::PositiveThinking    => "Positive Thinking",
            Skill::ProblemSolving      => "Problem Solving",
            Skill::Resilience          => "Resilience",
            Skill::SelfAwareness       => "Self-Awareness",
            Skill::SelfControl         => "Self-Control",
            Skill::SelfEsteem          => "Self-Esteem",
            Skill::SocialSkills        => "Social Skills",
            Skill::StressManagement    => "Stress Management",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Exact, case-sensitive lookup by display name.
impl FromStr for Skill {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .iter()
            .copied()
            .find(|skill| skill.name() == s)
            .ok_or_else(|| GameError::UnknownSkill(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

pub const STARTING_VYBE_POINTS: i32 = 100;
pub const STARTING_VYBUX: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    /// Progress toward the next level; always below [`XP_PER_LEVEL`](crate::game_engine::player::XP_PER_LEVEL)
    /// once a mutation returns.
    pub xp: u32,
    pub vybe_points: i32,
    pub vybux: i32,
    pub skills: BTreeMap<Skill, i32>,
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// 0-indexed into `options`.
    pub correct_index: usize,
    pub explanation: String,
    pub vybux_reward: i32,
    pub xp_reward: i32,
    /// Display name of the skill, resolved against [`Skill`] when applied.
    pub skill: String,
    pub skill_amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeScenario {
    pub prompt: String,
    pub outcome_positive: String,
    pub outcome_negative: String,
    pub vybe_points_positive: i32,
    pub vybe_points_negative: i32,
    pub xp_positive: i32,
    pub xp_negative: i32,
    pub skill: String,
    /// Added on a good choice, subtracted on any other.
    pub skill_amount: i32,
}

// ---------------------------------------------------------------------------
// Progress reports
// ---------------------------------------------------------------------------

/// One observable change to a [`Player`], rendered as a transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    XpChanged { player: String, delta: i32, xp: u32 },
    LeveledUp { player: String, level: u32, vybe_points: i32 },
    SkillChanged { player: String, skill: Skill, delta: i32, level: i32 },
    VybuxChanged { delta: i32, vybux: i32 },
    VybePointsChanged { delta: i32, vybe_points: i32 },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::XpChanged { player, delta, xp } if *delta >= 0 =>
                write!(f, "{player} gained {delta} XP! (XP: {xp})"),
            ProgressEvent::XpChanged { player, delta, xp } =>
                write!(f, "{player} lost {} XP. (XP: {xp})", -delta),
            ProgressEvent::LeveledUp { player, level, vybe_points } =>
                write!(f, "🎉 {player} leveled up to Level {level}! 🎉 (Vybe Points: {vybe_points})"),
            ProgressEvent::SkillChanged { player, skill, delta, level } if *delta > 0 =>
                write!(f, "{player} {skill} skill increased by {delta}! (now {level})"),
            ProgressEvent::SkillChanged { player, skill, delta, level } if *delta < 0 =>
                write!(f, "{player} {skill} skill decreased by {}! (now {level})", -delta),
            ProgressEvent::SkillChanged { player, skill, level, .. } =>
                write!(f, "{player} {skill} skill unchanged. (still {level})"),
            ProgressEvent::VybuxChanged { delta, vybux } =>
                write!(f, "VybuX {delta:+}. Current VybuX: {vybux}"),
            ProgressEvent::VybePointsChanged { delta, vybe_points } =>
                write!(f, "Vybe Points {delta:+}. Current Vybe Points: {vybe_points}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_name: String,
    pub rounds: u32,
    /// Zero-based round after which the VybeTree alert is shown.
    pub skill_tree_round: u32,
    pub pause: Duration,
    pub max_answer_attempts: u32,
    /// `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_name: "VyralTeen".to_string(),
            rounds: 3,
            skill_tree_round: 1,
            pause: Duration::from_secs(2),
            max_answer_attempts: 10,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults with a fixed seed and no pause, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        GameConfig {
            pause: Duration::ZERO,
            rng_seed: Some(seed),
            ..GameConfig::default()
        }
    }
}
