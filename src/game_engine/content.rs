//! Quiz and life-scenario tables.
//!
//! The default tables are JSON documents compiled into the binary and parsed
//! once when a session starts. They are never mutated afterwards.

use tracing::{debug, warn};

use crate::game_engine::{
    error::GameError,
    helpers::MAX_OPTIONS,
    models::{LifeScenario, QuizQuestion, Skill},
};

const QUIZ_QUESTIONS_JSON: &str = include_str!("../../content/quiz_questions.json");
const LIFE_SCENARIOS_JSON: &str = include_str!("../../content/life_scenarios.json");

#[derive(Debug, Clone)]
pub struct ContentTables {
    pub questions: Vec<QuizQuestion>,
    pub scenarios: Vec<LifeScenario>,
}

impl ContentTables {
    /// The tables shipped with the game.
    pub fn embedded() -> Result<Self, GameError> {
        Self::from_json(QUIZ_QUESTIONS_JSON, LIFE_SCENARIOS_JSON)
    }

    pub fn from_json(questions: &str, scenarios: &str) -> Result<Self, GameError> {
        let questions: Vec<QuizQuestion> = serde_json::from_str(questions)?;
        let scenarios: Vec<LifeScenario> = serde_json::from_str(scenarios)?;
        Self::new(questions, scenarios)
    }

    /// Validate and wrap already-built tables.
    ///
    /// Structural problems are errors. Unknown skill names are only logged:
    /// the interaction reports them and skips the skill update.
    pub fn new(questions: Vec<QuizQuestion>, scenarios: Vec<LifeScenario>) -> Result<Self, GameError> {
        if questions.is_empty() {
            return Err(GameError::EmptyContent("quiz questions"));
        }
        if scenarios.is_empty() {
            return Err(GameError::EmptyContent("life scenarios"));
        }

        for (index, q) in questions.iter().enumerate() {
            if q.options.len() < 2 || q.options.len() > MAX_OPTIONS {
                return Err(GameError::InvalidQuestion {
                    index,
                    reason: format!("{} options (expected 2..={MAX_OPTIONS})", q.options.len()),
                });
            }
            if q.correct_index >= q.options.len() {
                return Err(GameError::InvalidQuestion {
                    index,
                    reason: format!(
                        "correct_index {} out of range for {} options",
                        q.correct_index,
                        q.options.len()
                    ),
                });
            }
        }

        let skill_refs = questions
            .iter()
            .map(|q| ("quiz", q.skill.as_str()))
            .chain(scenarios.iter().map(|s| ("scenario", s.skill.as_str())));
        for (kind, name) in skill_refs {
            if name.parse::<Skill>().is_err() {
                warn!(kind, skill = name, "content references unknown skill");
            }
        }

        debug!(questions = questions.len(), scenarios = scenarios.len(), "content loaded");
        Ok(ContentTables { questions, scenarios })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, correct_index: usize) -> QuizQuestion {
        QuizQuestion {
            prompt: "Prompt".into(),
            options: (0..options).map(|i| format!("Option {i}")).collect(),
            correct_index,
            explanation: "Because.".into(),
            vybux_reward: 1,
            xp_reward: 1,
            skill: "Empathy".into(),
            skill_amount: 1,
        }
    }

    fn scenario(skill: &str) -> LifeScenario {
        LifeScenario {
            prompt: "Prompt".into(),
            outcome_positive: "Nice.".into(),
            outcome_negative: "Oops.".into(),
            vybe_points_positive: 1,
            vybe_points_negative: -1,
            xp_positive: 1,
            xp_negative: -1,
            skill: skill.into(),
            skill_amount: 1,
        }
    }

    #[test]
    fn embedded_tables_load_and_reference_known_skills() {
        let content = ContentTables::embedded().unwrap();
        assert_eq!(content.questions.len(), 10);
        assert_eq!(content.scenarios.len(), 8);
        for q in &content.questions {
            assert!(q.skill.parse::<Skill>().is_ok(), "unknown skill {}", q.skill);
        }
        for s in &content.scenarios {
            assert!(s.skill.parse::<Skill>().is_ok(), "unknown skill {}", s.skill);
        }
    }

    #[test]
    fn first_entries_match_reference_values() {
        let content = ContentTables::embedded().unwrap();
        let q = &content.questions[0];
        assert_eq!((q.correct_index, q.vybux_reward, q.xp_reward), (1, 10, 15));
        assert_eq!(q.skill, "Empathy");
        let s = &content.scenarios[0];
        assert_eq!((s.vybe_points_positive, s.vybe_points_negative), (5, -10));
        assert_eq!((s.xp_positive, s.xp_negative), (10, -5));
        assert_eq!(s.skill, "Self-Control");
    }

    #[test]
    fn empty_tables_are_rejected() {
        let err = ContentTables::new(vec![], vec![scenario("Empathy")]).unwrap_err();
        assert!(matches!(err, GameError::EmptyContent("quiz questions")));
        let err = ContentTables::new(vec![question(3, 0)], vec![]).unwrap_err();
        assert!(matches!(err, GameError::EmptyContent("life scenarios")));
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let err = ContentTables::new(vec![question(3, 0), question(3, 3)], vec![scenario("Empathy")])
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn unknown_skill_is_not_a_load_error() {
        let content = ContentTables::new(vec![question(2, 1)], vec![scenario("Telekinesis")]);
        assert!(content.is_ok());
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        let err = ContentTables::from_json("[{\"prompt\": 3}]", "[]").unwrap_err();
        assert!(matches!(err, GameError::Content(_)));
    }
}
