// Career assessment engine.
// Deterministic, rule-based career matching over a static questionnaire and career
// catalog. Used directly for ranked listings and as the fallback recommender when the
// LLM path fails. No I/O, no shared mutable state.

pub mod careers;
pub mod catalog;
pub mod handlers;
pub mod models;
pub mod questions;
pub mod ranking;
pub mod reasons;
pub mod scoring;

pub use catalog::Catalog;
pub use models::{AnswerSet, CareerRecommendation};
pub use ranking::{rank_all, recommend};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::assessment::models::{
        AnswerOption, AnswerSet, CareerPath, Question, QuestionCategory, QuestionId,
        QuestionKind, QuestionWeights, ScaleRange, WeightTable,
    };

    fn question(id: QuestionId, kind: QuestionKind, values: &[&str]) -> Question {
        Question {
            id,
            category: QuestionCategory::Skills,
            kind,
            text: format!("Question {id}"),
            description: None,
            options: values
                .iter()
                .map(|v| AnswerOption {
                    value: v.to_string(),
                    label: v.to_string(),
                })
                .collect(),
            scale: None,
            required: true,
        }
    }

    pub fn single_choice(id: QuestionId, values: &[&str]) -> Question {
        question(id, QuestionKind::SingleChoice, values)
    }

    pub fn multi_choice(id: QuestionId, values: &[&str]) -> Question {
        question(id, QuestionKind::MultiChoice, values)
    }

    pub fn free_text(id: QuestionId) -> Question {
        question(id, QuestionKind::FreeText, &[])
    }

    pub fn scale(id: QuestionId, max: f64) -> Question {
        Question {
            scale: Some(ScaleRange {
                min: 0.0,
                max,
                step: 1.0,
                min_label: None,
                max_label: None,
            }),
            ..question(id, QuestionKind::NumericScale, &[])
        }
    }

    pub fn options(pairs: &[(&str, f64)]) -> QuestionWeights {
        QuestionWeights::Options(pairs.iter().map(|(k, w)| (k.to_string(), *w)).collect())
    }

    pub fn career(id: &str, weights: Vec<(QuestionId, QuestionWeights)>) -> CareerPath {
        CareerPath {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            icon: "💼".to_string(),
            weights: weights.into_iter().collect::<WeightTable>(),
            suggested_skills: vec![],
            example_jobs: vec![],
            resources: vec![],
        }
    }

    /// A complete answer set that clearly points at technology & engineering.
    pub fn technical_profile() -> AnswerSet {
        AnswerSet::new()
            .with(QuestionId::ExperienceBackground, "early_career")
            .with(QuestionId::EducationLevel, "bachelors")
            .with(QuestionId::SkillStrengths, vec!["technical"])
            .with(QuestionId::FieldOfStudy, "computer_science")
            .with(QuestionId::EnjoyedSkills, vec!["coding", "problem_solving"])
            .with(QuestionId::WorkEnergizes, vec!["building", "learning"])
            .with(QuestionId::ProblemType, "technical")
            .with(QuestionId::IndustryInterest, "technology_engineering")
            .with(QuestionId::WorkStyle, "dynamic")
            .with(QuestionId::CareerPriority, "growth")
            .with(QuestionId::RiskTolerance, 5.0)
            .with(QuestionId::AdditionalContext, "I like shipping side projects")
    }
}
