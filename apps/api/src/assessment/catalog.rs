//! Static catalog of questions and career paths. Built once, read-only afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

use crate::assessment::careers::builtin_careers;
use crate::assessment::models::{
    CareerPath, Question, QuestionCategory, QuestionId, QuestionKind, QuestionWeights,
};
use crate::assessment::questions::builtin_questions;

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(builtin_questions(), builtin_careers()));

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(QuestionId),

    #[error("duplicate career id '{0}'")]
    DuplicateCareer(String),

    #[error("scale question '{0}' has no numeric range")]
    MissingScaleRange(QuestionId),

    #[error("career '{career}' weights question '{question}' which is not in the catalog")]
    UnknownQuestion { career: String, question: QuestionId },

    #[error("career '{career}' declares weights for '{question}' that do not fit its input type")]
    ShapeMismatch { career: String, question: QuestionId },

    #[error("career '{career}' weights unknown option '{option}' of '{question}'")]
    UnknownOption {
        career: String,
        question: QuestionId,
        option: String,
    },

    #[error("career '{career}' has a negative or non-finite weight for '{question}'")]
    InvalidWeight { career: String, question: QuestionId },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    careers: Vec<CareerPath>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>, careers: Vec<CareerPath>) -> Self {
        Self { questions, careers }
    }

    /// The questionnaire and career catalog shipped with the service.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn careers(&self) -> &[CareerPath] {
        &self.careers
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn career(&self, id: &str) -> Option<&CareerPath> {
        self.careers.iter().find(|c| c.id == id)
    }

    pub fn questions_by_category(
        &self,
        category: QuestionCategory,
    ) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }

    /// Checks that every weight table references known questions and options with
    /// a shape matching the question's input type.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_questions = HashSet::new();
        for question in &self.questions {
            if !seen_questions.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            if question.kind == QuestionKind::NumericScale && question.scale.is_none() {
                return Err(CatalogError::MissingScaleRange(question.id));
            }
        }

        let mut seen_careers = HashSet::new();
        for career in &self.careers {
            if !seen_careers.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateCareer(career.id.clone()));
            }
            for (question_id, weights) in &career.weights {
                let question = self.question(*question_id).ok_or_else(|| {
                    CatalogError::UnknownQuestion {
                        career: career.id.clone(),
                        question: *question_id,
                    }
                })?;
                validate_weights(career, question, weights)?;
            }
        }

        Ok(())
    }
}

fn validate_weights(
    career: &CareerPath,
    question: &Question,
    weights: &QuestionWeights,
) -> Result<(), CatalogError> {
    if weights.weights().iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(CatalogError::InvalidWeight {
            career: career.id.clone(),
            question: question.id,
        });
    }

    match (question.kind, weights) {
        (
            QuestionKind::SingleChoice | QuestionKind::MultiChoice,
            QuestionWeights::Options(table),
        ) => {
            if let Some(option) = table.keys().find(|k| question.option_label(k).is_none()) {
                return Err(CatalogError::UnknownOption {
                    career: career.id.clone(),
                    question: question.id,
                    option: option.clone(),
                });
            }
            Ok(())
        }
        (QuestionKind::NumericScale, QuestionWeights::Tiers(_)) => Ok(()),
        _ => Err(CatalogError::ShapeMismatch {
            career: career.id.clone(),
            question: question.id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::fixtures;
    use crate::assessment::models::TierWeights;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(Catalog::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.questions()[0].id, QuestionId::ExperienceBackground);
        assert_eq!(catalog.careers()[0].id, "technology_engineering");
        assert!(catalog.career("beauty_fashion").is_some());
        assert!(catalog.career("astronaut").is_none());
    }

    #[test]
    fn test_questions_by_category() {
        let background: Vec<_> = Catalog::builtin()
            .questions_by_category(QuestionCategory::Background)
            .map(|q| q.id)
            .collect();
        assert_eq!(
            background,
            vec![QuestionId::ExperienceBackground, QuestionId::EducationLevel]
        );
    }

    #[test]
    fn test_rejects_weights_for_unknown_question() {
        let career = fixtures::career(
            "orphan",
            vec![(QuestionId::WorkStyle, fixtures::options(&[("solo", 1.0)]))],
        );
        let catalog = Catalog::new(
            vec![fixtures::single_choice(QuestionId::SkillStrengths, &["technical"])],
            vec![career],
        );
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownQuestion {
                career: "orphan".to_string(),
                question: QuestionId::WorkStyle,
            })
        );
    }

    #[test]
    fn test_rejects_unknown_option() {
        let career = fixtures::career(
            "typo",
            vec![(QuestionId::SkillStrengths, fixtures::options(&[("tecnical", 1.0)]))],
        );
        let catalog = Catalog::new(
            vec![fixtures::single_choice(QuestionId::SkillStrengths, &["technical"])],
            vec![career],
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_rejects_tiers_on_choice_question() {
        let career = fixtures::career(
            "mismatch",
            vec![(
                QuestionId::SkillStrengths,
                QuestionWeights::Tiers(TierWeights::default()),
            )],
        );
        let catalog = Catalog::new(
            vec![fixtures::single_choice(QuestionId::SkillStrengths, &["technical"])],
            vec![career],
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let career = fixtures::career(
            "negative",
            vec![(QuestionId::SkillStrengths, fixtures::options(&[("technical", -1.0)]))],
        );
        let catalog = Catalog::new(
            vec![fixtures::single_choice(QuestionId::SkillStrengths, &["technical"])],
            vec![career],
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_career() {
        let catalog = Catalog::new(
            vec![],
            vec![fixtures::career("a", vec![]), fixtures::career("a", vec![])],
        );
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateCareer("a".to_string()))
        );
    }
}
