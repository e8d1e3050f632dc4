//! Assessment data model: questionnaire, career catalog entries, answers and
//! the recommendation output shared by every recommender backend.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Questions
// ────────────────────────────────────────────────────────────────────────────

/// Closed set of questionnaire identifiers. Serialized as snake_case keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    ExperienceBackground,
    EducationLevel,
    SkillStrengths,
    FieldOfStudy,
    EnjoyedSkills,
    WorkEnergizes,
    ProblemType,
    IndustryInterest,
    WorkStyle,
    CareerPriority,
    RiskTolerance,
    AdditionalContext,
}

impl QuestionId {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::ExperienceBackground => "experience_background",
            QuestionId::EducationLevel => "education_level",
            QuestionId::SkillStrengths => "skill_strengths",
            QuestionId::FieldOfStudy => "field_of_study",
            QuestionId::EnjoyedSkills => "enjoyed_skills",
            QuestionId::WorkEnergizes => "work_energizes",
            QuestionId::ProblemType => "problem_type",
            QuestionId::IndustryInterest => "industry_interest",
            QuestionId::WorkStyle => "work_style",
            QuestionId::CareerPriority => "career_priority",
            QuestionId::RiskTolerance => "risk_tolerance",
            QuestionId::AdditionalContext => "additional_context",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Background,
    Skills,
    Interests,
    Preferences,
    Goals,
}

impl QuestionCategory {
    /// Display order of the assessment steps.
    pub const ALL: [QuestionCategory; 5] = [
        QuestionCategory::Background,
        QuestionCategory::Skills,
        QuestionCategory::Interests,
        QuestionCategory::Preferences,
        QuestionCategory::Goals,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuestionCategory::Background => "Background",
            QuestionCategory::Skills => "Skills",
            QuestionCategory::Interests => "Interests",
            QuestionCategory::Preferences => "Preferences",
            QuestionCategory::Goals => "Goals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    NumericScale,
    FreeText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: QuestionCategory,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleRange>,
    pub required: bool,
}

impl Question {
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career paths and their weight tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleTier {
    Low,
    Medium,
    High,
}

/// Weights for the three buckets of a numeric-scale question. `None` = undeclared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierWeights {
    pub low: Option<f64>,
    pub medium: Option<f64>,
    pub high: Option<f64>,
}

impl TierWeights {
    pub fn get(&self, tier: ScaleTier) -> Option<f64> {
        match tier {
            ScaleTier::Low => self.low,
            ScaleTier::Medium => self.medium,
            ScaleTier::High => self.high,
        }
    }

    fn declared(&self) -> impl Iterator<Item = f64> {
        [self.low, self.medium, self.high].into_iter().flatten()
    }
}

/// The weights one career declares for one question.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionWeights {
    /// Option value → weight, for single- and multi-choice questions.
    Options(BTreeMap<String, f64>),
    /// Tier → weight, for numeric-scale questions.
    Tiers(TierWeights),
}

impl QuestionWeights {
    /// Largest declared weight, or 0.0 when nothing is declared.
    pub fn max_weight(&self) -> f64 {
        self.weights().into_iter().fold(0.0, f64::max)
    }

    /// Every declared weight, in key order.
    pub fn weights(&self) -> Vec<f64> {
        match self {
            QuestionWeights::Options(table) => table.values().copied().collect(),
            QuestionWeights::Tiers(tiers) => tiers.declared().collect(),
        }
    }
}

/// question-id → weights. A missing key means the question does not affect the career.
pub type WeightTable = BTreeMap<QuestionId, QuestionWeights>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(skip)]
    pub weights: WeightTable,
    pub suggested_skills: Vec<String>,
    pub example_jobs: Vec<String>,
    pub resources: Vec<Resource>,
}

// ────────────────────────────────────────────────────────────────────────────
// Answers
// ────────────────────────────────────────────────────────────────────────────

/// A single answer. The expected shape depends on the question type; anything
/// that fits none of the known shapes is kept as `Unrecognized` and scores zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Choices(Vec<String>),
    Unrecognized(serde_json::Value),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Choices(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Choices(values.into_iter().map(String::from).collect())
    }
}

/// question-id → answer, as submitted by the client. Null entries are dropped on
/// deserialization; unknown keys are kept but never looked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<AnswerValue>>")]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, question: QuestionId, value: impl Into<AnswerValue>) -> Self {
        self.insert(question, value);
        self
    }

    #[cfg(test)]
    pub fn insert(&mut self, question: QuestionId, value: impl Into<AnswerValue>) {
        self.0.insert(question.as_str().to_string(), value.into());
    }

    pub fn get(&self, question: QuestionId) -> Option<&AnswerValue> {
        self.0.get(question.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<BTreeMap<String, Option<AnswerValue>>> for AnswerSet {
    fn from(raw: BTreeMap<String, Option<AnswerValue>>) -> Self {
        AnswerSet(
            raw.into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring output
// ────────────────────────────────────────────────────────────────────────────

/// Weight earned by one answered question toward one career.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreContribution {
    pub question_id: QuestionId,
    pub question_text: String,
    pub answer: AnswerValue,
    /// Bucket the answer fell into, for numeric-scale questions.
    pub tier: Option<ScaleTier>,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerRecommendation {
    pub career: CareerPath,
    /// 0.0 – 1.0, relative to what this career could earn from the given answers.
    pub score: f64,
    /// round(score × 100)
    pub percentage: u8,
    pub reasons: Vec<String>,
}
