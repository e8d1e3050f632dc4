//! Interview practice data model, plus the raw shapes the LLM is asked to return.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewCategory {
    Behavioral,
    Technical,
    Situational,
    Cultural,
}

impl InterviewCategory {
    /// Order in which categories are requested from the model.
    pub const ALL: [InterviewCategory; 4] = [
        InterviewCategory::Behavioral,
        InterviewCategory::Technical,
        InterviewCategory::Situational,
        InterviewCategory::Cultural,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InterviewCategory::Behavioral => "behavioral",
            InterviewCategory::Technical => "technical",
            InterviewCategory::Situational => "situational",
            InterviewCategory::Cultural => "cultural",
        }
    }

    /// Case-insensitive parse. Unknown labels are `None`.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewQuestion {
    pub id: String,
    pub text: String,
    pub category: InterviewCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub skills_assessed: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarAnalysis {
    #[serde(default)]
    pub situation: bool,
    #[serde(default)]
    pub task: bool,
    #[serde(default)]
    pub action: bool,
    #[serde(default)]
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerFeedback {
    /// 0 – 100
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub sample_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_analysis: Option<StarAnalysis>,
}

// ────────────────────────────────────────────────────────────────────────────
// LLM reply shapes (camelCase as prompted; snake_case tolerated)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RawQuestionList {
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
    pub context: Option<String>,
    #[serde(default, alias = "skills_assessed")]
    pub skills_assessed: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeedback {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default, alias = "sample_answer")]
    pub sample_answer: String,
    #[serde(alias = "star_analysis")]
    pub star_analysis: Option<StarAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            InterviewCategory::parse(" Technical "),
            Some(InterviewCategory::Technical)
        );
        assert_eq!(InterviewCategory::parse("general"), None);
    }

    #[test]
    fn test_raw_question_accepts_camel_and_snake_case() {
        let camel: RawQuestion =
            serde_json::from_str(r#"{"text":"Why?","category":"cultural","skillsAssessed":["fit"]}"#)
                .unwrap();
        let snake: RawQuestion =
            serde_json::from_str(r#"{"text":"Why?","category":"cultural","skills_assessed":["fit"]}"#)
                .unwrap();
        assert_eq!(camel.skills_assessed, vec!["fit"]);
        assert_eq!(snake.skills_assessed, vec!["fit"]);
        assert!(camel.id.is_none());
    }

    #[test]
    fn test_feedback_serializes_snake_case() {
        let feedback = AnswerFeedback {
            score: 72,
            strengths: vec!["Clear".to_string()],
            improvements: vec![],
            sample_answer: "In my last role...".to_string(),
            star_analysis: None,
        };
        let value = serde_json::to_value(&feedback).unwrap();
        assert_eq!(value["sample_answer"], "In my last role...");
        assert!(value.get("star_analysis").is_none());
    }
}
