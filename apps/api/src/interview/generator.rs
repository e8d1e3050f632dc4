//! Tailored interview question generation.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{InterviewCategory, InterviewQuestion, RawQuestion, RawQuestionList};
use crate::interview::prompts::{generate_questions_user_prompt, GENERATE_QUESTIONS_SYSTEM_PROMPT};
use crate::llm_client::prompts::with_json_instruction;
use crate::llm_client::{LlmClient, LlmError, Sampling};

pub const DEFAULT_QUESTION_COUNT: usize = 12;
pub const MAX_QUESTION_COUNT: usize = 20;

const SAMPLING: Sampling = Sampling {
    temperature: 0.8,
    max_tokens: 3000,
};

/// Unknown categories from the model are filed as behavioral.
const FALLBACK_CATEGORY: InterviewCategory = InterviewCategory::Behavioral;

pub async fn generate_questions(
    llm: &LlmClient,
    job_description: &str,
    resume_text: &str,
    count: usize,
) -> Result<Vec<InterviewQuestion>, AppError> {
    let count = count.clamp(1, MAX_QUESTION_COUNT);
    let system = with_json_instruction(GENERATE_QUESTIONS_SYSTEM_PROMPT);
    let prompt = generate_questions_user_prompt(job_description, resume_text, count);

    let reply: RawQuestionList = llm.call_json(&prompt, &system, SAMPLING).await?;
    debug!("LLM returned {} raw questions", reply.questions.len());

    let questions = map_questions(reply.questions, count);
    if questions.is_empty() {
        return Err(AppError::Llm(LlmError::EmptyContent));
    }

    info!("Generated {} interview questions", questions.len());
    Ok(questions)
}

/// Drops blank questions, fills missing ids and keeps at most `count`.
pub fn map_questions(raw: Vec<RawQuestion>, count: usize) -> Vec<InterviewQuestion> {
    raw.into_iter()
        .filter(|q| !q.text.trim().is_empty())
        .take(count)
        .map(|q| InterviewQuestion {
            id: q
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            text: q.text.trim().to_string(),
            category: InterviewCategory::parse(&q.category).unwrap_or(FALLBACK_CATEGORY),
            context: q.context.filter(|c| !c.trim().is_empty()),
            skills_assessed: q.skills_assessed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: Option<&str>, text: &str, category: &str) -> RawQuestion {
        RawQuestion {
            id: id.map(str::to_string),
            text: text.to_string(),
            category: category.to_string(),
            context: None,
            skills_assessed: vec![],
        }
    }

    #[test]
    fn test_missing_ids_are_filled_with_uuids() {
        let questions = map_questions(
            vec![
                raw(None, "Tell me about a time you failed.", "behavioral"),
                raw(Some(""), "How do you test async code?", "technical"),
                raw(Some("q-3"), "What team culture suits you?", "cultural"),
            ],
            12,
        );
        assert_eq!(questions.len(), 3);
        assert!(Uuid::parse_str(&questions[0].id).is_ok());
        assert!(Uuid::parse_str(&questions[1].id).is_ok());
        assert_ne!(questions[0].id, questions[1].id);
        assert_eq!(questions[2].id, "q-3");
    }

    #[test]
    fn test_blank_questions_dropped_and_count_respected() {
        let questions = map_questions(
            vec![
                raw(None, "  ", "behavioral"),
                raw(None, "One", "technical"),
                raw(None, "Two", "situational"),
                raw(None, "Three", "cultural"),
            ],
            2,
        );
        let texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "Two"]);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let questions = map_questions(vec![raw(None, "Why?", "general")], 1);
        assert_eq!(questions[0].category, FALLBACK_CATEGORY);
    }
}
