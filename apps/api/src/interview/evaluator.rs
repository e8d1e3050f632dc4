//! Scores a practice answer and returns coaching feedback.

use tracing::debug;

use crate::errors::AppError;
use crate::interview::models::{AnswerFeedback, RawFeedback};
use crate::interview::prompts::{evaluate_answer_user_prompt, EVALUATE_ANSWER_SYSTEM_PROMPT};
use crate::llm_client::prompts::with_json_instruction;
use crate::llm_client::{LlmClient, Sampling};

/// Label used when the caller does not say what kind of question was asked.
pub const DEFAULT_QUESTION_CATEGORY: &str = "general";

const SAMPLING: Sampling = Sampling {
    temperature: 0.7,
    max_tokens: 1500,
};

pub struct EvaluationInput<'a> {
    pub question: &'a str,
    pub question_category: Option<&'a str>,
    pub user_answer: &'a str,
    pub job_description: &'a str,
    pub resume_text: &'a str,
}

pub async fn evaluate_answer(
    llm: &LlmClient,
    input: EvaluationInput<'_>,
) -> Result<AnswerFeedback, AppError> {
    let category = input
        .question_category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_QUESTION_CATEGORY);
    let system = with_json_instruction(EVALUATE_ANSWER_SYSTEM_PROMPT);
    let prompt = evaluate_answer_user_prompt(
        input.question,
        category,
        input.user_answer,
        input.job_description,
        input.resume_text,
    );

    let raw: RawFeedback = llm.call_json(&prompt, &system, SAMPLING).await?;
    let feedback = map_feedback(raw);
    debug!("Answer scored {}", feedback.score);

    Ok(feedback)
}

pub fn map_feedback(raw: RawFeedback) -> AnswerFeedback {
    let score = if raw.score.is_finite() {
        raw.score.clamp(0.0, 100.0).round() as u8
    } else {
        0
    };

    AnswerFeedback {
        score,
        strengths: raw.strengths,
        improvements: raw.improvements,
        sample_answer: raw.sample_answer,
        star_analysis: raw.star_analysis,
    }
}
