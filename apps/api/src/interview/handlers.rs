//! Axum route handlers for the interview practice API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::evaluator::{evaluate_answer, EvaluationInput};
use crate::interview::generator::{generate_questions, DEFAULT_QUESTION_COUNT};
use crate::interview::models::{AnswerFeedback, InterviewQuestion};
use crate::interview::resources::{CategoryInfo, StudyResource, CATEGORIES, STUDY_RESOURCES};
use crate::interview::resume::{extract_text, ResumeFormat};
use crate::rate_limit::client_ip;
use crate::state::AppState;

const GENERATE_ROUTE: &str = "generate-questions";
const EVALUATE_ROUTE: &str = "evaluate-answer";
const RESUME_ROUTE: &str = "parse-resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    #[serde(default)]
    pub question: String,
    pub question_category: Option<String>,
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub feedback: AnswerFeedback,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub categories: &'static [CategoryInfo],
    pub resources: &'static [StudyResource],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let llm = state.llm()?;
    state.rate_limiter.enforce(
        GENERATE_ROUTE,
        &client_ip(&headers),
        state.config.rate_limits.generate_questions,
    )?;

    if request.job_description.trim().is_empty() || request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description and resume text are required".to_string(),
        ));
    }

    let questions = generate_questions(
        llm,
        &request.job_description,
        &request.resume_text,
        request.count.unwrap_or(DEFAULT_QUESTION_COUNT),
    )
    .await?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// POST /api/v1/interview/evaluate
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<EvaluateAnswerRequest>,
) -> Result<Json<EvaluateAnswerResponse>, AppError> {
    let llm = state.llm()?;
    state.rate_limiter.enforce(
        EVALUATE_ROUTE,
        &client_ip(&headers),
        state.config.rate_limits.evaluate_answer,
    )?;

    if request.question.trim().is_empty() || request.user_answer.trim().is_empty() {
        return Err(AppError::Validation(
            "Question and answer are required".to_string(),
        ));
    }

    let feedback = evaluate_answer(
        llm,
        EvaluationInput {
            question: &request.question,
            question_category: request.question_category.as_deref(),
            user_answer: &request.user_answer,
            job_description: &request.job_description,
            resume_text: &request.resume_text,
        },
    )
    .await?;

    Ok(Json(EvaluateAnswerResponse {
        feedback,
        evaluated_at: Utc::now(),
    }))
}

/// POST /api/v1/interview/resume
///
/// Multipart upload with a `file` field holding a PDF or DOCX resume.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    state.rate_limiter.enforce(
        RESUME_ROUTE,
        &client_ip(&headers),
        state.config.rate_limits.parse_resume,
    )?;

    let mut upload: Option<(String, bytes::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let format = ResumeFormat::from_file_name(&file_name).ok_or_else(|| {
        AppError::UnsupportedMedia("Unsupported file type. Please upload PDF or DOCX.".to_string())
    })?;

    let size = data.len();
    let text = tokio::task::spawn_blocking(move || extract_text(format, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow!("resume parser crashed: {e}")))?
        .map_err(|e| AppError::Validation(e.to_string()))?;

    info!(
        "Parsed {:?} resume: {} bytes in, {} chars out",
        format,
        size,
        text.chars().count()
    );

    Ok(Json(ParseResumeResponse {
        success: true,
        text,
    }))
}

/// GET /api/v1/interview/resources
pub async fn handle_get_resources() -> Json<ResourcesResponse> {
    Json(ResourcesResponse {
        categories: CATEGORIES,
        resources: STUDY_RESOURCES,
    })
}
