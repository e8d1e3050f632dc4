//! Axum route handlers for the questionnaire, the career catalog and ranked listings.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::assessment::models::{CareerPath, Question, QuestionCategory};
use crate::assessment::{rank_all, CareerRecommendation};
use crate::recommendation::handlers::RecommendRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub id: QuestionCategory,
    pub title: &'static str,
    pub question_count: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireResponse {
    pub categories: Vec<CategoryInfo>,
    pub questions: &'static [Question],
}

#[derive(Debug, Serialize)]
pub struct CareersResponse {
    pub careers: &'static [CareerPath],
}

#[derive(Debug, Serialize)]
pub struct RankedResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionnaireResponse> {
    let catalog = state.catalog;
    let categories = QuestionCategory::ALL
        .into_iter()
        .map(|category| CategoryInfo {
            id: category,
            title: category.title(),
            question_count: catalog.questions_by_category(category).count(),
        })
        .filter(|info| info.question_count > 0)
        .collect();

    Json(QuestionnaireResponse {
        categories,
        questions: catalog.questions(),
    })
}

/// GET /api/v1/careers
pub async fn handle_get_careers(State(state): State<AppState>) -> Json<CareersResponse> {
    Json(CareersResponse {
        careers: state.catalog.careers(),
    })
}

/// POST /api/v1/recommendations/ranked
///
/// Every career scored by the rule engine, best match first. An empty answer set
/// is accepted and lists every career at 0% in catalog order.
pub async fn handle_rank_all(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RankedResponse> {
    Json(RankedResponse {
        recommendations: rank_all(state.catalog, &request.answers),
    })
}
