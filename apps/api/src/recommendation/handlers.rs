//! Axum route handler for career recommendations.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assessment::AnswerSet;
use crate::errors::AppError;
use crate::recommendation::Recommendations;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

/// POST /api/v1/recommendations
///
/// Top three career matches. Uses the configured recommender; with an LLM key
/// present that is the model with the rule engine as fallback.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendations>, AppError> {
    if request.answers.is_empty() {
        return Err(AppError::Validation("No answers provided".to_string()));
    }

    let recommendations = state.recommender.recommend(&request.answers).await?;

    Ok(Json(recommendations))
}
