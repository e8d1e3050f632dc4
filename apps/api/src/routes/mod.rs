pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::interview::handlers as interview;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handle_get_questions),
        )
        .route("/api/v1/careers", get(assessment::handle_get_careers))
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .route(
            "/api/v1/recommendations/ranked",
            post(assessment::handle_rank_all),
        )
        // Interview API
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interview/evaluate",
            post(interview::handle_evaluate_answer),
        )
        .route(
            "/api/v1/interview/resume",
            post(interview::handle_parse_resume).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/api/v1/interview/resources",
            get(interview::handle_get_resources),
        )
        .with_state(state)
}
