pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assessment::handlers as assessment;
use crate::errors::AppError;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route(
            "/api/v1/analysis/match",
            post(analysis::handle_estimate_match),
        )
        // Composite scoring
        .route(
            "/api/v1/scoring/experience-level",
            post(scoring::handle_classify),
        )
        .route("/api/v1/scoring/composite", post(scoring::handle_composite))
        .route(
            "/api/v1/scoring/weightage",
            get(scoring::handle_role_weightage),
        )
        .route(
            "/api/v1/scoring/weightage/levels",
            get(scoring::handle_weightage_table),
        )
        .route("/api/v1/scoring/rank", post(scoring::handle_rank))
        // Skills test
        .route(
            "/api/v1/assessments/questions",
            get(assessment::handle_get_questions),
        )
        .route("/api/v1/assessments/grade", post(assessment::handle_grade))
        .fallback(not_found)
        .with_state(state)
}
