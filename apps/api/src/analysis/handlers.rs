//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::eligibility::{assess_eligibility, EligibilityDecision};
use crate::analysis::models::MatchResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub requirements_text: String,
    /// Job-level eligibility threshold (0-100). Omit to skip the eligibility decision.
    #[serde(default)]
    pub threshold_score: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<EligibilityDecision>,
}

/// POST /api/v1/analysis/match
///
/// Scores a resume against job requirements and, when a threshold is supplied, decides
/// whether the candidate may take the skills test.
pub async fn handle_estimate_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let match_result = state
        .estimator
        .estimate(&request.resume_text, &request.requirements_text)
        .await?;

    let eligibility = request
        .threshold_score
        .map(|threshold| assess_eligibility(match_result.score, threshold))
        .transpose()?;

    info!(
        score = match_result.score,
        backend = %match_result.analyzer_backend,
        eligible = eligibility.map(|e| e.eligible),
        "resume analysed"
    );

    Ok(Json(MatchResponse {
        match_result,
        eligibility,
    }))
}
