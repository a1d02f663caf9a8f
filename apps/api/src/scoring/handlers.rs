//! Axum route handlers for the Scoring API.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::composite::{calculate, CompositeFitScore};
use crate::scoring::experience::{classify, ExperienceLevel};
use crate::scoring::ranking::{rank_candidates, CandidateRecord, RankedCandidate};
use crate::scoring::weightage::{weightage_info, WeightageInfo, STANDARD_WEIGHTAGE};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub role_title: String,
    #[serde(default)]
    pub experience_years: u32,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Deserialize)]
pub struct CompositeRequest {
    pub resume_score: u32,
    pub test_score: u32,
    /// Free-form label; anything unrecognised is scored as "mid".
    pub experience_level: String,
}

#[derive(Debug, Deserialize)]
pub struct WeightageQuery {
    pub role_title: String,
}

#[derive(Debug, Serialize)]
pub struct RoleWeightageResponse {
    pub role_title: String,
    #[serde(flatten)]
    pub weightage: WeightageInfo,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<CandidateRecord>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub candidates: Vec<RankedCandidate>,
}

fn check_score(name: &str, value: u32) -> Result<(), AppError> {
    if value > 100 {
        return Err(AppError::Validation(format!(
            "{name} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scoring/experience-level
pub async fn handle_classify(
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.role_title.trim().is_empty() {
        return Err(AppError::Validation("role_title cannot be empty".to_string()));
    }
    Ok(Json(ClassifyResponse {
        experience_level: classify(&request.role_title, request.experience_years),
    }))
}

/// POST /api/v1/scoring/composite
///
/// Returns the composite fit score with its full breakdown.
pub async fn handle_composite(
    Json(request): Json<CompositeRequest>,
) -> Result<Json<CompositeFitScore>, AppError> {
    check_score("resume_score", request.resume_score)?;
    check_score("test_score", request.test_score)?;

    let level = ExperienceLevel::from_label(&request.experience_level);
    Ok(Json(calculate(request.resume_score, request.test_score, level)))
}

/// GET /api/v1/scoring/weightage?role_title=...
///
/// Weights a role is evaluated with, judged from its title alone.
pub async fn handle_role_weightage(
    Query(query): Query<WeightageQuery>,
) -> Result<Json<RoleWeightageResponse>, AppError> {
    if query.role_title.trim().is_empty() {
        return Err(AppError::Validation("role_title cannot be empty".to_string()));
    }
    let level = classify(&query.role_title, 0);
    Ok(Json(RoleWeightageResponse {
        role_title: query.role_title,
        weightage: weightage_info(&STANDARD_WEIGHTAGE, level),
    }))
}

/// GET /api/v1/scoring/weightage/levels
pub async fn handle_weightage_table() -> Json<Vec<WeightageInfo>> {
    Json(
        ExperienceLevel::ALL
            .into_iter()
            .map(|level| weightage_info(&STANDARD_WEIGHTAGE, level))
            .collect(),
    )
}

/// POST /api/v1/scoring/rank
pub async fn handle_rank(
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    for record in &request.candidates {
        check_score("resume_score", record.resume_score)?;
        if let Some(test_score) = record.test_score {
            check_score("test_score", test_score)?;
        }
    }

    Ok(Json(RankResponse {
        candidates: rank_candidates(request.candidates),
    }))
}
