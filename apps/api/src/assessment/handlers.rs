//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::grading::{grade, Answer, TestOutcome};
use crate::assessment::questions::QuestionView;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub job_title: String,
    pub role: String,
    pub questions: Vec<QuestionView>,
    pub total_points: u32,
}

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub job_title: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub role: String,
    #[serde(flatten)]
    pub outcome: TestOutcome,
}

/// GET /api/v1/assessments/questions?job_title=...
///
/// Returns the skills test for a job without the correct answers.
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<QuestionsResponse>, AppError> {
    if query.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let set = state.question_bank.for_job_title(&query.job_title);
    Ok(Json(QuestionsResponse {
        role: set.role.clone(),
        questions: set.questions.iter().map(QuestionView::from).collect(),
        total_points: set.total_points(),
        job_title: query.job_title,
    }))
}

/// POST /api/v1/assessments/grade
///
/// Grades submitted answers against the job's test and returns the objective test score.
pub async fn handle_grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<GradeResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let set = state.question_bank.for_job_title(&request.job_title);
    let outcome = grade(&set.questions, &request.answers);

    info!(role = %set.role, score = outcome.score, "skills test graded");

    Ok(Json(GradeResponse {
        role: set.role.clone(),
        outcome,
    }))
}
