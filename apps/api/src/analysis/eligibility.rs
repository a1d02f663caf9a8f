use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Whether a candidate may proceed to the skills test for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
    pub match_score: u32,
    pub threshold_score: u32,
}

/// A candidate is eligible when the match score reaches the job's threshold (0-100).
pub fn assess_eligibility(
    match_score: u32,
    threshold_score: u32,
) -> Result<EligibilityDecision, AppError> {
    if threshold_score > 100 {
        return Err(AppError::Validation(format!(
            "threshold_score must be between 0 and 100, got {threshold_score}"
        )));
    }

    Ok(EligibilityDecision {
        eligible: match_score >= threshold_score,
        match_score,
        threshold_score,
    })
}
