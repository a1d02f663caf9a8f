use serde::{Deserialize, Serialize};

use crate::scoring::experience::ExperienceLevel;
use crate::scoring::weightage::{WeightageConfig, WeightagePercent, STANDARD_WEIGHTAGE};

/// How a composite score was derived, so recruiters can audit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub resume_score: u32,
    pub test_score: u32,
    pub weighted_resume_score: u32,
    pub weighted_test_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeFitScore {
    /// 0-100
    pub composite_fit_score: u32,
    pub experience_level: ExperienceLevel,
    pub weightage: WeightagePercent,
    pub breakdown: ScoreBreakdown,
}

/// Blends a resume match score and a test score with the standard level weights.
pub fn calculate(resume_score: u32, test_score: u32, level: ExperienceLevel) -> CompositeFitScore {
    calculate_with(&STANDARD_WEIGHTAGE, resume_score, test_score, level)
}

/// `round(resume × resume_weight + test × test_weight)`. Scores above 100 are capped at 100.
///
/// The breakdown's weighted parts are rounded individually for display, so they may not sum
/// exactly to the composite.
pub fn calculate_with(
    config: &WeightageConfig,
    resume_score: u32,
    test_score: u32,
    level: ExperienceLevel,
) -> CompositeFitScore {
    let resume_score = resume_score.min(100);
    let test_score = test_score.min(100);
    let weights = config.weights(level);

    let weighted_resume = f64::from(resume_score) * weights.resume_weight;
    let weighted_test = f64::from(test_score) * weights.test_weight;
    let composite = (weighted_resume + weighted_test).round().clamp(0.0, 100.0) as u32;

    CompositeFitScore {
        composite_fit_score: composite,
        experience_level: level,
        weightage: weights.as_percentages(),
        breakdown: ScoreBreakdown {
            resume_score,
            test_score,
            weighted_resume_score: weighted_resume.round() as u32,
            weighted_test_score: weighted_test.round() as u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_level_example() {
        let result = calculate(80, 90, ExperienceLevel::Mid);
        assert_eq!(result.breakdown.weighted_resume_score, 32);
        assert_eq!(result.breakdown.weighted_test_score, 54);
        assert_eq!(result.composite_fit_score, 86);
        assert_eq!(result.weightage.resume_weight, 40);
        assert_eq!(result.weightage.test_weight, 60);
    }

    #[test]
    fn test_perfect_and_zero_scores_for_every_level() {
        for level in ExperienceLevel::ALL {
            assert_eq!(calculate(100, 100, level).composite_fit_score, 100, "{level}");
            assert_eq!(calculate(0, 0, level).composite_fit_score, 0, "{level}");
        }
    }

    #[test]
    fn test_composite_stays_within_bounds_over_grid() {
        for level in ExperienceLevel::ALL {
            for resume in (0..=100).step_by(7) {
                for test in (0..=100).step_by(9) {
                    let score = calculate(resume, test, level).composite_fit_score;
                    assert!(score <= 100, "{level} {resume} {test} -> {score}");
                }
            }
        }
    }

    #[test]
    fn test_entry_level_favours_resume() {
        let strong_resume = calculate(90, 40, ExperienceLevel::Entry).composite_fit_score;
        let strong_test = calculate(40, 90, ExperienceLevel::Entry).composite_fit_score;
        // 63 + 12 = 75 vs 28 + 27 = 55
        assert_eq!(strong_resume, 75);
        assert_eq!(strong_test, 55);
    }

    #[test]
    fn test_lead_level_favours_test() {
        let result = calculate(60, 80, ExperienceLevel::Lead);
        // 15 + 60
        assert_eq!(result.composite_fit_score, 75);
    }

    #[test]
    fn test_scores_above_100_are_capped() {
        let result = calculate(250, 100, ExperienceLevel::Senior);
        assert_eq!(result.breakdown.resume_score, 100);
        assert_eq!(result.composite_fit_score, 100);
    }

    #[test]
    fn test_rounding_half_up() {
        // 50 × 0.25 + 0 = 12.5 → 13
        let result = calculate(50, 0, ExperienceLevel::Lead);
        assert_eq!(result.composite_fit_score, 13);
        assert_eq!(result.breakdown.weighted_resume_score, 13);
    }

    #[test]
    fn test_breakdown_echoes_inputs_and_level() {
        let result = calculate(70, 65, ExperienceLevel::Senior);
        assert_eq!(result.experience_level, ExperienceLevel::Senior);
        assert_eq!(result.breakdown.resume_score, 70);
        assert_eq!(result.breakdown.test_score, 65);
    }
}
