use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::composite::{calculate, CompositeFitScore};
use crate::scoring::experience::classify;

/// Candidate identity. Supplied per request; the scoring core never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub application_id: Option<Uuid>,
    pub candidate: Candidate,
    pub role_title: String,
    #[serde(default)]
    pub experience_years: u32,
    pub resume_score: u32,
    /// Candidates who have not taken the test rank with a test score of 0.
    #[serde(default)]
    pub test_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub record: CandidateRecord,
    #[serde(flatten)]
    pub fit: CompositeFitScore,
}

/// Scores every record and orders by composite fit score, highest first.
///
/// The sort is stable: candidates with equal scores keep their input order.
pub fn rank_candidates(records: Vec<CandidateRecord>) -> Vec<RankedCandidate> {
    let mut scored: Vec<(CandidateRecord, CompositeFitScore)> = records
        .into_iter()
        .map(|record| {
            let level = classify(&record.role_title, record.experience_years);
            let fit = calculate(record.resume_score, record.test_score.unwrap_or(0), level);
            (record, fit)
        })
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.composite_fit_score.cmp(&a.composite_fit_score));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (record, fit))| RankedCandidate {
            rank: i + 1,
            record,
            fit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::experience::ExperienceLevel;

    fn record(name: &str, role: &str, years: u32, resume: u32, test: Option<u32>) -> CandidateRecord {
        CandidateRecord {
            application_id: None,
            candidate: Candidate {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: None,
            },
            role_title: role.to_string(),
            experience_years: years,
            resume_score: resume,
            test_score: test,
        }
    }

    #[test]
    fn test_ranked_descending_by_composite() {
        let ranked = rank_candidates(vec![
            record("Ana", "Engineer", 3, 60, Some(50)),
            record("Ben", "Engineer", 3, 90, Some(95)),
            record("Cy", "Engineer", 3, 70, Some(80)),
        ]);
        let names: Vec<&str> = ranked.iter().map(|r| r.record.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Cy", "Ana"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].fit.composite_fit_score >= pair[1].fit.composite_fit_score);
        }
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_missing_test_score_counts_as_zero() {
        let ranked = rank_candidates(vec![record("Dee", "Engineer", 3, 80, None)]);
        assert_eq!(ranked[0].fit.breakdown.test_score, 0);
        // mid: 80 × 0.4
        assert_eq!(ranked[0].fit.composite_fit_score, 32);
    }

    #[test]
    fn test_each_record_classified_by_its_own_role() {
        let ranked = rank_candidates(vec![
            record("Eve", "Junior Developer", 10, 80, Some(40)),
            record("Fay", "Senior Developer", 0, 80, Some(40)),
        ]);
        // entry: 56 + 12 = 68; senior: 24 + 28 = 52
        assert_eq!(ranked[0].record.candidate.name, "Eve");
        assert_eq!(ranked[0].fit.experience_level, ExperienceLevel::Entry);
        assert_eq!(ranked[0].fit.composite_fit_score, 68);
        assert_eq!(ranked[1].fit.experience_level, ExperienceLevel::Senior);
        assert_eq!(ranked[1].fit.composite_fit_score, 52);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_candidates(vec![
            record("First", "Engineer", 3, 70, Some(70)),
            record("Second", "Engineer", 3, 70, Some(70)),
            record("Third", "Engineer", 3, 70, Some(70)),
        ]);
        let names: Vec<&str> = ranked.iter().map(|r| r.record.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_empty_input_ranks_nothing() {
        assert!(rank_candidates(vec![]).is_empty());
    }

    #[test]
    fn test_ranked_candidate_serializes_flat() {
        let ranked = rank_candidates(vec![record("Gil", "Engineer", 3, 80, Some(90))]);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["rank"], 1);
        assert_eq!(json["candidate"]["name"], "Gil");
        assert_eq!(json["composite_fit_score"], 86);
        assert_eq!(json["experience_level"], "mid");
        assert_eq!(json["breakdown"]["weighted_test_score"], 54);
    }
}
