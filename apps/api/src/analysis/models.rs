use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::taxonomy::SkillCategory;

/// Rejected analysis input. The application cannot be processed without both texts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("resume text is empty")]
    EmptyResume,

    #[error("job requirements text is empty")]
    EmptyRequirements,
}

/// Rejects blank resume or requirements text before any backend runs.
pub fn validate_input(resume_text: &str, requirements_text: &str) -> Result<(), InputError> {
    if resume_text.trim().is_empty() {
        return Err(InputError::EmptyResume);
    }
    if requirements_text.trim().is_empty() {
        return Err(InputError::EmptyRequirements);
    }
    Ok(())
}

/// Proficiency inferred from how often a skill keyword appears in the resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    /// ≥3 mentions → expert, 2 → intermediate, otherwise beginner.
    pub fn from_mentions(mentions: usize) -> Self {
        if mentions >= 3 {
            SkillLevel::Expert
        } else if mentions >= 2 {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub category: SkillCategory,
    pub priority: GapPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Phd,
    Masters,
    Bachelors,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub level: EducationLevel,
    /// Best-effort field of study, "Not specified" when nothing is recognised.
    pub field: String,
}

/// Result of analysing one resume against one job's requirements.
///
/// Both analyser backends produce this shape. Fields a backend cannot fill are empty or `None`
/// rather than absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 35-95
    pub score: u32,
    #[serde(default)]
    pub skills_matched: Vec<MatchedSkill>,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub industry_experience: Vec<String>,
    #[serde(default)]
    pub key_qualifications: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// "keyword" or "llm": which backend produced this result.
    #[serde(default)]
    pub analyzer_backend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_thresholds() {
        assert_eq!(SkillLevel::from_mentions(0), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_mentions(1), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_mentions(2), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_mentions(3), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_mentions(12), SkillLevel::Expert);
    }

    #[test]
    fn test_validate_input_rejects_blank_resume() {
        assert_eq!(validate_input("   \n", "Rust"), Err(InputError::EmptyResume));
    }

    #[test]
    fn test_validate_input_rejects_blank_requirements() {
        assert_eq!(validate_input("Rust dev", ""), Err(InputError::EmptyRequirements));
    }

    #[test]
    fn test_validate_input_accepts_text() {
        assert!(validate_input("Rust dev", "Rust").is_ok());
    }

    #[test]
    fn test_match_result_tolerates_missing_optional_fields() {
        let json = r#"{"score": 72, "summary": "Solid"}"#;
        let result: MatchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.score, 72);
        assert!(result.skills_matched.is_empty());
        assert!(result.education.is_none());
        assert_eq!(result.experience_years, 0);
    }

    #[test]
    fn test_education_level_serde() {
        let level: EducationLevel = serde_json::from_str(r#""masters""#).unwrap();
        assert_eq!(level, EducationLevel::Masters);
    }
}
