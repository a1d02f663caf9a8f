use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse seniority bucket that drives resume/test weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }

    /// Resolves a stored or client-supplied label. Unknown labels resolve to `Mid`, so
    /// legacy values outside the enumeration keep scoring with balanced weights.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "entry" => ExperienceLevel::Entry,
            "mid" => ExperienceLevel::Mid,
            "senior" => ExperienceLevel::Senior,
            "lead" => ExperienceLevel::Lead,
            _ => ExperienceLevel::Mid,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a role/candidate pair. First match wins:
///
/// 1. title mentions "senior" / "sr." → senior
/// 2. title mentions "lead" / "principal" / "architect" → lead
/// 3. title mentions "junior" / "jr." / "intern" → entry
/// 4. otherwise by years: ≥8 lead, ≥5 senior, ≥2 mid, else entry
///
/// The title always wins over years: the role sets the evaluation bar, so ten years of
/// experience applying to a "Junior Developer" role is still `Entry`.
pub fn classify(role_title: &str, experience_years: u32) -> ExperienceLevel {
    let title = role_title.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|kw| title.contains(kw));

    if mentions(&["senior", "sr."]) {
        return ExperienceLevel::Senior;
    }
    if mentions(&["lead", "principal", "architect"]) {
        return ExperienceLevel::Lead;
    }
    if mentions(&["junior", "jr.", "intern"]) {
        return ExperienceLevel::Entry;
    }

    match experience_years {
        8.. => ExperienceLevel::Lead,
        5..=7 => ExperienceLevel::Senior,
        2..=4 => ExperienceLevel::Mid,
        _ => ExperienceLevel::Entry,
    }
}
