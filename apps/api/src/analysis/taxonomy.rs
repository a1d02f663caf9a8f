//! Keyword taxonomy used by the heuristic resume analyser.
//!
//! Every list here is matched as a case-insensitive substring against lower-cased text, so
//! entries must be written in lower case. Order matters: matched skills and gaps are reported
//! in taxonomy order, and education fields resolve to the first hit.

use serde::{Deserialize, Serialize};

/// Skill families recognised by the analyser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Database,
    Cloud,
    Tools,
    Marketing,
    Data,
    Soft,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Tools => "tools",
            SkillCategory::Marketing => "marketing",
            SkillCategory::Data => "data",
            SkillCategory::Soft => "soft",
        }
    }
}

/// Immutable keyword tables. Shared by reference across every analysis; never mutated.
#[derive(Debug)]
pub struct Taxonomy {
    pub skills: &'static [(SkillCategory, &'static [&'static str])],
    pub certifications: &'static [&'static str],
    pub phd_keywords: &'static [&'static str],
    pub masters_keywords: &'static [&'static str],
    pub bachelors_keywords: &'static [&'static str],
    pub education_fields: &'static [&'static str],
    pub industries: &'static [&'static str],
}

/// The taxonomy the platform ships with.
pub static STANDARD_TAXONOMY: Taxonomy = Taxonomy {
    skills: &[
        (
            SkillCategory::Programming,
            &[
                "javascript", "python", "java", "c++", "c#", "php", "ruby", "go", "rust",
                "typescript",
            ],
        ),
        (
            SkillCategory::Frontend,
            &["react", "vue", "angular", "html", "css", "sass", "bootstrap", "tailwind"],
        ),
        (
            SkillCategory::Backend,
            &["node.js", "express", "django", "flask", "spring", "laravel", ".net"],
        ),
        (
            SkillCategory::Database,
            &["sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
        ),
        (
            SkillCategory::Cloud,
            &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
        ),
        (
            SkillCategory::Tools,
            &["git", "jenkins", "jira", "confluence", "slack", "figma", "photoshop"],
        ),
        (
            SkillCategory::Marketing,
            &[
                "seo", "sem", "google ads", "facebook ads", "analytics", "hubspot", "mailchimp",
            ],
        ),
        (
            SkillCategory::Data,
            &[
                "machine learning", "pandas", "numpy", "tensorflow", "pytorch", "tableau",
                "power bi",
            ],
        ),
        (
            SkillCategory::Soft,
            &[
                "leadership", "communication", "teamwork", "problem solving",
                "project management",
            ],
        ),
    ],
    certifications: &[
        "aws certified",
        "azure certified",
        "google cloud certified",
        "pmp certified",
        "scrum master",
        "cissp",
        "comptia",
        "cisco certified",
        "microsoft certified",
        "salesforce certified",
        "hubspot certified",
        "google analytics certified",
    ],
    phd_keywords: &["phd", "doctorate"],
    // Trailing spaces keep "ms "/"ma " from matching inside ordinary words like "terms".
    masters_keywords: &["master", "mba", "ms ", "ma "],
    bachelors_keywords: &["bachelor", "bs ", "ba ", "btech"],
    education_fields: &[
        "computer science",
        "engineering",
        "business",
        "marketing",
        "data science",
        "mathematics",
        "statistics",
    ],
    industries: &[
        "fintech",
        "healthcare",
        "e-commerce",
        "saas",
        "startup",
        "enterprise",
        "consulting",
    ],
};
