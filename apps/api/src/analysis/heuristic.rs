//! Keyword heuristic resume analyser.
//!
//! Pure function of `(resume_text, requirements_text)`: no I/O, no randomness, no shared
//! mutable state. Matching is plain case-insensitive substring search, so short keywords
//! ("go", "java", "sql") also hit inside longer words. Skill level is a mention-count proxy,
//! not semantic understanding; downstream consumers depend on its exact thresholds.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::{
    Education, EducationLevel, GapPriority, MatchResult, MatchedSkill, SkillGap, SkillLevel,
};
use crate::analysis::narrative;
use crate::analysis::taxonomy::Taxonomy;

/// Matches "5 years experience", "10 years of experience", "2 year exp".
static YEARS_OF_EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*years?\s*(?:of\s*)?(?:experience|exp)").expect("valid regex")
});

pub const BACKEND_LABEL: &str = "keyword";

/// Score contributions. `Default` is the production table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicWeights {
    pub base_score: u32,
    pub per_matched_skill: u32,
    pub per_certification: u32,
    /// masters or phd
    pub advanced_degree: u32,
    pub bachelors_degree: u32,
    pub per_experience_year: u32,
    pub experience_cap: u32,
    pub per_shared_industry: u32,
    pub score_floor: u32,
    pub score_ceiling: u32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            base_score: 50,
            per_matched_skill: 4,
            per_certification: 8,
            advanced_degree: 10,
            bachelors_degree: 5,
            per_experience_year: 2,
            experience_cap: 20,
            per_shared_industry: 5,
            score_floor: 35,
            score_ceiling: 95,
        }
    }
}

/// Runs the full heuristic. Callers validate that both texts are non-blank first.
pub fn analyze(
    taxonomy: &Taxonomy,
    weights: &HeuristicWeights,
    resume_text: &str,
    requirements_text: &str,
) -> MatchResult {
    let resume = resume_text.to_lowercase();
    let requirements = requirements_text.to_lowercase();

    let mut score = weights.base_score;

    let (skills_matched, skill_gaps) = match_skills(taxonomy, &resume, &requirements);
    score += weights.per_matched_skill * skills_matched.len() as u32;

    let certifications = detect_certifications(taxonomy, &resume);
    score += weights.per_certification * certifications.len() as u32;

    let education = detect_education(taxonomy, &resume);
    score += match education.level {
        EducationLevel::Phd | EducationLevel::Masters => weights.advanced_degree,
        EducationLevel::Bachelors => weights.bachelors_degree,
        EducationLevel::Other => 0,
    };

    let experience_years = estimate_experience_years(&resume);
    score += experience_years
        .saturating_mul(weights.per_experience_year)
        .min(weights.experience_cap);

    let (industry_experience, shared_industries) =
        detect_industries(taxonomy, &resume, &requirements);
    score += weights.per_shared_industry * shared_industries;

    let score = score.clamp(weights.score_floor, weights.score_ceiling);

    MatchResult {
        score,
        key_qualifications: narrative::key_qualifications(
            &skills_matched,
            &certifications,
            experience_years,
        ),
        strengths: narrative::strengths(&skills_matched, &certifications, experience_years),
        recommendations: narrative::recommendations(&skill_gaps, experience_years),
        summary: narrative::summary(score, &skills_matched, &skill_gaps, experience_years),
        skills_matched,
        skill_gaps,
        certifications,
        education: Some(education),
        experience_years,
        industry_experience,
        analyzer_backend: BACKEND_LABEL.to_string(),
    }
}

/// Walks the taxonomy in order. A keyword in both texts is a match; a keyword only in the
/// requirements is a gap. Gap priority is always high: no grading exists yet.
fn match_skills(
    taxonomy: &Taxonomy,
    resume: &str,
    requirements: &str,
) -> (Vec<MatchedSkill>, Vec<SkillGap>) {
    let mut matched = Vec::new();
    let mut gaps = Vec::new();

    for (category, keywords) in taxonomy.skills {
        for &skill in *keywords {
            let in_resume = resume.contains(skill);
            let in_requirements = requirements.contains(skill);

            if in_resume && in_requirements {
                matched.push(MatchedSkill {
                    skill: skill.to_string(),
                    category: *category,
                    level: SkillLevel::from_mentions(resume.matches(skill).count()),
                });
            } else if !in_resume && in_requirements {
                gaps.push(SkillGap {
                    skill: skill.to_string(),
                    category: *category,
                    priority: GapPriority::High,
                });
            }
        }
    }

    (matched, gaps)
}

fn detect_certifications(taxonomy: &Taxonomy, resume: &str) -> Vec<String> {
    taxonomy
        .certifications
        .iter()
        .filter(|cert| resume.contains(**cert))
        .map(|cert| cert.to_string())
        .collect()
}

/// Highest degree wins: phd > masters > bachelors.
fn detect_education(taxonomy: &Taxonomy, resume: &str) -> Education {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| resume.contains(kw));

    let level = if contains_any(taxonomy.phd_keywords) {
        EducationLevel::Phd
    } else if contains_any(taxonomy.masters_keywords) {
        EducationLevel::Masters
    } else if contains_any(taxonomy.bachelors_keywords) {
        EducationLevel::Bachelors
    } else {
        EducationLevel::Other
    };

    let field = match level {
        EducationLevel::Other => None,
        _ => taxonomy
            .education_fields
            .iter()
            .find(|f| resume.contains(**f)),
    };

    Education {
        level,
        field: field
            .map(|f| f.to_string())
            .unwrap_or_else(|| "Not specified".to_string()),
    }
}

/// Largest explicit "N years (of) experience" figure, else a length-tier estimate.
///
/// The length tiers are a fallback guess, not a measurement: > 2000 chars → 5 years,
/// > 1000 chars → 2 years, otherwise 1 year.
pub fn estimate_experience_years(resume: &str) -> u32 {
    let explicit = YEARS_OF_EXPERIENCE
        .captures_iter(resume)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max();

    if let Some(years) = explicit {
        return years;
    }

    match resume.chars().count() {
        n if n > 2000 => 5,
        n if n > 1000 => 2,
        _ => 1,
    }
}

/// Returns (industries mentioned in the resume, how many of those the requirements share).
fn detect_industries(taxonomy: &Taxonomy, resume: &str, requirements: &str) -> (Vec<String>, u32) {
    let mut found = Vec::new();
    let mut shared = 0;

    for &industry in taxonomy.industries {
        if resume.contains(industry) {
            found.push(industry.to_string());
            if requirements.contains(industry) {
                shared += 1;
            }
        }
    }

    (found, shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::taxonomy::{SkillCategory, STANDARD_TAXONOMY};

    fn run(resume: &str, requirements: &str) -> MatchResult {
        analyze(
            &STANDARD_TAXONOMY,
            &HeuristicWeights::default(),
            resume,
            requirements,
        )
    }

    #[test]
    fn test_matched_skill_adds_bonus_and_records_category() {
        let result = run("Built services in Rust. 3 years experience.", "We need Rust");
        assert_eq!(result.skills_matched.len(), 1);
        assert_eq!(result.skills_matched[0].skill, "rust");
        assert_eq!(result.skills_matched[0].category, SkillCategory::Programming);
        // 50 base + 4 skill + 6 experience
        assert_eq!(result.score, 60);
    }

    #[test]
    fn test_requirement_missing_from_resume_is_high_priority_gap() {
        let result = run("Painter and decorator, 1 year experience", "Kubernetes and Terraform");
        let gap_skills: Vec<&str> = result.skill_gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(gap_skills, vec!["kubernetes", "terraform"]);
        assert!(result
            .skill_gaps
            .iter()
            .all(|g| g.priority == GapPriority::High));
    }

    #[test]
    fn test_resume_only_skill_is_neither_match_nor_gap() {
        let result = run("Expert in Docker", "Writes copy for newsletters");
        assert!(result.skills_matched.iter().all(|s| s.skill != "docker"));
        assert!(result.skill_gaps.iter().all(|s| s.skill != "docker"));
    }

    #[test]
    fn test_skill_level_follows_mention_count() {
        let result = run(
            "Python scripts. More python tooling. Python everywhere. Docker once, docker twice.",
            "python docker",
        );
        let level_of = |name: &str| {
            result
                .skills_matched
                .iter()
                .find(|s| s.skill == name)
                .map(|s| s.level)
        };
        assert_eq!(level_of("python"), Some(SkillLevel::Expert));
        assert_eq!(level_of("docker"), Some(SkillLevel::Intermediate));
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // "javascript" contains "java"; both count.
        let result = run("JavaScript developer", "JavaScript");
        let skills: Vec<&str> = result.skills_matched.iter().map(|s| s.skill.as_str()).collect();
        assert!(skills.contains(&"javascript"));
        assert!(skills.contains(&"java"));
    }

    #[test]
    fn test_certifications_add_larger_bonus() {
        let with_cert = run("AWS Certified architect, 2 years experience", "Writing");
        let without = run("Architect, 2 years experience", "Writing");
        assert_eq!(with_cert.certifications, vec!["aws certified".to_string()]);
        assert_eq!(with_cert.score - without.score, 8);
    }

    #[test]
    fn test_education_levels_and_field() {
        let phd = detect_education(&STANDARD_TAXONOMY, "phd in statistics, masters in business");
        assert_eq!(phd.level, EducationLevel::Phd);
        assert_eq!(phd.field, "business");

        let masters = detect_education(&STANDARD_TAXONOMY, "mba graduate");
        assert_eq!(masters.level, EducationLevel::Masters);
        assert_eq!(masters.field, "Not specified");

        let bachelors = detect_education(&STANDARD_TAXONOMY, "btech computer science");
        assert_eq!(bachelors.level, EducationLevel::Bachelors);
        assert_eq!(bachelors.field, "computer science");

        let other = detect_education(&STANDARD_TAXONOMY, "self taught engineering hobbyist");
        assert_eq!(other.level, EducationLevel::Other);
        assert_eq!(other.field, "Not specified");
    }

    #[test]
    fn test_degree_bonus_scales_with_level() {
        let base = run("Chef, 1 year experience", "Cooking").score;
        assert_eq!(run("Chef, bachelor degree, 1 year experience", "Cooking").score, base + 5);
        assert_eq!(run("Chef, master degree, 1 year experience", "Cooking").score, base + 10);
        assert_eq!(run("Chef, doctorate, 1 year experience", "Cooking").score, base + 10);
    }

    #[test]
    fn test_explicit_years_takes_maximum() {
        let text = "2 years experience in sales, then 7 years of experience in ops, 4 years exp";
        assert_eq!(estimate_experience_years(text), 7);
    }

    #[test]
    fn test_years_fallback_is_deterministic_by_length() {
        assert_eq!(estimate_experience_years("short resume"), 1);
        assert_eq!(estimate_experience_years(&"a".repeat(1001)), 2);
        assert_eq!(estimate_experience_years(&"a".repeat(2001)), 5);
        assert_eq!(estimate_experience_years(&"a".repeat(1000)), 1);
    }

    #[test]
    fn test_experience_bonus_is_capped() {
        let veteran = run("30 years experience", "Gardening");
        // 50 + min(60, 20)
        assert_eq!(veteran.score, 70);
        assert_eq!(veteran.experience_years, 30);
    }

    #[test]
    fn test_industry_bonus_only_when_shared() {
        let result = run("Fintech and healthcare background, 1 year experience", "Fintech role");
        assert_eq!(
            result.industry_experience,
            vec!["fintech".to_string(), "healthcare".to_string()]
        );
        // 50 + 2 experience + 5 shared industry
        assert_eq!(result.score, 57);
    }

    #[test]
    fn test_score_clamped_to_ceiling() {
        let resume = "python java rust docker kubernetes aws react sql git leadership \
                      aws certified cissp comptia phd 12 years experience fintech saas";
        let requirements = "python java rust docker kubernetes aws react sql git leadership \
                            fintech saas";
        assert_eq!(run(resume, requirements).score, 95);
    }

    #[test]
    fn test_zero_match_resume_with_zero_base_hits_floor() {
        let weights = HeuristicWeights {
            base_score: 0,
            ..HeuristicWeights::default()
        };
        let result = analyze(
            &STANDARD_TAXONOMY,
            &weights,
            "Barista",
            "Kubernetes operator",
        );
        assert_eq!(result.score, 35);
        assert!(result.skills_matched.is_empty());
        assert!(result.certifications.is_empty());
    }

    #[test]
    fn test_zero_match_resume_scores_base_plus_fallback_years() {
        let result = run("Barista", "Kubernetes operator");
        assert!(result.skills_matched.is_empty());
        // 50 base + 1 fallback year * 2
        assert_eq!(result.score, 52);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let resume = "Senior engineer. Rust, Go, Postgresql. Built fintech systems. ".repeat(40);
        let requirements = "Rust, Kubernetes, PostgreSQL, fintech";
        let a = run(&resume, requirements);
        let b = run(&resume, requirements);
        assert_eq!(a, b);
    }

    #[test]
    fn test_backend_label_is_keyword() {
        assert_eq!(run("a", "b").analyzer_backend, "keyword");
    }
}
