//! Human-readable text derived from the structured analysis.
//!
//! Presentation helpers only: every string here is a deterministic function of the matched
//! skills, gaps, certifications, and experience figure. Nothing feeds back into the score.

use crate::analysis::models::{GapPriority, MatchedSkill, SkillGap, SkillLevel};
use crate::analysis::taxonomy::SkillCategory;

pub fn key_qualifications(
    matched: &[MatchedSkill],
    certifications: &[String],
    experience_years: u32,
) -> Vec<String> {
    let mut qualifications = Vec::new();

    let tier = if experience_years >= 5 {
        "Senior level experience"
    } else if experience_years >= 2 {
        "Mid-level experience"
    } else {
        "Entry to junior level experience"
    };
    qualifications.push(tier.to_string());

    if matched.len() >= 5 {
        qualifications.push("Strong technical skill set".to_string());
    }
    if !certifications.is_empty() {
        qualifications.push("Industry certifications".to_string());
    }
    if let Some(expert) = matched.iter().find(|s| s.level == SkillLevel::Expert) {
        qualifications.push(format!("Expert in {}", expert.skill));
    }

    qualifications
}

/// Categories with three or more matched skills become strengths, in taxonomy order.
pub fn strengths(
    matched: &[MatchedSkill],
    certifications: &[String],
    experience_years: u32,
) -> Vec<String> {
    let mut per_category: Vec<(SkillCategory, usize)> = Vec::new();
    for skill in matched {
        match per_category.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, count)) => *count += 1,
            None => per_category.push((skill.category, 1)),
        }
    }

    let mut strengths: Vec<String> = per_category
        .into_iter()
        .filter(|(_, count)| *count >= 3)
        .map(|(category, _)| format!("Strong {} skills", category.as_str()))
        .collect();

    if certifications.len() >= 2 {
        strengths.push("Multiple industry certifications".to_string());
    }
    if experience_years >= 7 {
        strengths.push("Extensive industry experience".to_string());
    }

    if strengths.is_empty() {
        vec!["Foundational skills in relevant areas".to_string()]
    } else {
        strengths
    }
}

pub fn recommendations(gaps: &[SkillGap], experience_years: u32) -> Vec<String> {
    let mut recommendations = Vec::new();

    let top_gaps: Vec<&str> = gaps
        .iter()
        .filter(|g| g.priority == GapPriority::High)
        .take(3)
        .map(|g| g.skill.as_str())
        .collect();
    if !top_gaps.is_empty() {
        recommendations.push(format!(
            "Consider developing skills in: {}",
            top_gaps.join(", ")
        ));
    }

    if experience_years < 2 {
        recommendations.push("Gain more hands-on project experience".to_string());
    }

    if recommendations.is_empty() {
        vec!["Continue building on existing strengths".to_string()]
    } else {
        recommendations
    }
}

pub fn summary(
    score: u32,
    matched: &[MatchedSkill],
    gaps: &[SkillGap],
    experience_years: u32,
) -> String {
    let mut summary = format!("Candidate scored {score}% compatibility. ");

    if !matched.is_empty() {
        let leading: Vec<&str> = matched.iter().take(2).map(|s| s.skill.as_str()).collect();
        summary.push_str(&format!(
            "Strong matches in {} key skills including {}. ",
            matched.len(),
            leading.join(" and ")
        ));
    }

    if !gaps.is_empty() {
        summary.push_str(&format!(
            "{} skill gaps identified for optimal role fit. ",
            gaps.len()
        ));
    }

    summary.push_str(&format!("{experience_years} years of relevant experience."));
    summary
}
