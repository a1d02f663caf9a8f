// LLM prompt constants for resume analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for resume analysis.
pub fn analysis_system() -> String {
    format!(
        "You are an experienced technical recruiter screening resumes against job requirements. \
        Judge only what the resume text states; do not assume unlisted skills. {JSON_ONLY_SYSTEM}"
    )
}

/// Resume analysis prompt template. Replace `{requirements_text}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume against the job requirements and score the fit from 0 to 100 based on skill match, experience relevance, and qualifications.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 78,
  "skills_matched": [
    {"skill": "rust", "category": "programming", "level": "expert"}
  ],
  "skill_gaps": [
    {"skill": "kubernetes", "category": "cloud", "priority": "high"}
  ],
  "certifications": ["aws certified"],
  "education": {"level": "bachelors", "field": "computer science"},
  "experience_years": 6,
  "industry_experience": ["fintech"],
  "key_qualifications": ["Senior level experience"],
  "strengths": ["Strong programming skills"],
  "recommendations": ["Consider developing skills in: kubernetes"],
  "summary": "Brief explanation of the score"
}

Allowed values:
- category: programming, frontend, backend, database, cloud, tools, marketing, data, soft
- level: beginner, intermediate, expert
- priority: high, medium, low
- education.level: phd, masters, bachelors, other

Job Requirements:
{requirements_text}

Resume Content:
{resume_text}"#;

pub fn build_analysis_prompt(resume_text: &str, requirements_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{requirements_text}", requirements_text)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = build_analysis_prompt("Rust engineer", "Needs Rust");
        assert!(prompt.contains("Resume Content:\nRust engineer"));
        assert!(prompt.contains("Job Requirements:\nNeeds Rust"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        assert!(analysis_system().contains("valid JSON only"));
    }
}
