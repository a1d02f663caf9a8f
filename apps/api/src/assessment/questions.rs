use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_BANK: &str = include_str!("../../data/question_bank.json");

/// A multiple-choice question. `correct` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub points: u32,
}

/// What a candidate sees: the question without its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub points: u32,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
            points: q.points,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleQuestions {
    /// Lower-case key matched as a substring of the job title.
    pub role: String,
    pub questions: Vec<Question>,
}

impl RoleQuestions {
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

/// Per-role skills tests. Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBank {
    default_role: String,
    roles: Vec<RoleQuestions>,
}

impl QuestionBank {
    /// The bank compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_BANK).context("built-in question bank is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let bank: QuestionBank =
            serde_json::from_str(json).context("question bank is not valid JSON")?;
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.roles.iter().any(|r| r.role == self.default_role),
            "default role '{}' has no questions",
            self.default_role
        );
        for role in &self.roles {
            ensure!(
                role.role == role.role.to_lowercase(),
                "role key '{}' must be lower case",
                role.role
            );
            for q in &role.questions {
                ensure!(
                    q.correct < q.options.len(),
                    "question {} of '{}' has answer index {} but only {} options",
                    q.id,
                    role.role,
                    q.correct,
                    q.options.len()
                );
            }
        }
        Ok(())
    }

    /// First role whose key appears in the lower-cased title, else the default role.
    pub fn for_job_title(&self, job_title: &str) -> &RoleQuestions {
        let title = job_title.to_lowercase();
        self.roles
            .iter()
            .find(|r| title.contains(&r.role))
            .or_else(|| self.roles.iter().find(|r| r.role == self.default_role))
            .unwrap_or(&self.roles[0])
    }
}
