use serde::{Deserialize, Serialize};

use crate::assessment::questions::Question;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub selected_option: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub question_id: u32,
    pub correct: bool,
    pub points: u32,
}

/// Graded skills test. `score` is the objective test score fed into composite scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    /// 0-100
    pub score: u32,
    pub total_points: u32,
    pub max_points: u32,
    pub results: Vec<QuestionResult>,
}

/// All-or-nothing per question; unanswered questions earn nothing. When a question is
/// answered more than once, the first answer counts. Answers to unknown questions are ignored.
pub fn grade(questions: &[Question], answers: &[Answer]) -> TestOutcome {
    let mut total_points = 0;
    let mut max_points = 0;
    let mut results = Vec::with_capacity(questions.len());

    for question in questions {
        max_points += question.points;

        let correct = answers
            .iter()
            .find(|a| a.question_id == question.id)
            .is_some_and(|a| a.selected_option == question.correct);

        let points = if correct { question.points } else { 0 };
        total_points += points;

        results.push(QuestionResult {
            question_id: question.id,
            correct,
            points,
        });
    }

    let score = if max_points == 0 {
        0
    } else {
        (f64::from(total_points) / f64::from(max_points) * 100.0).round() as u32
    };

    TestOutcome {
        score,
        total_points,
        max_points,
        results,
    }
}
