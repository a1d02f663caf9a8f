// Skills test: per-role question bank and grading.
// The graded score is the objective test score consumed by composite scoring.

pub mod grading;
pub mod handlers;
pub mod questions;
