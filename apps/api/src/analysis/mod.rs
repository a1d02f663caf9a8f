// Resume / requirement match estimation.
// Implements: keyword taxonomy, heuristic scoring, narrative fields, pluggable estimators,
// and the eligibility decision that gates the skills test.

pub mod eligibility;
pub mod estimator;
pub mod handlers;
pub mod heuristic;
pub mod models;
pub mod narrative;
pub mod prompts;
pub mod taxonomy;
