// Composite fit scoring.
// Implements: experience-level classification, level weightage, composite score, ranking.
// Everything here is pure and synchronous; handlers need no shared state.

pub mod composite;
pub mod experience;
pub mod handlers;
pub mod ranking;
pub mod weightage;
