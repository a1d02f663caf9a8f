use std::sync::Arc;

use crate::analysis::estimator::MatchEstimator;
use crate::assessment::questions::QuestionBank;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume analyser. Default: HeuristicEstimator. Swap via ENABLE_LLM_ANALYSIS.
    pub estimator: Arc<dyn MatchEstimator>,
    /// Read-only skills tests, loaded once at startup.
    pub question_bank: Arc<QuestionBank>,
}
