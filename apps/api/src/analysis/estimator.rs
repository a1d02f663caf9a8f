//! Match estimation through pluggable, trait-based resume analysers.
//!
//! Default: `HeuristicEstimator` (pure-Rust keyword matching, deterministic, fully testable).
//! Optional: `LlmEstimator` (Claude-backed, timeout-guarded, falls back to the heuristic).
//!
//! `AppState` holds an `Arc<dyn MatchEstimator>`, chosen once at startup from config.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::analysis::heuristic::{self, HeuristicWeights};
use crate::analysis::models::{validate_input, InputError, MatchResult};
use crate::analysis::prompts::{analysis_system, build_analysis_prompt};
use crate::analysis::taxonomy::{Taxonomy, STANDARD_TAXONOMY};
use crate::llm_client::LlmClient;

pub const LLM_BACKEND_LABEL: &str = "llm";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching handlers or callers.
///
/// Only `InputError` escapes: backend failures are absorbed by the implementation.
#[async_trait]
pub trait MatchEstimator: Send + Sync {
    async fn estimate(
        &self,
        resume_text: &str,
        requirements_text: &str,
    ) -> Result<MatchResult, InputError>;

    /// "keyword" or "llm", for startup logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicEstimator (default)
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-matching estimator. Stateless apart from its immutable tables.
#[derive(Debug, Clone)]
pub struct HeuristicEstimator {
    taxonomy: &'static Taxonomy,
    weights: HeuristicWeights,
}

impl Default for HeuristicEstimator {
    fn default() -> Self {
        Self::new(&STANDARD_TAXONOMY, HeuristicWeights::default())
    }
}

impl HeuristicEstimator {
    pub fn new(taxonomy: &'static Taxonomy, weights: HeuristicWeights) -> Self {
        Self { taxonomy, weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Synchronous analysis; same inputs always give the same result.
    pub fn analyze(
        &self,
        resume_text: &str,
        requirements_text: &str,
    ) -> Result<MatchResult, InputError> {
        validate_input(resume_text, requirements_text)?;
        Ok(heuristic::analyze(
            self.taxonomy,
            &self.weights,
            resume_text,
            requirements_text,
        ))
    }
}

#[async_trait]
impl MatchEstimator for HeuristicEstimator {
    async fn estimate(
        &self,
        resume_text: &str,
        requirements_text: &str,
    ) -> Result<MatchResult, InputError> {
        self.analyze(resume_text, requirements_text)
    }

    fn backend(&self) -> &'static str {
        heuristic::BACKEND_LABEL
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEstimator: Claude first, heuristic on error or timeout
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEstimator {
    llm: LlmClient,
    fallback: HeuristicEstimator,
    timeout: Duration,
}

impl LlmEstimator {
    pub fn new(llm: LlmClient, fallback: HeuristicEstimator, timeout: Duration) -> Self {
        Self {
            llm,
            fallback,
            timeout,
        }
    }

    /// Applies the heuristic's score bounds so every `MatchResult` honours the same range.
    fn normalise(&self, mut result: MatchResult) -> MatchResult {
        let weights = self.fallback.weights();
        result.score = result
            .score
            .clamp(weights.score_floor, weights.score_ceiling);
        result.analyzer_backend = LLM_BACKEND_LABEL.to_string();
        result
    }
}

#[async_trait]
impl MatchEstimator for LlmEstimator {
    async fn estimate(
        &self,
        resume_text: &str,
        requirements_text: &str,
    ) -> Result<MatchResult, InputError> {
        validate_input(resume_text, requirements_text)?;

        let prompt = build_analysis_prompt(resume_text, requirements_text);
        let system = analysis_system();
        let call = self.llm.call_json::<MatchResult>(&prompt, &system);

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(result)) => {
                let result = self.normalise(result);
                debug!(score = result.score, "LLM resume analysis succeeded");
                Ok(result)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "LLM resume analysis failed, using keyword heuristic");
                self.fallback.analyze(resume_text, requirements_text)
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "LLM resume analysis timed out, using keyword heuristic"
                );
                self.fallback.analyze(resume_text, requirements_text)
            }
        }
    }

    fn backend(&self) -> &'static str {
        LLM_BACKEND_LABEL
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
