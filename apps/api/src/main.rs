mod analysis;
mod assessment;
mod config;
mod errors;
mod llm_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::estimator::{HeuristicEstimator, LlmEstimator, MatchEstimator};
use crate::assessment::questions::QuestionBank;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recruit API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize resume analyser (keyword heuristic unless LLM analysis is enabled and keyed)
    let estimator = build_estimator(&config)?;
    info!("Resume analyser backend: {}", estimator.backend());

    let question_bank = Arc::new(QuestionBank::builtin()?);
    info!("Question bank loaded");

    let state = AppState {
        estimator,
        question_bank,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Chooses the analysis backend once, at startup.
fn build_estimator(config: &Config) -> Result<Arc<dyn MatchEstimator>> {
    let heuristic = HeuristicEstimator::default();

    if !config.llm_analysis_available() {
        if config.enable_llm_analysis {
            warn!("ENABLE_LLM_ANALYSIS is set but ANTHROPIC_API_KEY is missing; using keyword heuristic");
        }
        return Ok(Arc::new(heuristic));
    }

    let api_key = config
        .anthropic_api_key
        .clone()
        .context("ANTHROPIC_API_KEY is required for LLM analysis")?;
    let llm = LlmClient::new(api_key, config.anthropic_api_url.clone())
        .context("failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );

    Ok(Arc::new(LlmEstimator::new(
        llm,
        heuristic,
        Duration::from_secs(config.llm_timeout_secs),
    )))
}
