use anyhow::{ensure, Context, Result};

use crate::llm_client::DEFAULT_API_URL;

const API_KEY_PLACEHOLDER: &str = "your_anthropic_api_key_here";

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when unset, blank, or still the placeholder value.
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub enable_llm_analysis: bool,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER);

        let llm_timeout_secs = lookup("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|| "20".to_string())
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
        ensure!(llm_timeout_secs > 0, "LLM_TIMEOUT_SECS must be greater than 0");

        Ok(Config {
            anthropic_api_key,
            anthropic_api_url: lookup("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            enable_llm_analysis: parse_flag(lookup("ENABLE_LLM_ANALYSIS").as_deref()),
            llm_timeout_secs,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// LLM analysis runs only when switched on and credentials exist.
    pub fn llm_analysis_available(&self) -> bool {
        self.enable_llm_analysis && self.anthropic_api_key.is_some()
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("true" | "1" | "yes")
    )
}
