//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::NarrativeMode;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API key for the narrative-generation service
    pub groq_api_key: String,
    /// Groq API base URL (OpenAI-compatible)
    pub groq_base_url: String,
    /// Model used for narrative generation
    pub groq_model: String,
    /// Timeout for one generation request
    pub request_timeout: Duration,
    /// Pause before the single retry of a failed generation
    pub retry_backoff: Duration,
    /// When to call the generation service vs serve authored prose
    pub narrative_mode: NarrativeMode,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let narrative_mode = match env::var("NARRATIVE_MODE") {
            Ok(value) => NarrativeMode::parse(&value).with_context(|| {
                format!(
                    "NARRATIVE_MODE must be 'always' or 'fallback-on-revisit', got '{}'",
                    value
                )
            })?,
            Err(_) => NarrativeMode::Always,
        };

        Ok(Self {
            groq_api_key: env::var("GROQ_API_KEY")
                .context("GROQ_API_KEY environment variable is required")?,
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            request_timeout: Duration::from_secs(
                env::var("GENERATION_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("GENERATION_TIMEOUT_SECS must be a number of seconds")?,
            ),
            retry_backoff: Duration::from_millis(
                env::var("RETRY_BACKOFF_MS")
                    .unwrap_or_else(|_| "500".to_string())
                    .parse()
                    .context("RETRY_BACKOFF_MS must be a number of milliseconds")?,
            ),
            narrative_mode,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
