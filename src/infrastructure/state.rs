//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{NarrativeService, TurnService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::groq::GroqClient;

/// Shared application state
///
/// Scenario definitions live in a process-wide registry, not here; the state
/// only carries the configuration and the wired turn service.
pub struct AppState {
    pub config: AppConfig,
    pub turn_service: TurnService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let groq = GroqClient::new(
            &config.groq_base_url,
            &config.groq_api_key,
            &config.groq_model,
            config.request_timeout,
        )?;
        let narrative =
            NarrativeService::new(Arc::new(groq), config.narrative_mode, config.retry_backoff);
        let turn_service = TurnService::new(narrative);

        Ok(Self {
            config,
            turn_service,
        })
    }
}
