//! Narrative generation port
//!
//! Seam between the turn engine and the external text-generation service.
//! The port only sees the context it is handed; it has no game-state
//! knowledge and no side effects beyond the outbound call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A recent turn, summarized for the generation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryLine {
    pub decision: String,
    pub narrative: String,
}

/// Context for rendering one story beat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeRequest {
    /// Scenario title, for the narrator's framing
    pub scenario_title: String,
    /// Scenario-level narrator brief (style, plot spine, tone)
    pub narrator_brief: String,
    /// The beat being rendered
    pub node_title: String,
    pub node_prompt: String,
    /// The decision that led here; `None` on a fresh start
    pub decision: Option<String>,
    /// Most recent turns, oldest first
    pub recent_history: Vec<HistoryLine>,
    /// Clues discovered so far
    pub flags: Vec<String>,
}

/// Abstraction over the external narrative-generation service.
#[async_trait]
pub trait NarrativePort: Send + Sync {
    /// Generate prose for one beat. Implementations must enforce their own
    /// request timeout; callers treat any error as recoverable.
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}

/// Errors from the narrative-generation service.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("service returned an error: {0}")]
    Api(String),
    #[error("service returned an empty completion")]
    Empty,
}
