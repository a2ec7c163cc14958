//! Turn request/response payloads

use serde::{Deserialize, Serialize};

use crate::domain::game_state::GameState;

/// Body of `POST /api/{scenario_id}`.
///
/// `game_state` stays raw JSON here; the orchestrator deserializes and
/// validates it so that a malformed payload becomes a structured
/// malformed-state error instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    pub action: String,
    #[serde(default)]
    pub player_decision: Option<String>,
    #[serde(default)]
    pub game_state: Option<serde_json::Value>,
}

/// A successful turn: new prose plus the state the client must resend.
#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub scenario: String,
    pub chapter: String,
    pub timestamp: String,
    pub narrative: String,
    pub game_state: GameState,
    /// Clue-count progress line, e.g. "3 clues collected"
    pub progress: String,
}

/// Entry in the `GET /api/cenarios` listing.
#[derive(Debug, Serialize)]
pub struct ScenarioInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub endpoint: String,
}
