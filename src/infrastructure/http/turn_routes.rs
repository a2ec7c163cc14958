//! Game API routes

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::application::dto::{ScenarioInfo, TurnRequest, TurnResponse};
use crate::domain::scenarios;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Play one turn of a scenario: `{"action": "start"}` or
/// `{"action": "continue", "player_decision": ..., "game_state": ...}`.
pub async fn play_turn(
    State(state): State<Arc<AppState>>,
    Path(scenario_id): Path<String>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let response = state.turn_service.handle(&scenario_id, request).await?;
    Ok(Json(response))
}

/// List the available scenarios
pub async fn list_scenarios() -> Json<serde_json::Value> {
    let listing: Vec<ScenarioInfo> = scenarios::all()
        .iter()
        .map(|def| ScenarioInfo {
            id: def.id,
            title: def.title,
            summary: def.summary,
            endpoint: format!("/api/{}", def.id),
        })
        .collect();

    Json(serde_json::json!({
        "status": "success",
        "total": listing.len(),
        "cenarios": listing,
    }))
}

/// API self-description served at the root
pub async fn home() -> Json<serde_json::Value> {
    let cenarios: serde_json::Map<String, serde_json::Value> = scenarios::all()
        .iter()
        .map(|def| {
            (
                def.id.to_string(),
                serde_json::json!({
                    "title": def.title,
                    "summary": def.summary,
                    "endpoint": format!("/api/{}", def.id),
                }),
            )
        })
        .collect();

    Json(serde_json::json!({
        "name": "EcoQuest Engine - Environmental Investigation RPG API",
        "version": env!("CARGO_PKG_VERSION"),
        "cenarios": cenarios,
        "endpoints": {
            "GET /": "This document",
            "GET /health": "Health check",
            "GET /api/cenarios": "List available scenarios",
            "POST /api/{scenario_id}": "Play one turn",
        },
        "usage": {
            "start": {"action": "start"},
            "continue": {
                "action": "continue",
                "player_decision": "your choice",
                "game_state": "the game_state from the previous response",
            },
        },
    }))
}

/// Liveness check
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "narrative_generator_configured": !state.config.groq_api_key.is_empty(),
        "scenarios_available": scenarios::all().len(),
    }))
}
