//! Turn service - the orchestrator behind `POST /api/{scenario_id}`
//!
//! Single entry point for the HTTP layer: validates the request and the
//! client-supplied state, advances the scenario state machine, renders prose
//! for the new beat, and assembles the response. Validation failures reject
//! the turn with no state mutation; narrative-generation failures are
//! absorbed below this layer and never fail a turn.

use chrono::Utc;

use crate::application::dto::{TurnRequest, TurnResponse};
use crate::application::ports::outbound::{HistoryLine, NarrativeRequest};
use crate::application::services::narrative_service::NarrativeService;
use crate::domain::game_state::{GameState, StateError};
use crate::domain::handler::{ScenarioHandler, TransitionError};
use crate::domain::scenario::{NodeDef, ScenarioDefinition};
use crate::domain::scenarios;

/// How many past turns are handed to the narrative generator.
const HISTORY_WINDOW: usize = 3;

/// Orchestrates one turn request end to end.
pub struct TurnService {
    narrative: NarrativeService,
}

impl TurnService {
    pub fn new(narrative: NarrativeService) -> Self {
        Self { narrative }
    }

    /// Handle one turn request for the given scenario.
    pub async fn handle(
        &self,
        scenario_id: &str,
        request: TurnRequest,
    ) -> Result<TurnResponse, TurnError> {
        let def = scenarios::find(scenario_id)
            .ok_or_else(|| TurnError::UnknownScenario(scenario_id.to_string()))?;
        let handler = ScenarioHandler::new(def);

        match request.action.as_str() {
            "start" => Ok(self.start(&handler).await),
            "continue" => self.advance(&handler, request).await,
            other => Err(TurnError::UnknownAction(other.to_string())),
        }
    }

    /// Begin a playthrough. Any game_state the client sent along is ignored.
    async fn start(&self, handler: &ScenarioHandler) -> TurnResponse {
        let def = handler.definition();
        let state = handler.start();
        let entry = def.entry_node();

        tracing::info!(scenario = def.id, "starting playthrough");

        let narrative = self
            .narrative
            .render(&narrative_request(def, entry, None, &state), entry.fallback, false)
            .await;

        response(def, entry, state, narrative)
    }

    async fn advance(
        &self,
        handler: &ScenarioHandler,
        request: TurnRequest,
    ) -> Result<TurnResponse, TurnError> {
        let def = handler.definition();

        let decision = match request.player_decision.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => return Err(TurnError::MissingDecision),
        };
        let payload = request.game_state.ok_or(TurnError::MissingState)?;

        let state = GameState::from_value(payload)?;
        state.validate(def)?;
        if let Some(marker) = &state.ended {
            return Err(TurnError::Terminal(marker.clone()));
        }

        // Nodes already seen by this playthrough, for the revisit policy
        let visited = |id: &str| {
            state.current_node == id || state.history.iter().any(|h| h.node == id)
        };

        let advance = handler.advance(&state, &decision).map_err(|e| match e {
            TransitionError::Terminal(marker) => TurnError::Terminal(marker),
            TransitionError::UnknownNode(node) => {
                TurnError::MalformedState(StateError::UnknownNode(node))
            }
        })?;

        tracing::info!(
            scenario = def.id,
            turn = advance.state.turn_index,
            node = advance.node.id,
            class = %advance.class,
            "turn advanced"
        );

        let revisited = visited(advance.node.id);
        let narrative = self
            .narrative
            .render(
                &narrative_request(def, advance.node, Some(&decision), &advance.state),
                advance.node.fallback,
                revisited,
            )
            .await;

        let mut new_state = advance.state;
        new_state.attach_excerpt(&narrative);

        Ok(response(def, advance.node, new_state, narrative))
    }
}

fn narrative_request(
    def: &ScenarioDefinition,
    node: &NodeDef,
    decision: Option<&str>,
    state: &GameState,
) -> NarrativeRequest {
    // Skip the entry the current turn just appended; its prose does not exist yet
    let past = state
        .history
        .iter()
        .filter(|h| !h.narrative.is_empty())
        .collect::<Vec<_>>();
    let recent = past
        .iter()
        .rev()
        .take(HISTORY_WINDOW)
        .rev()
        .map(|h| HistoryLine {
            decision: h.decision.clone(),
            narrative: h.narrative.clone(),
        })
        .collect();

    NarrativeRequest {
        scenario_title: def.title.to_string(),
        narrator_brief: def.narrator_brief.to_string(),
        node_title: node.title.to_string(),
        node_prompt: node.prompt.to_string(),
        decision: decision.map(str::to_string),
        recent_history: recent,
        flags: state.flags.iter().cloned().collect(),
    }
}

fn response(
    def: &ScenarioDefinition,
    node: &NodeDef,
    state: GameState,
    narrative: String,
) -> TurnResponse {
    let total_flags = def.flag_vocabulary().len();
    let progress = format!("{} of {} clues collected", state.flags.len(), total_flags);

    TurnResponse {
        scenario: def.title.to_string(),
        chapter: node.title.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        narrative,
        game_state: state,
        progress,
    }
}

/// Everything that can reject a turn at the orchestrator boundary.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
    #[error("unknown action '{0}', expected 'start' or 'continue'")]
    UnknownAction(String),
    #[error("'player_decision' is required for action 'continue'")]
    MissingDecision,
    #[error("'game_state' is required for action 'continue'")]
    MissingState,
    #[error(transparent)]
    MalformedState(#[from] StateError),
    #[error("playthrough already ended at '{0}'")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::application::ports::outbound::{NarrativeError, NarrativePort};
    use crate::application::services::narrative_service::NarrativeMode;

    struct FixedPort(&'static str);

    #[async_trait::async_trait]
    impl NarrativePort for FixedPort {
        async fn generate(&self, _request: &NarrativeRequest) -> Result<String, NarrativeError> {
            Ok(self.0.to_string())
        }
    }

    struct DownPort;

    #[async_trait::async_trait]
    impl NarrativePort for DownPort {
        async fn generate(&self, _request: &NarrativeRequest) -> Result<String, NarrativeError> {
            Err(NarrativeError::Http("connection refused".to_string()))
        }
    }

    fn service(port: Arc<dyn NarrativePort>) -> TurnService {
        TurnService::new(NarrativeService::new(
            port,
            NarrativeMode::Always,
            Duration::from_millis(1),
        ))
    }

    fn start_request() -> TurnRequest {
        TurnRequest {
            action: "start".to_string(),
            player_decision: None,
            game_state: None,
        }
    }

    fn continue_request(decision: &str, state: &GameState) -> TurnRequest {
        TurnRequest {
            action: "continue".to_string(),
            player_decision: Some(decision.to_string()),
            game_state: Some(serde_json::to_value(state).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_start_returns_the_entry_beat() {
        let svc = service(Arc::new(FixedPort("The smoke rises.")));
        let response = svc.handle("forest", start_request()).await.unwrap();

        assert_eq!(response.game_state.current_node, "ashes_call");
        assert_eq!(response.game_state.turn_index, 0);
        assert_eq!(response.narrative, "The smoke rises.");
        assert_eq!(response.scenario, "Operation Forest Ashes");
        assert_eq!(response.progress, "0 of 9 clues collected");
    }

    #[tokio::test]
    async fn test_start_ignores_any_supplied_state() {
        let svc = service(Arc::new(FixedPort("prose")));
        let request = TurnRequest {
            action: "start".to_string(),
            player_decision: Some("investigate".to_string()),
            game_state: Some(serde_json::json!({"turn_index": "garbage"})),
        };

        let response = svc.handle("forest", request).await.unwrap();
        assert_eq!(response.game_state.turn_index, 0);
        assert!(response.game_state.history.is_empty());
    }

    #[tokio::test]
    async fn test_continue_advances_and_records_the_excerpt() {
        let svc = service(Arc::new(FixedPort("Stumps sawn flat.")));
        let start = svc.handle("forest", start_request()).await.unwrap();

        let response = svc
            .handle(
                "forest",
                continue_request("investigate the ashes", &start.game_state),
            )
            .await
            .unwrap();

        assert_eq!(response.game_state.turn_index, 1);
        assert_eq!(response.game_state.current_node, "trail_marks");
        assert_eq!(response.game_state.history.len(), 1);
        assert_eq!(response.game_state.history[0].narrative, "Stumps sawn flat.");
        assert!(response.game_state.flags.contains("fire_pattern"));
    }

    #[tokio::test]
    async fn test_generator_outage_still_succeeds_with_fallback_prose() {
        let svc = service(Arc::new(DownPort));
        let start = svc.handle("forest", start_request()).await.unwrap();

        let response = svc
            .handle("forest", continue_request("look around", &start.game_state))
            .await
            .unwrap();

        assert!(!response.narrative.is_empty());
        assert_eq!(
            response.narrative,
            scenarios::find("forest").unwrap().node("trail_marks").unwrap().fallback
        );
        assert_eq!(response.game_state.turn_index, 1);
    }

    #[tokio::test]
    async fn test_unknown_scenario_is_rejected() {
        let svc = service(Arc::new(FixedPort("prose")));
        let err = svc.handle("atlantis", start_request()).await.unwrap_err();
        assert!(matches!(err, TurnError::UnknownScenario(_)));
    }

    #[tokio::test]
    async fn test_unknown_action_is_rejected() {
        let svc = service(Arc::new(FixedPort("prose")));
        let request = TurnRequest {
            action: "restart".to_string(),
            player_decision: None,
            game_state: None,
        };
        let err = svc.handle("forest", request).await.unwrap_err();
        assert!(matches!(err, TurnError::UnknownAction(_)));
    }

    #[tokio::test]
    async fn test_blank_decision_is_rejected() {
        let svc = service(Arc::new(FixedPort("prose")));
        let start = svc.handle("forest", start_request()).await.unwrap();

        let mut request = continue_request("   ", &start.game_state);
        let err = svc.handle("forest", request).await.unwrap_err();
        assert!(matches!(err, TurnError::MissingDecision));

        request = continue_request("x", &start.game_state);
        request.player_decision = None;
        let err = svc.handle("forest", request).await.unwrap_err();
        assert!(matches!(err, TurnError::MissingDecision));
    }

    #[tokio::test]
    async fn test_continue_without_state_is_rejected() {
        let svc = service(Arc::new(FixedPort("prose")));
        let request = TurnRequest {
            action: "continue".to_string(),
            player_decision: Some("investigate".to_string()),
            game_state: None,
        };
        let err = svc.handle("forest", request).await.unwrap_err();
        assert!(matches!(err, TurnError::MissingState));
    }

    #[tokio::test]
    async fn test_tampered_turn_index_is_rejected_without_mutation() {
        let svc = service(Arc::new(FixedPort("prose")));
        let start = svc.handle("forest", start_request()).await.unwrap();

        let mut tampered = start.game_state.clone();
        tampered.turn_index = 7;
        let err = svc
            .handle("forest", continue_request("investigate", &tampered))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TurnError::MalformedState(StateError::TurnIndexMismatch { .. })
        ));

        // The client's previous state is still valid and resendable
        let ok = svc
            .handle("forest", continue_request("investigate", &start.game_state))
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_ended_playthrough_refuses_further_turns() {
        let svc = service(Arc::new(FixedPort("prose")));
        let mut response = svc.handle("forest", start_request()).await.unwrap();

        for decision in [
            "investigate the ashes",
            "photograph everything",
            "document the plates",
            "compile the dossier",
            "report it to the prosecutor",
        ] {
            response = svc
                .handle("forest", continue_request(decision, &response.game_state))
                .await
                .unwrap();
        }
        assert_eq!(response.game_state.ended.as_deref(), Some("justice_served"));

        let err = svc
            .handle("forest", continue_request("keep going", &response.game_state))
            .await
            .unwrap_err();
        assert!(matches!(err, TurnError::Terminal(_)));
    }

    #[tokio::test]
    async fn test_each_scenario_starts_at_its_own_entry() {
        let svc = service(Arc::new(FixedPort("prose")));
        for def in scenarios::all() {
            let response = svc.handle(def.id, start_request()).await.unwrap();
            assert_eq!(response.game_state.current_node, def.entry);
            assert_eq!(response.game_state.scenario_id, def.id);
        }
    }
}
