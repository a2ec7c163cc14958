//! Scenario handler - the per-scenario turn state machine
//!
//! Owns the advance semantics for one `ScenarioDefinition`: classify the
//! player's decision, follow the matching edge, record history, union
//! granted flags, and mark the playthrough ended when the successor is an
//! ending node.

use crate::domain::game_state::{GameState, HistoryEntry};
use crate::domain::matcher;
use crate::domain::scenario::{DecisionClass, NodeDef, ScenarioDefinition};

/// Outcome of a successful advance.
#[derive(Debug)]
pub struct Advance<'a> {
    /// The updated state (one more turn, one more history entry)
    pub state: GameState,
    /// The beat the playthrough moved to
    pub node: &'a NodeDef,
    /// How the player's decision was classified
    pub class: DecisionClass,
}

/// State-machine logic for one scenario.
pub struct ScenarioHandler {
    def: &'static ScenarioDefinition,
}

impl ScenarioHandler {
    pub fn new(def: &'static ScenarioDefinition) -> Self {
        Self { def }
    }

    pub fn definition(&self) -> &'static ScenarioDefinition {
        self.def
    }

    /// Begin a playthrough. Deterministic: always the scenario's entry node,
    /// turn 0, empty history and flags.
    pub fn start(&self) -> GameState {
        GameState::at_entry(self.def)
    }

    /// Advance a validated state by one beat.
    pub fn advance(&self, state: &GameState, decision: &str) -> Result<Advance<'_>, TransitionError> {
        if let Some(marker) = &state.ended {
            return Err(TransitionError::Terminal(marker.clone()));
        }

        let node = self
            .def
            .node(&state.current_node)
            .ok_or_else(|| TransitionError::UnknownNode(state.current_node.clone()))?;

        let edge = matcher::select_edge(decision, &node.edges)
            .ok_or_else(|| TransitionError::Terminal(node.id.to_string()))?;

        let successor = self
            .def
            .node(edge.to)
            .ok_or_else(|| TransitionError::UnknownNode(edge.to.to_string()))?;

        let mut next = state.clone();
        next.history.push(HistoryEntry {
            node: node.id.to_string(),
            decision: decision.to_string(),
            narrative: String::new(),
        });
        next.turn_index += 1;
        next.current_node = successor.id.to_string();
        next.flags
            .extend(edge.grants.iter().map(|f| f.to_string()));
        next.ended = successor.is_ending().then(|| successor.id.to_string());

        Ok(Advance {
            state: next,
            node: successor,
            class: edge.class,
        })
    }
}

/// Transitions that the state machine refuses.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("playthrough already ended at '{0}'")]
    Terminal(String),
    #[error("node '{0}' is not part of this scenario")]
    UnknownNode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenarios;

    fn forest_handler() -> ScenarioHandler {
        ScenarioHandler::new(scenarios::find("forest").unwrap())
    }

    #[test]
    fn test_start_is_deterministic() {
        let handler = forest_handler();
        let a = handler.start();
        let b = handler.start();
        assert_eq!(a, b);
        assert_eq!(a.current_node, "ashes_call");
        assert_eq!(a.turn_index, 0);
        assert!(a.history.is_empty());
        assert!(a.flags.is_empty());
        assert!(a.ended.is_none());
    }

    #[test]
    fn test_advance_increments_turn_and_appends_history() {
        let handler = forest_handler();
        let state = handler.start();

        let advance = handler.advance(&state, "investigate the ashes").unwrap();
        assert_eq!(advance.state.turn_index, 1);
        assert_eq!(advance.state.history.len(), 1);
        assert_eq!(advance.state.history[0].node, "ashes_call");
        assert_eq!(advance.state.history[0].decision, "investigate the ashes");
    }

    #[test]
    fn test_examine_decision_follows_authored_edge() {
        let handler = forest_handler();
        let state = handler.start();

        let advance = handler.advance(&state, "investigate the ashes").unwrap();
        assert_eq!(advance.class, DecisionClass::Examine);
        assert_eq!(advance.state.current_node, "trail_marks");
    }

    #[test]
    fn test_unrecognized_decision_takes_explore_edge() {
        let handler = forest_handler();
        let state = handler.start();

        let advance = handler.advance(&state, "dance").unwrap();
        assert_eq!(advance.class, DecisionClass::Explore);
        assert!(advance.state.ended.is_none());
    }

    #[test]
    fn test_flags_only_grow() {
        let handler = forest_handler();
        let mut state = handler.start();

        for decision in ["investigate the ashes", "photograph everything", "document the plates"] {
            let before = state.flags.clone();
            state = handler.advance(&state, decision).unwrap().state;
            assert!(state.flags.is_superset(&before));
        }
    }

    #[test]
    fn test_reaching_an_ending_sets_ended() {
        let handler = forest_handler();
        let mut state = handler.start();

        // Walk the spine to the decision beat, then hand over the dossier
        for decision in ["look closer", "keep moving", "press on", "push forward"] {
            state = handler.advance(&state, decision).unwrap().state;
        }
        assert_eq!(state.current_node, "final_dossier");

        let advance = handler
            .advance(&state, "report everything to the prosecutor")
            .unwrap();
        assert_eq!(advance.state.ended.as_deref(), Some("justice_served"));
        assert!(advance.node.is_ending());
    }

    #[test]
    fn test_terminal_state_rejects_advance() {
        let handler = forest_handler();
        let mut state = handler.start();
        state.ended = Some("justice_served".to_string());

        let err = handler.advance(&state, "keep going").unwrap_err();
        assert!(matches!(err, TransitionError::Terminal(_)));
    }

    #[test]
    fn test_state_from_another_scenario_is_refused() {
        let handler = forest_handler();
        let mut state = handler.start();
        state.current_node = "golden_shore".to_string(); // mangrove beat

        let err = handler.advance(&state, "look around").unwrap_err();
        assert!(matches!(err, TransitionError::UnknownNode(_)));
    }
}
