//! Client-held game state
//!
//! The server is stateless: the only playthrough state is the `GameState`
//! the client resends with every turn. It crosses the trust boundary twice
//! per turn (server -> client -> server), so it is reconstructed and fully
//! re-validated on every request. Inconsistent payloads are rejected, never
//! repaired; silent repair would let the server drift away from what the
//! client believes has happened.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::scenario::ScenarioDefinition;

/// Maximum narrative excerpt length kept per history entry.
const EXCERPT_MAX_CHARS: usize = 240;

/// One past turn: where the decision was taken, what the player chose, and
/// an excerpt of the prose that answered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub node: String,
    pub decision: String,
    pub narrative: String,
}

/// Serializable snapshot of a playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Which scenario governs this playthrough; immutable once set
    pub scenario_id: String,
    /// Strictly +1 per successful continue; always `history.len()`
    pub turn_index: u32,
    /// Active story beat
    pub current_node: String,
    /// Append-only record of past turns
    pub history: Vec<HistoryEntry>,
    /// Discovered clues; grows monotonically, never shrinks
    pub flags: BTreeSet<String>,
    /// Ending node id once the playthrough is terminal
    pub ended: Option<String>,
}

impl GameState {
    /// Fresh state at a scenario's entry node.
    pub fn at_entry(def: &ScenarioDefinition) -> Self {
        Self {
            scenario_id: def.id.to_string(),
            turn_index: 0,
            current_node: def.entry.to_string(),
            history: Vec::new(),
            flags: BTreeSet::new(),
            ended: None,
        }
    }

    /// Deserialize a client payload without any consistency checking.
    pub fn from_value(value: serde_json::Value) -> Result<Self, StateError> {
        serde_json::from_value(value).map_err(|e| StateError::Shape(e.to_string()))
    }

    /// Check internal consistency against the governing scenario.
    pub fn validate(&self, def: &ScenarioDefinition) -> Result<(), StateError> {
        if self.scenario_id != def.id {
            return Err(StateError::ScenarioMismatch {
                state: self.scenario_id.clone(),
                requested: def.id.to_string(),
            });
        }

        if self.turn_index as usize != self.history.len() {
            return Err(StateError::TurnIndexMismatch {
                turn_index: self.turn_index,
                history_len: self.history.len(),
            });
        }

        let node = def
            .node(&self.current_node)
            .ok_or_else(|| StateError::UnknownNode(self.current_node.clone()))?;

        let vocabulary = def.flag_vocabulary();
        if let Some(unknown) = self.flags.iter().find(|f| !vocabulary.contains(f.as_str())) {
            return Err(StateError::UnknownFlag(unknown.clone()));
        }

        match (&self.ended, node.is_ending()) {
            (Some(marker), true) if marker == &self.current_node => Ok(()),
            (Some(marker), _) => Err(StateError::BadEnding(marker.clone())),
            // An ending node with no ended marker is inconsistent too
            (None, true) => Err(StateError::MissingEnding(self.current_node.clone())),
            (None, false) => Ok(()),
        }
    }

    /// Attach the prose produced for the latest turn to its history entry.
    /// No-op on a fresh start state (empty history).
    pub fn attach_excerpt(&mut self, narrative: &str) {
        if let Some(entry) = self.history.last_mut() {
            entry.narrative = excerpt(narrative);
        }
    }
}

/// Truncate prose to a bounded excerpt on a char boundary.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_string();
    }
    text.chars().take(EXCERPT_MAX_CHARS).collect()
}

/// Ways a client-supplied state can fail validation.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("game_state does not match the expected shape: {0}")]
    Shape(String),
    #[error("game_state belongs to scenario '{state}' but the request targets '{requested}'")]
    ScenarioMismatch { state: String, requested: String },
    #[error("turn_index {turn_index} does not match history length {history_len}")]
    TurnIndexMismatch { turn_index: u32, history_len: usize },
    #[error("current_node '{0}' is not part of this scenario")]
    UnknownNode(String),
    #[error("flag '{0}' is not in this scenario's vocabulary")]
    UnknownFlag(String),
    #[error("ended marker '{0}' does not name the current ending node")]
    BadEnding(String),
    #[error("current_node '{0}' is an ending node but 'ended' is not set")]
    MissingEnding(String),
}
