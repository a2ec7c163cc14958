//! Static scenario definitions - the story graphs the engine runs on
//!
//! A `ScenarioDefinition` is a directed graph of story beats. It is built
//! once at process start and never mutated afterwards, so it can be shared
//! by every in-flight request without locking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a playthrough can conclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingKind {
    Positive,
    Neutral,
    Negative,
}

/// Closed set of decision classes a node can recognize.
///
/// Free text that matches none of a node's keyword lists maps to `Explore`,
/// so open-ended player phrasing never fails a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionClass {
    Examine,
    Question,
    Document,
    Confront,
    Withdraw,
    Report,
    Explore,
}

impl std::fmt::Display for DecisionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DecisionClass::Examine => "examine",
            DecisionClass::Question => "question",
            DecisionClass::Document => "document",
            DecisionClass::Confront => "confront",
            DecisionClass::Withdraw => "withdraw",
            DecisionClass::Report => "report",
            DecisionClass::Explore => "explore",
        };
        write!(f, "{}", name)
    }
}

/// A directed edge out of a story beat.
///
/// Edge order within a node is significant: when several edges match a
/// player decision, the edge authored first wins.
#[derive(Debug, Clone)]
pub struct EdgeDef {
    /// Decision class this edge responds to
    pub class: DecisionClass,
    /// Lowercase keywords that select this edge
    pub keywords: &'static [&'static str],
    /// Successor node id
    pub to: &'static str,
    /// Flags granted when this edge is taken
    pub grants: &'static [&'static str],
}

/// A single story beat within a scenario graph.
#[derive(Debug, Clone)]
pub struct NodeDef {
    pub id: &'static str,
    /// Chapter-style title shown to the player
    pub title: &'static str,
    /// Context handed to the narrative generator for this beat
    pub prompt: &'static str,
    /// Authored prose served when the generation service is unavailable
    pub fallback: &'static str,
    /// Outgoing edges in authored order; empty for ending nodes
    pub edges: Vec<EdgeDef>,
    /// Set only on designated ending nodes
    pub ending: Option<EndingKind>,
}

impl NodeDef {
    pub fn is_ending(&self) -> bool {
        self.ending.is_some()
    }
}

/// One complete storyline: entry node plus the beat graph.
#[derive(Debug, Clone)]
pub struct ScenarioDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Style/context preamble for the narrative generator
    pub narrator_brief: &'static str,
    /// Id of the node every playthrough starts at
    pub entry: &'static str,
    pub nodes: Vec<NodeDef>,
}

impl ScenarioDefinition {
    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The entry node. Definitions are checked at load, so this is total.
    pub fn entry_node(&self) -> &NodeDef {
        self.node(self.entry)
            .unwrap_or_else(|| panic!("scenario '{}' has no entry node '{}'", self.id, self.entry))
    }

    /// Every flag any edge in this scenario can grant.
    pub fn flag_vocabulary(&self) -> BTreeSet<&'static str> {
        self.nodes
            .iter()
            .flat_map(|n| n.edges.iter())
            .flat_map(|e| e.grants.iter().copied())
            .collect()
    }
}
