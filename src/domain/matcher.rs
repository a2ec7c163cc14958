//! Free-text decision classification
//!
//! Player decisions arrive as open-ended prose. Each node recognizes a small
//! keyword vocabulary per edge; anything that matches nothing falls through
//! to the node's `explore` edge. Kept separate from the narrative service so
//! classification is testable without any external call.

use crate::domain::scenario::{DecisionClass, EdgeDef};

/// Select the edge a player decision resolves to.
///
/// Matching is case-insensitive substring containment against each edge's
/// keyword list, in authored order; the first matching edge wins. When no
/// keyword matches, the first `explore` edge is chosen. Returns `None` only
/// for edge-less (ending) nodes.
pub fn select_edge<'a>(decision: &str, edges: &'a [EdgeDef]) -> Option<&'a EdgeDef> {
    let normalized = decision.to_lowercase();

    edges
        .iter()
        .find(|edge| edge.keywords.iter().any(|kw| normalized.contains(kw)))
        .or_else(|| edges.iter().find(|edge| edge.class == DecisionClass::Explore))
}
