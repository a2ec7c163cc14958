//! Scenario registry
//!
//! The three storylines, built once at first use and shared read-only by
//! every request for the lifetime of the process.

mod forest;
mod mangrove;
mod sea;

use std::sync::LazyLock;

use crate::domain::scenario::ScenarioDefinition;

static SCENARIOS: LazyLock<Vec<ScenarioDefinition>> = LazyLock::new(|| {
    vec![
        forest::definition(),
        mangrove::definition(),
        sea::definition(),
    ]
});

/// All registered scenarios, in listing order.
pub fn all() -> &'static [ScenarioDefinition] {
    &SCENARIOS
}

/// Look a scenario up by id.
pub fn find(id: &str) -> Option<&'static ScenarioDefinition> {
    SCENARIOS.iter().find(|s| s.id == id)
}
