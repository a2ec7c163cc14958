//! Domain layer - Core game logic with no external dependencies
//!
//! This layer contains:
//! - GameState: the client-held playthrough snapshot and its validation
//! - ScenarioDefinition: the immutable story graphs
//! - Matcher: free-text decision classification
//! - ScenarioHandler: the per-scenario turn state machine

pub mod game_state;
pub mod handler;
pub mod matcher;
pub mod scenario;
pub mod scenarios;
