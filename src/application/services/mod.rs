//! Application services - Use case implementations
//!
//! Two services carry the whole engine: `NarrativeService` wraps the
//! generation port with retry and fallback, and `TurnService` orchestrates
//! one turn request end to end.

pub mod narrative_service;
pub mod turn_service;

pub use narrative_service::{NarrativeMode, NarrativeService};
pub use turn_service::{TurnError, TurnService};
