//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP infrastructure can
//! serialize/deserialize without pulling payload shapes into the domain.

pub mod turn;

pub use turn::{ScenarioInfo, TurnRequest, TurnResponse};
