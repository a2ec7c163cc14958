//! Outbound ports - Interfaces the application requires from external systems

mod narrative_port;

pub use narrative_port::{HistoryLine, NarrativeError, NarrativePort, NarrativeRequest};
