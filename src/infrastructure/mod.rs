//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes and error mapping
//! - Groq: the narrative-generation client
//! - Config: application configuration
//! - State: shared application state

pub mod config;
pub mod groq;
pub mod http;
pub mod state;
