//! Application layer - Use cases and ports

pub mod dto;
pub mod ports;
pub mod services;
