//! Common test utilities and helpers
//!
//! - Mock backend helpers (wiremock)
//! - Client and session fixtures backed by in-memory storage
//! - JSON fixtures for Pokémon and users

pub mod fixtures;
pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
