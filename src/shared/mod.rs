//! Shared Module
//!
//! This module contains the types that mirror the backend's JSON contract,
//! plus configuration and error types used by every layer of the client.
//!
//! # Overview
//!
//! The shared module has no UI or network dependencies. Everything here is
//! plain data with serde derives, so it can be unit tested in isolation and
//! reused by any front end.

/// Pokémon records, elemental types and create/update payloads
pub mod pokemon;

/// User records and authentication payloads
pub mod user;

/// Paginated envelope and the normalized result set
pub mod page;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use pokemon::{BaseStats, NewPokemon, Pokemon, PokemonType};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User, UserRole};
pub use page::{Page, PageInfo, PokemonPayload, ResultSet};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
