//! Pokédex - Main Library
//!
//! Pokédex is a native desktop client for the National Pokédex REST API:
//! browse and search the catalog, inspect detail pages, and manage a
//! personal collection once signed in.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that mirror the backend's JSON contract
//!   - Pokémon records, users, the page envelope
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP API client and session store
//!   - Search/filter/paginate controller
//!   - Views for catalog, detail, collection, forms and profile
//!
//! # Usage
//!
//! ```rust,no_run
//! use pokedex::egui_app::{Config, catalog::CatalogController};
//!
//! let config = Config::new();
//! let mut catalog = CatalogController::new(config.page_size(), config.search_debounce());
//! let first_fetch = catalog.start();
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode; all state lives on the UI thread
//! - **Network**: requests run on a tokio runtime and report back over channels
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation and serialization failures
//! - `egui_app::api_client::ApiError` for transport and backend failures
//! - `egui_app::session::AuthError` for login/register failures

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
