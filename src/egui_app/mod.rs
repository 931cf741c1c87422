//! egui Native Desktop App Module
//!
//! Native desktop client for the Pokédex REST API, built on egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Server URL, page size, debounce and timeout settings
//! - **`storage`** - Durable key-value store holding the session
//! - **`api_client`** - Shared HTTP client, bearer token and error mapping
//! - **`pokemon_api`** / **`auth`** - Typed endpoint wrappers
//! - **`session`** - Login, registration, logout and session restore
//! - **`catalog`** - Debounced search, type filter and pagination controller
//! - **`detail`**, **`collection`**, **`form`** - Per-page state
//! - **`notifications`** - Transient success/info/error messages
//! - **`tasks`** - Runs futures on the runtime and reports over channels
//! - **`state`** - `AppState`, the single owner of everything above
//! - **`views`** / **`theme`** - Rendering
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── config.rs       - Configuration
//! ├── storage.rs      - Session storage
//! ├── api_client.rs   - HTTP client
//! ├── pokemon_api.rs  - /pokemons endpoints
//! ├── auth.rs         - /auth endpoints and AuthState
//! ├── session.rs      - Session store
//! ├── catalog/        - Catalog controller, debouncer, pagination
//! ├── detail.rs       - Detail page state
//! ├── collection.rs   - Collection page state
//! ├── form.rs         - Add/edit form
//! ├── notifications.rs
//! ├── tasks.rs
//! ├── types.rs        - AppView
//! ├── state/          - AppState
//! ├── views/          - egui views
//! └── theme/          - Colors and styles
//! ```

pub mod api_client;
pub mod auth;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod detail;
pub mod form;
pub mod notifications;
pub mod pokemon_api;
pub mod session;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api_client::{ApiClient, ApiError};
pub use auth::AuthState;
pub use config::Config;
pub use pokemon_api::PokemonApi;
pub use session::{AuthError, SessionStore};
pub use state::AppState;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use types::AppView;
