//! Mock backend helpers for integration tests
//!
//! Every test gets its own wiremock server and a client pointed at it.

use std::sync::Arc;

use pokedex::egui_app::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};
use pokedex::egui_app::{ApiClient, Config, KeyValueStorage, PokemonApi, SessionStore};
use pokedex::shared::AppConfig;
use wiremock::MockServer;

/// Everything a test needs to talk to a mock backend.
pub struct TestBackend {
    pub server: MockServer,
    pub storage: Arc<MemoryStorage>,
    pub client: ApiClient,
}

impl TestBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url(server.uri())
                .request_timeout_secs(5),
        )
        .unwrap();
        let storage = Arc::new(MemoryStorage::new());
        let client = ApiClient::new(config, storage.clone());
        Self { server, storage, client }
    }

    /// Same as `start`, with a session already stored.
    pub async fn signed_in(token: &str) -> Self {
        let backend = Self::start().await;
        let user = serde_json::to_string(&crate::common::ash()).unwrap();
        backend
            .storage
            .set_entries(&[(USER_KEY, user.as_str()), (TOKEN_KEY, token)])
            .unwrap();
        backend
    }

    pub fn pokemon_api(&self) -> PokemonApi {
        PokemonApi::new(self.client.clone())
    }

    pub fn session(&self) -> SessionStore {
        SessionStore::new(self.storage.clone(), self.client.clone())
    }
}
