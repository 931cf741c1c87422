//! Shared request path: bearer token, error payloads, decode failures.

use assert_matches::assert_matches;
use std::sync::Arc;

use pokedex::egui_app::storage::{MemoryStorage, TOKEN_KEY};
use pokedex::egui_app::{ApiClient, ApiError, Config, KeyValueStorage, PokemonApi};
use pokedex::shared::AppConfig;
use pokedex::shared::page::ResultSet;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

#[tokio::test]
async fn test_bearer_token_attached_when_stored() {
    let backend = TestBackend::signed_in("jwt-123").await;
    Mock::given(method("GET"))
        .and(path("/pokemons/my-pokemons"))
        .and(header("authorization", "Bearer jwt-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![bulbasaur()], 0, 1, 1)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let payload = backend.pokemon_api().my_pokemons().await.unwrap();
    assert_eq!(ResultSet::from(payload).len(), 1);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon(25, "Pikachu", &["Electric"])))
        .mount(&backend.server)
        .await;

    backend.pokemon_api().get(25).await.unwrap();

    let requests = backend.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_token_read_on_every_request() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulbasaur()))
        .mount(&backend.server)
        .await;

    let api = backend.pokemon_api();
    api.get(1).await.unwrap();
    backend.storage.set(TOKEN_KEY, "late-token").unwrap();
    api.get(1).await.unwrap();

    let requests = backend.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").and_then(|v| v.to_str().ok()),
        Some("Bearer late-token")
    );
}

#[tokio::test]
async fn test_backend_message_propagated_unchanged() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/9000"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_body(404, "Not Found", "Pokemon not found with id: 9000")),
        )
        .mount(&backend.server)
        .await;

    let err = backend.pokemon_api().get(9000).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status { status: 404, message: "Pokemon not found with id: 9000".to_string() }
    );
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unauthorized_status_classified() {
    let backend = TestBackend::signed_in("expired").await;
    Mock::given(method("GET"))
        .and(path("/pokemons/my-pokemons"))
        .respond_with(ResponseTemplate::new(401).set_body_string(""))
        .mount(&backend.server)
        .await;

    let err = backend.pokemon_api().my_pokemons().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), "Unauthorized");
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemons/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&backend.server)
        .await;

    assert_matches!(backend.pokemon_api().get(1).await, Err(ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = Config::with_builder(
        AppConfig::builder()
            .server_url("http://127.0.0.1:1")
            .request_timeout_secs(5),
    )
    .unwrap();
    let client = ApiClient::new(config, Arc::new(MemoryStorage::new()));

    assert_matches!(PokemonApi::new(client).get(1).await, Err(ApiError::Network(_)));
}
