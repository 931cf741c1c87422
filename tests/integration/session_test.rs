//! Session store against the `/auth` endpoints.

use assert_matches::assert_matches;
use pokedex::egui_app::storage::{TOKEN_KEY, USER_KEY};
use pokedex::egui_app::{AuthError, KeyValueStorage};
use pokedex::shared::{LoginRequest, RegisterRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::*;

fn credentials() -> LoginRequest {
    LoginRequest { username: "ash".into(), password: "pikachu".into() }
}

fn new_trainer() -> RegisterRequest {
    RegisterRequest {
        username: "ash".into(),
        email: "ash@pallet.town".into(),
        password: "pikachu".into(),
        first_name: Some("Ash".into()),
        last_name: None,
    }
}

#[tokio::test]
async fn test_login_stores_token_and_user() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({ "username": "ash", "password": "pikachu" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_response("jwt-abc")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let session = backend.session();
    let user = session.login(credentials()).await.unwrap();

    assert_eq!(user.username, "ash");
    assert!(session.is_authenticated());
    assert_eq!(backend.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("jwt-abc"));
    assert_eq!(session.stored_user().unwrap().map(|u| u.email), Some("ash@pallet.town".to_string()));
}

#[tokio::test]
async fn test_invalid_credentials_are_authentication_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(error_body(401, "Unauthorized", "Invalid username or password")),
        )
        .mount(&backend.server)
        .await;

    let session = backend.session();
    let err = session.login(credentials()).await.unwrap_err();

    assert_matches!(err, AuthError::Authentication { ref message } if message == "Invalid username or password");
    assert!(!session.is_authenticated());
    assert!(backend.storage.get(USER_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_on_login_is_api_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&backend.server)
        .await;

    assert_matches!(backend.session().login(credentials()).await, Err(AuthError::Api(_)));
}

#[tokio::test]
async fn test_register_with_token_signs_in() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_response("jwt-new")))
        .mount(&backend.server)
        .await;

    let session = backend.session();
    session.register(new_trainer()).await.unwrap();
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_register_without_token_does_not_sign_in() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(ash()))
        .mount(&backend.server)
        .await;

    let session = backend.session();
    let user = session.register(new_trainer()).await.unwrap();
    assert_eq!(user.username, "ash");
    assert!(!session.is_authenticated());
    assert!(backend.storage.get(USER_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(error_body(400, "Bad Request", "Username is already taken!")),
        )
        .mount(&backend.server)
        .await;

    let err = backend.session().register(new_trainer()).await.unwrap_err();
    assert_eq!(err.message(), "Username is already taken!");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let backend = TestBackend::signed_in("jwt").await;
    let session = backend.session();
    assert!(session.is_authenticated());

    session.logout().unwrap();

    assert!(!session.is_authenticated());
    assert!(backend.storage.get(TOKEN_KEY).unwrap().is_none());
    assert!(backend.storage.get(USER_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_current_user_fetches_me_when_record_missing() {
    let backend = TestBackend::start().await;
    backend.storage.set(TOKEN_KEY, "jwt").unwrap();
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ash()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let session = backend.session();
    let user = session.current_user().await.unwrap();
    assert_eq!(user.map(|u| u.username), Some("ash".to_string()));
    // cached now, no second request
    assert!(session.current_user().await.unwrap().is_some());
}

#[tokio::test]
async fn test_current_user_without_token_is_none() {
    let backend = TestBackend::start().await;
    assert!(backend.session().current_user().await.unwrap().is_none());
    assert!(backend.server.received_requests().await.unwrap().is_empty());
}
