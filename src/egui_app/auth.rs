/**
 * Authentication Module
 *
 * Holds the UI-facing authentication state and the HTTP calls behind
 * login, registration and "who am I".
 */

use reqwest::Method;

use crate::egui_app::api_client::{ApiClient, ApiError};
use crate::shared::user::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User};

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a restored or freshly created session.
    pub fn signed_in(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            error: None,
            loading: false,
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// `POST /auth/login`
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let builder = client.request(Method::POST, "/auth/login").json(request);
    client.send_json(builder).await
}

/// `POST /auth/register`
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    let builder = client.request(Method::POST, "/auth/register").json(request);
    client.send_json(builder).await
}

/// `GET /auth/me`
pub async fn get_me(client: &ApiClient) -> Result<User, ApiError> {
    let builder = client.request(Method::GET, "/auth/me");
    client.send_json(builder).await
}
